use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// CityId: identifier of a node in the graph
///
/// Identity is exact string equality. The core never normalizes labels;
/// case folding happens once at the input boundary (see `parser`).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(String);

impl CityId {
    /// Create a CityId from a label, taken verbatim
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the label
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id and return the label
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CityId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for CityId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl Borrow<str> for CityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_identity_is_exact() {
        assert_eq!(CityId::new("NYC"), CityId::from("NYC"));
        assert_ne!(CityId::new("NYC"), CityId::new("nyc"));
        assert_ne!(CityId::new("NYC"), CityId::new("NYC "));
    }

    #[test]
    fn test_display() {
        assert_eq!(CityId::new("San Diego").to_string(), "San Diego");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(CityId::new("A"), 1);
        assert_eq!(map.get("A"), Some(&1));
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&CityId::new("LA")).unwrap();
        assert_eq!(json, "\"LA\"");

        let back: CityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CityId::new("LA"));
    }
}
