use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "pretty"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LayoutConfig {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    /// Fixed RNG seed; random layout each run when absent
    pub seed: Option<u64>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 50,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            logging: LoggingConfig {
                level: lookup("LOG_LEVEL").unwrap_or(defaults.logging.level),
                format: lookup("LOG_FORMAT").unwrap_or(defaults.logging.format),
            },
            layout: LayoutConfig {
                width: parse_or(&lookup, "CANVAS_WIDTH", defaults.layout.width)?,
                height: parse_or(&lookup, "CANVAS_HEIGHT", defaults.layout.height)?,
                margin: parse_or(&lookup, "CANVAS_MARGIN", defaults.layout.margin)?,
                seed: lookup("LAYOUT_SEED").map(|s| s.parse()).transpose()?,
            },
        };

        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .parse()
            .map_err(|e| anyhow::anyhow!("{}={:?}: {}", key, value, e)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("LOG_LEVEL", "debug"),
            ("LOG_FORMAT", "json"),
            ("CANVAS_WIDTH", "1024"),
            ("CANVAS_HEIGHT", "768"),
            ("LAYOUT_SEED", "42"),
        ]))
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.layout.width, 1024);
        assert_eq!(config.layout.height, 768);
        assert_eq!(config.layout.margin, 50);
        assert_eq!(config.layout.seed, Some(42));
    }

    #[test]
    fn test_malformed_number() {
        assert!(Config::from_lookup(lookup_from(&[("CANVAS_WIDTH", "wide")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("LAYOUT_SEED", "-1")])).is_err());
    }
}
