use super::city::CityId;
use serde::{Deserialize, Serialize};

/// Distance carried by an edge
///
/// Unsigned so that negative distances cannot reach the store.
pub type Weight = u64;

/// Edge (adjacency record) in the graph
///
/// Stored under its source city, so only the far end is kept.
/// Every added path produces two of these with the same weight,
/// one under each endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Neighbor this edge leads to
    pub to: CityId,

    /// Distance to the neighbor
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge
    pub fn new(to: impl Into<CityId>, weight: Weight) -> Self {
        Self {
            to: to.into(),
            weight,
        }
    }

    /// Check if this edge leads to the given city
    pub fn leads_to(&self, city: &CityId) -> bool {
        &self.to == city
    }
}
