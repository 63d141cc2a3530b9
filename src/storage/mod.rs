/// Graph storage for the route finder
///
/// This module provides the store interface and its implementation:
/// - GraphStorage trait: read-only view used by the search algorithms
/// - GraphStore: in-memory undirected multigraph owned by a session

pub mod error;
pub mod memory_store;

use crate::types::{CityId, Edge, Weight};
pub use error::{StorageError, StorageResult};
pub use memory_store::{CityEntry, GraphSnapshot, GraphStore};

/// Read-only graph access
///
/// Search functions only ever see a store through this trait, so they
/// cannot mutate it.
pub trait GraphStorage {
    /// Check if a city has been added
    fn contains(&self, city: &CityId) -> bool;

    /// Get the adjacency list of a city in insertion order
    ///
    /// # Returns
    /// * The stored edges, or an empty slice if the city is unknown
    fn neighbors(&self, city: &CityId) -> &[Edge];

    /// All known cities in the order they were first seen
    fn cities(&self) -> &[CityId];

    /// Look up the distance of the first edge from `from` to `to`
    ///
    /// Parallel edges are resolved by list order: the earliest added wins.
    ///
    /// # Returns
    /// * `Ok(weight)` if an edge exists
    /// * `Err(StorageError::EdgeNotFound)` otherwise
    fn edge_weight(&self, from: &CityId, to: &CityId) -> StorageResult<Weight> {
        self.neighbors(from)
            .iter()
            .find(|edge| edge.leads_to(to))
            .map(|edge| edge.weight)
            .ok_or_else(|| StorageError::EdgeNotFound {
                from: from.clone(),
                to: to.clone(),
            })
    }
}
