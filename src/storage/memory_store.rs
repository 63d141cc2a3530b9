/// In-memory graph store
///
/// Adjacency lists keyed by city. Every `add_path` writes one edge under
/// each endpoint, which keeps the graph logically undirected:
///
/// ```text
/// add_path(A, B, 5)   =>   A: [(B, 5)]
///                          B: [(A, 5)]
/// ```

use super::{GraphStorage, StorageResult};
use crate::types::{CityId, Edge, Weight};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Undirected weighted multigraph
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    adjacency: HashMap<CityId, Vec<Edge>>,
    /// Cities in first-seen order
    order: Vec<CityId>,
    paths_added: usize,
}

impl GraphStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bidirectional path between two cities
    ///
    /// Both cities are created if new. Repeated calls are never rejected:
    /// adding the same path twice yields two parallel edges.
    pub fn add_path(&mut self, from: CityId, to: CityId, weight: Weight) {
        tracing::debug!(%from, %to, weight, "adding path");

        self.ensure_city(&from);
        self.ensure_city(&to);

        // A self loop lands twice in the same list, same as two distinct endpoints would.
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(Edge::new(to.clone(), weight));
        }
        if let Some(edges) = self.adjacency.get_mut(&to) {
            edges.push(Edge::new(from, weight));
        }

        self.paths_added += 1;
    }

    /// Remove every city and edge
    pub fn reset(&mut self) {
        tracing::debug!(cities = self.order.len(), paths = self.paths_added, "resetting store");

        self.adjacency.clear();
        self.order.clear();
        self.paths_added = 0;
    }

    /// Number of cities
    pub fn city_count(&self) -> usize {
        self.order.len()
    }

    /// Number of `add_path` calls since the last reset
    pub fn path_count(&self) -> usize {
        self.paths_added
    }

    /// Check if the store holds no cities
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Take a serializable copy of the adjacency lists
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            cities: self
                .order
                .iter()
                .map(|city| CityEntry {
                    city: city.clone(),
                    edges: self.neighbors(city).to_vec(),
                })
                .collect(),
        }
    }

    fn ensure_city(&mut self, city: &CityId) {
        if !self.adjacency.contains_key(city) {
            self.adjacency.insert(city.clone(), Vec::new());
            self.order.push(city.clone());
        }
    }
}

impl GraphStorage for GraphStore {
    fn contains(&self, city: &CityId) -> bool {
        self.adjacency.contains_key(city)
    }

    fn neighbors(&self, city: &CityId) -> &[Edge] {
        self.adjacency.get(city).map(Vec::as_slice).unwrap_or(&[])
    }

    fn cities(&self) -> &[CityId] {
        &self.order
    }
}

/// Serializable view of a store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphSnapshot {
    pub cities: Vec<CityEntry>,
}

/// One city and its adjacency list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityEntry {
    pub city: CityId,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> StorageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
