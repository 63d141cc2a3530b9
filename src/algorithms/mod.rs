/// Route search algorithms
///
/// This module implements the searches offered to the user:
/// - Breadth-first search (fewest hops)
/// - Depth-first search (first route found, stack order)
/// - Uniform-cost search (lowest total distance)
///
/// plus the distance accumulator used to report a route's cost.

pub mod cost;
pub mod traversal;
pub mod uniform_cost;

pub use cost::path_cost;
pub use traversal::{bfs, dfs};
pub use uniform_cost::ucs;

use crate::storage::{GraphStorage, StorageError};
use crate::types::{CityId, Route, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Algorithm errors
#[derive(Error, Debug)]
pub enum AlgorithmError {
    #[error("No path found between {0} and {1}")]
    PathNotFound(CityId, CityId),

    #[error("Invalid route at leg {position}: {source}")]
    InvalidPath {
        position: usize,
        source: StorageError,
    },

    #[error("Unknown search algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// Search strategy selectable by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchAlgorithm {
    Bfs,
    Dfs,
    Ucs,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 3] = [Self::Bfs, Self::Dfs, Self::Ucs];

    /// Run this search
    ///
    /// # Returns
    /// * `Some(route)` from `start` to `end`
    /// * `None` if either city is unknown or `end` is unreachable
    pub fn run(self, storage: &dyn GraphStorage, start: &CityId, end: &CityId) -> Option<Route> {
        match self {
            Self::Bfs => bfs(storage, start, end),
            Self::Dfs => dfs(storage, start, end),
            Self::Ucs => ucs(storage, start, end),
        }
    }

    /// Short upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Ucs => "UCS",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "ucs" => Ok(Self::Ucs),
            _ => Err(AlgorithmError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Result of a successful search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Algorithm that produced the route
    pub algorithm: SearchAlgorithm,
    /// Cities from start to end
    pub route: Route,
    /// Total distance, summed over the route's edges
    pub cost: Weight,
}

/// Run a search and price the route it finds
///
/// # Arguments
/// * `storage` - Graph to search
/// * `algorithm` - Search strategy
/// * `start` - Start city
/// * `end` - Destination city
///
/// # Returns
/// * `Ok(RouteResult)` with the route and its total distance
/// * `Err(AlgorithmError::PathNotFound)` if no route exists
pub fn search(
    storage: &dyn GraphStorage,
    algorithm: SearchAlgorithm,
    start: &CityId,
    end: &CityId,
) -> AlgorithmResult<RouteResult> {
    let route = algorithm
        .run(storage, start, end)
        .ok_or_else(|| AlgorithmError::PathNotFound(start.clone(), end.clone()))?;
    let cost = path_cost(storage, &route)?;

    tracing::debug!(%algorithm, %start, %end, hops = route.hop_count(), cost, "route found");

    Ok(RouteResult {
        algorithm,
        route,
        cost,
    })
}
