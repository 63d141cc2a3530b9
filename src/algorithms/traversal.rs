/// Breadth-first and depth-first route search
///
/// Both searches keep a frontier of partial routes seeded with `[start]`.
/// They differ only in which end of the frontier is taken next.

use crate::storage::GraphStorage;
use crate::types::{CityId, Route};
use std::collections::{HashSet, VecDeque};

/// Which end of the frontier to take from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrontierOrder {
    /// Oldest partial route first (queue)
    Fifo,
    /// Newest partial route first (stack)
    Lifo,
}

/// Find a route with the fewest hops using breadth-first search
///
/// # Arguments
/// * `storage` - Graph to search
/// * `start` - Start city
/// * `end` - Destination city
///
/// # Returns
/// * `Some(route)` with the minimum number of edges
/// * `None` if `start` is unknown or `end` is unreachable
pub fn bfs(storage: &dyn GraphStorage, start: &CityId, end: &CityId) -> Option<Route> {
    traverse(storage, start, end, FrontierOrder::Fifo)
}

/// Find any route using depth-first search
///
/// Neighbors are pushed in adjacency order, so the most recently added
/// neighbor of a city is explored first.
///
/// # Returns
/// * `Some(route)` in the order the search reaches `end`, not necessarily shortest
/// * `None` if `start` is unknown or `end` is unreachable
pub fn dfs(storage: &dyn GraphStorage, start: &CityId, end: &CityId) -> Option<Route> {
    traverse(storage, start, end, FrontierOrder::Lifo)
}

fn traverse(
    storage: &dyn GraphStorage,
    start: &CityId,
    end: &CityId,
    order: FrontierOrder,
) -> Option<Route> {
    if !storage.contains(start) {
        return None;
    }

    let mut frontier = VecDeque::new();
    let mut visited: HashSet<CityId> = HashSet::new();

    frontier.push_back(Route::new(start.clone()));

    let take = |frontier: &mut VecDeque<Route>| match order {
        FrontierOrder::Fifo => frontier.pop_front(),
        FrontierOrder::Lifo => frontier.pop_back(),
    };

    while let Some(route) = take(&mut frontier) {
        let current = route.end();

        if current == end {
            tracing::trace!(?order, expanded = visited.len(), "target reached");
            return Some(route);
        }

        // Expand each city at most once
        if !visited.insert(current.clone()) {
            continue;
        }

        for edge in storage.neighbors(current) {
            if !visited.contains(&edge.to) {
                frontier.push_back(route.extend(edge.to.clone()));
            }
        }
    }

    tracing::trace!(?order, expanded = visited.len(), "frontier exhausted");
    None
}
