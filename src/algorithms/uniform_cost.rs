/// Uniform-cost route search
///
/// Expands partial routes in order of accumulated distance. Equal-cost
/// entries come out in the order they were queued.

use crate::storage::GraphStorage;
use crate::types::{CityId, Route, Weight};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// Partial route in the priority queue
#[derive(Debug, Clone, Eq, PartialEq)]
struct FrontierEntry {
    cost: Weight,
    /// Queue position, breaks cost ties in favor of the earliest entry
    seq: u64,
    route: Route,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the route with the lowest total distance using uniform-cost search
///
/// # Arguments
/// * `storage` - Graph to search
/// * `start` - Start city
/// * `end` - Destination city
///
/// # Returns
/// * `Some(route)` minimizing the sum of edge weights
/// * `None` if `start` is unknown or `end` is unreachable
pub fn ucs(storage: &dyn GraphStorage, start: &CityId, end: &CityId) -> Option<Route> {
    if !storage.contains(start) {
        return None;
    }

    let mut heap = BinaryHeap::new();
    let mut visited: HashSet<CityId> = HashSet::new();
    let mut seq = 0u64;

    heap.push(FrontierEntry {
        cost: 0,
        seq,
        route: Route::new(start.clone()),
    });

    while let Some(FrontierEntry { cost, route, .. }) = heap.pop() {
        let current = route.end();

        if current == end {
            tracing::trace!(cost, expanded = visited.len(), "target reached");
            return Some(route);
        }

        if !visited.insert(current.clone()) {
            continue;
        }

        for edge in storage.neighbors(current) {
            if visited.contains(&edge.to) {
                continue;
            }

            seq += 1;
            heap.push(FrontierEntry {
                cost: cost.saturating_add(edge.weight),
                seq,
                route: route.extend(edge.to.clone()),
            });
        }
    }

    tracing::trace!(expanded = visited.len(), "frontier exhausted");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::path_cost;
    use crate::storage::GraphStore;

    fn city(label: &str) -> CityId {
        CityId::new(label)
    }

    fn labels(route: &Route) -> Vec<&str> {
        route.cities().iter().map(CityId::as_str).collect()
    }

    fn build(paths: &[(&str, &str, u64)]) -> GraphStore {
        let mut store = GraphStore::new();
        for (from, to, weight) in paths {
            store.add_path(city(from), city(to), *weight);
        }
        store
    }

    #[test]
    fn test_ucs_minimum_weight() {
        let store = build(&[("A", "B", 5), ("B", "C", 5), ("A", "C", 100)]);

        let route = ucs(&store, &city("A"), &city("C")).unwrap();
        assert_eq!(labels(&route), vec!["A", "B", "C"]);
        assert_eq!(path_cost(&store, &route).unwrap(), 10);
    }

    #[test]
    fn test_ucs_ties_go_to_earliest_queued() {
        // Two routes of cost 2 to D: via B (queued first) and via C
        let store = build(&[("A", "B", 1), ("A", "C", 1), ("B", "D", 1), ("C", "D", 1)]);

        let route = ucs(&store, &city("A"), &city("D")).unwrap();
        assert_eq!(labels(&route), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_ucs_zero_weight_edges() {
        let store = build(&[("A", "B", 0), ("B", "C", 0), ("A", "C", 1)]);

        let route = ucs(&store, &city("A"), &city("C")).unwrap();
        assert_eq!(labels(&route), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_ucs_parallel_edges_use_cheapest_for_search() {
        // The search sees both parallel edges; the cheap one makes A-B-C win.
        let store = build(&[("A", "B", 50), ("A", "B", 1), ("B", "C", 1), ("A", "C", 10)]);

        let route = ucs(&store, &city("A"), &city("C")).unwrap();
        assert_eq!(labels(&route), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_ucs_not_found() {
        let store = build(&[("A", "B", 1), ("C", "D", 1)]);

        assert!(ucs(&store, &city("A"), &city("D")).is_none());
        assert!(ucs(&GraphStore::new(), &city("A"), &city("A")).is_none());
    }

    #[test]
    fn test_ucs_start_equals_end() {
        let store = build(&[("A", "B", 1)]);
        assert_eq!(labels(&ucs(&store, &city("A"), &city("A")).unwrap()), vec!["A"]);
    }

    #[test]
    fn test_frontier_entry_ordering() {
        let a = Route::new(city("A"));
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { cost: 5, seq: 0, route: a.clone() });
        heap.push(FrontierEntry { cost: 2, seq: 2, route: a.clone() });
        heap.push(FrontierEntry { cost: 2, seq: 1, route: a.clone() });

        let order: Vec<(Weight, u64)> = std::iter::from_fn(|| heap.pop())
            .map(|e| (e.cost, e.seq))
            .collect();
        assert_eq!(order, vec![(2, 1), (2, 2), (5, 0)]);
    }
}
