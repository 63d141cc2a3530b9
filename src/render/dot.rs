/// Graphviz rendering
///
/// Builds an undirected petgraph view of the store and prints it with
/// `petgraph::dot`. Node positions come from the layout, so the output is
/// meant for `neato -n` (pinned coordinates).

use super::layout::Layout;
use crate::storage::GraphStorage;
use crate::types::{CityId, Route, Weight};
use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

const ROUTE_EDGE_COLOR: &str = "red";
const EDGE_COLOR: &str = "#999999";
const ROUTE_NODE_FILL: &str = "#ffcccc";
const NODE_FILL: &str = "white";

/// Render the graph as DOT, highlighting `route` if given
///
/// Each added path appears once; parallel paths appear as parallel edges.
/// An edge is highlighted when its endpoints are consecutive on the route
/// in either direction.
pub fn render_dot(storage: &dyn GraphStorage, layout: &Layout, route: Option<&Route>) -> String {
    let graph = build_graph(storage);
    let (_, canvas_height) = layout.canvas();

    let edge_attrs = |g: &UnGraph<CityId, Weight>, edge: petgraph::graph::EdgeReference<'_, Weight>| {
        let on_route = route
            .map(|r| r.has_leg(&g[edge.source()], &g[edge.target()]))
            .unwrap_or(false);
        if on_route {
            format!(
                "label=\"{}\" color=\"{}\" penwidth=2",
                edge.weight(),
                ROUTE_EDGE_COLOR
            )
        } else {
            format!("label=\"{}\" color=\"{}\"", edge.weight(), EDGE_COLOR)
        }
    };

    let node_attrs = |_: &UnGraph<CityId, Weight>, (_, city): (NodeIndex, &CityId)| {
        let fill = if route.map(|r| r.contains(city)).unwrap_or(false) {
            ROUTE_NODE_FILL
        } else {
            NODE_FILL
        };
        let mut attrs = format!("label={:?} style=filled fillcolor=\"{}\"", city.as_str(), fill);
        if let Some(p) = layout.position(city) {
            // Graphviz puts the origin bottom-left
            attrs.push_str(&format!(" pos=\"{:.0},{:.0}!\"", p.x, canvas_height - p.y));
        }
        attrs
    };

    let dot = Dot::with_attr_getters(
        &graph,
        &[Config::EdgeNoLabel, Config::NodeNoLabel],
        &edge_attrs,
        &node_attrs,
    );
    format!("{}", dot)
}

/// Collapse the symmetric adjacency lists back into one edge per added path
fn build_graph(storage: &dyn GraphStorage) -> UnGraph<CityId, Weight> {
    let mut graph = UnGraph::new_undirected();
    let mut index: HashMap<&CityId, (usize, NodeIndex)> = HashMap::new();

    for (order, city) in storage.cities().iter().enumerate() {
        index.insert(city, (order, graph.add_node(city.clone())));
    }

    for (order, city) in storage.cities().iter().enumerate() {
        let from = index[city].1;
        let mut loops = 0usize;

        for edge in storage.neighbors(city) {
            let Some(&(to_order, to)) = index.get(&edge.to) else {
                continue;
            };

            if to_order > order {
                graph.add_edge(from, to, edge.weight);
            } else if to_order == order {
                // A self loop is stored twice in the same list
                if loops % 2 == 0 {
                    graph.add_edge(from, to, edge.weight);
                }
                loops += 1;
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::storage::GraphStore;

    fn city(label: &str) -> CityId {
        CityId::new(label)
    }

    fn setup() -> (GraphStore, Layout) {
        let mut store = GraphStore::new();
        let mut layout = Layout::new(LayoutConfig {
            seed: Some(9),
            ..LayoutConfig::default()
        });
        for (from, to, weight) in [("A", "B", 5), ("B", "C", 5), ("A", "C", 100)] {
            layout.place(&city(from));
            layout.place(&city(to));
            store.add_path(city(from), city(to), weight);
        }
        (store, layout)
    }

    #[test]
    fn test_one_edge_per_path() {
        let (mut store, _) = setup();
        assert_eq!(build_graph(&store).edge_count(), 3);

        store.add_path(city("A"), city("B"), 5);
        store.add_path(city("C"), city("C"), 1);
        let graph = build_graph(&store);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn test_dot_without_route() {
        let (store, layout) = setup();
        let dot = render_dot(&store, &layout, None);

        assert!(dot.starts_with("graph {"));
        assert!(dot.contains("label=\"A\""));
        assert!(dot.contains("label=\"100\""));
        assert!(dot.contains("pos=\""));
        assert!(!dot.contains(ROUTE_EDGE_COLOR));
        assert!(!dot.contains(ROUTE_NODE_FILL));
    }

    #[test]
    fn test_dot_highlights_route_legs_only() {
        let (store, layout) = setup();
        let route = Route::from_cities(vec![city("C"), city("B"), city("A")]).unwrap();
        let dot = render_dot(&store, &layout, Some(&route));

        assert_eq!(dot.matches("penwidth=2").count(), 2);
        assert_eq!(dot.matches(ROUTE_NODE_FILL).count(), 3);
        assert!(dot.contains(&format!("label=\"100\" color=\"{}\"", EDGE_COLOR)));
    }
}
