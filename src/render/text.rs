/// Plain-text rendering

use crate::algorithms::RouteResult;
use crate::storage::GraphStorage;
use std::fmt::Write;

/// Shown when a search finds nothing
pub const NO_PATH_MESSAGE: &str = "No path found";

/// Render a found route and its total distance
pub fn render_route(result: &RouteResult) -> String {
    format!(
        "Path: {}\nTotal Distance: {}",
        result.route, result.cost
    )
}

/// Render every city with its adjacency list, one city per line
///
/// ```text
/// A: B (5), C (100)
/// B: A (5)
/// ```
pub fn render_adjacency(storage: &dyn GraphStorage) -> String {
    if storage.cities().is_empty() {
        return "(empty graph)".to_string();
    }

    let mut out = String::new();
    for city in storage.cities() {
        let edges: Vec<String> = storage
            .neighbors(city)
            .iter()
            .map(|edge| format!("{} ({})", edge.to, edge.weight))
            .collect();
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}: {}", city, edges.join(", "));
    }
    out.truncate(out.trim_end().len());
    out
}
