/// Rendering of the graph and of search results
///
/// The core never depends on this module; it only reads a store, a layout
/// and optionally the last route found.
///
/// - `layout`: random canvas positions for cities
/// - `text`: plain-text route summaries and adjacency listings
/// - `dot`: Graphviz output with the route highlighted

pub mod dot;
pub mod layout;
pub mod text;

pub use dot::render_dot;
pub use layout::{Layout, Position};
pub use text::{render_adjacency, render_route, NO_PATH_MESSAGE};
