/// City Pathfinder
///
/// An interactive route finder: build a weighted, undirected graph of
/// cities one path at a time, then search it with breadth-first,
/// depth-first or uniform-cost search and see the route and its distance.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │           route_explorer (REPL)                  │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   Command Parser (pest)        │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Session          ──→ Render  │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Algorithms (BFS / DFS / UCS) │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Graph Store (in memory)      │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Core data types (CityId, Edge, Route)
/// - `storage`: Read-only storage trait and the in-memory graph store
/// - `algorithms`: Route searches and route cost
/// - `parser`: Command language and input normalization
/// - `render`: Layout, text and Graphviz output
/// - `session`: Owner of one user's graph; executes commands
/// - `config`: Environment configuration

pub mod algorithms;
pub mod config;
pub mod parser;
pub mod render;
pub mod session;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use types::{CityId, Edge, Route, Weight};

// Re-export storage types
pub use storage::{GraphStorage, GraphStore, StorageError, StorageResult};

// Re-export algorithm types
pub use algorithms::{bfs, dfs, path_cost, search, ucs, AlgorithmError, AlgorithmResult, RouteResult, SearchAlgorithm};

// Re-export parser types
pub use parser::{parse_command, Command, ParseError, ParseResult};

// Re-export session types
pub use config::{Config, LayoutConfig, LoggingConfig};
pub use session::{Response, RunStats, Session, SessionError, SessionResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
