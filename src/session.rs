/// Interactive session
///
/// A `Session` is the single owner of the graph store and the layout for
/// one user. Commands run one at a time, to completion, in the order they
/// arrive.

use crate::algorithms::{search, AlgorithmError, RouteResult, SearchAlgorithm};
use crate::config::LayoutConfig;
use crate::parser::{parse_command, Command, ParseError};
use crate::render::{render_adjacency, render_dot, render_route, Layout, NO_PATH_MESSAGE};
use crate::storage::{GraphStore, StorageError};
use crate::types::{CityId, Weight};
use std::fmt;
use std::io::{BufRead, Write};
use thiserror::Error;

const HELP: &str = "\
Commands:
  add FROM TO DISTANCE   add a two-way path (quote names with spaces)
  bfs START END          route with the fewest hops
  dfs START END          depth-first route
  ucs START END          route with the lowest total distance
  show [--json]          list cities and their paths
  dot                    print the graph in Graphviz format
  reset                  remove all cities and paths
  help                   show this message
  quit                   leave";

/// Session errors
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A search produced a route the store cannot price
    #[error("Internal error: {0}")]
    Internal(AlgorithmError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Outcome of one command
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    PathAdded {
        from: CityId,
        to: CityId,
        distance: Weight,
    },
    Route(RouteResult),
    NoRoute {
        algorithm: SearchAlgorithm,
        start: CityId,
        end: CityId,
    },
    Cleared,
    Graph(String),
    Dot(String),
    Help,
    Quit,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::PathAdded { from, to, distance } => {
                write!(f, "Added path {} - {} ({})", from, to, distance)
            }
            Response::Route(result) => f.write_str(&render_route(result)),
            Response::NoRoute { .. } => f.write_str(NO_PATH_MESSAGE),
            Response::Cleared => f.write_str("Graph cleared"),
            Response::Graph(text) | Response::Dot(text) => f.write_str(text.trim_end()),
            Response::Help => f.write_str(HELP),
            Response::Quit => Ok(()),
        }
    }
}

/// Counters for a scripted or interactive run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Non-blank, non-comment lines processed
    pub commands: usize,
    /// Lines rejected by the parser
    pub rejected: usize,
}

/// One user's graph, layout and last search result
#[derive(Debug)]
pub struct Session {
    store: GraphStore,
    layout: Layout,
    last_route: Option<RouteResult>,
}

impl Session {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            store: GraphStore::new(),
            layout: Layout::new(config),
            last_route: None,
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Route found by the most recent successful search, if still current
    pub fn last_route(&self) -> Option<&RouteResult> {
        self.last_route.as_ref()
    }

    /// Parse and execute one command line
    pub fn execute_line(&mut self, line: &str) -> SessionResult<Response> {
        let command = parse_command(line)?;
        self.execute(command)
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: Command) -> SessionResult<Response> {
        match command {
            Command::AddPath { from, to, distance } => {
                self.add_path(from.clone(), to.clone(), distance);
                Ok(Response::PathAdded { from, to, distance })
            }
            Command::Search {
                algorithm,
                start,
                end,
            } => self.find_route(algorithm, start, end),
            Command::Reset => {
                self.reset();
                Ok(Response::Cleared)
            }
            Command::Show { json: false } => Ok(Response::Graph(render_adjacency(&self.store))),
            Command::Show { json: true } => Ok(Response::Graph(self.store.snapshot().to_json()?)),
            Command::Dot => Ok(Response::Dot(render_dot(
                &self.store,
                &self.layout,
                self.last_route.as_ref().map(|r| &r.route),
            ))),
            Command::Help => Ok(Response::Help),
            Command::Quit => Ok(Response::Quit),
        }
    }

    /// Add a path, placing new cities on the canvas
    pub fn add_path(&mut self, from: CityId, to: CityId, distance: Weight) {
        self.layout.place(&from);
        self.layout.place(&to);
        self.store.add_path(from, to, distance);
        self.last_route = None;
    }

    /// Clear the graph, the layout and the last route
    pub fn reset(&mut self) {
        self.store.reset();
        self.layout.clear();
        self.last_route = None;
        tracing::info!("session reset");
    }

    fn find_route(
        &mut self,
        algorithm: SearchAlgorithm,
        start: CityId,
        end: CityId,
    ) -> SessionResult<Response> {
        match search(&self.store, algorithm, &start, &end) {
            Ok(result) => {
                self.last_route = Some(result.clone());
                Ok(Response::Route(result))
            }
            Err(AlgorithmError::PathNotFound(_, _)) => {
                tracing::info!(%algorithm, %start, %end, "no path");
                self.last_route = None;
                Ok(Response::NoRoute {
                    algorithm,
                    start,
                    end,
                })
            }
            Err(e) => {
                tracing::error!(%algorithm, %start, %end, error = %e, "search returned an unpriceable route");
                Err(SessionError::Internal(e))
            }
        }
    }

    /// Run commands line by line until input ends or `quit`
    ///
    /// Parse errors are reported on `output` and do not stop the run.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        prompt: bool,
    ) -> SessionResult<RunStats> {
        let mut stats = RunStats::default();
        let mut lines = input.lines();

        loop {
            if prompt {
                write!(output, "> ")?;
                output.flush()?;
            }

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            stats.commands += 1;
            match self.execute_line(line) {
                Ok(Response::Quit) => break,
                Ok(response) => writeln!(output, "{}", response)?,
                Err(SessionError::Parse(e)) => {
                    stats.rejected += 1;
                    tracing::warn!(line, error = %e, "rejected command");
                    writeln!(output, "error: {}", e)?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(stats)
    }
}
