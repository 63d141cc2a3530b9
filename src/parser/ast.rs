/// Parsed commands
///
/// City names in a `Command` are already normalized and distances already
/// validated, so the session can hand them straight to the store.

use crate::algorithms::SearchAlgorithm;
use crate::types::{CityId, Weight};
use serde::{Deserialize, Serialize};

/// One user command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// add FROM TO DISTANCE
    AddPath {
        from: CityId,
        to: CityId,
        distance: Weight,
    },

    /// bfs|dfs|ucs START END
    Search {
        algorithm: SearchAlgorithm,
        start: CityId,
        end: CityId,
    },

    /// reset / clear
    Reset,

    /// show [--json]
    Show { json: bool },

    /// dot
    Dot,

    /// help
    Help,

    /// quit / exit
    Quit,
}

impl Command {
    /// Check if executing this command can change the graph
    pub fn is_mutation(&self) -> bool {
        matches!(self, Command::AddPath { .. } | Command::Reset)
    }
}
