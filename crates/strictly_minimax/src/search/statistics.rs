//! Counters collected during a search.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// How much of the game tree a search touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Boards evaluated, the root included.
    nodes_visited: u64,
    /// Boards that were scored directly because the game was over.
    terminal_nodes: u64,
    /// Nodes whose remaining siblings were skipped by the early cutoff.
    cutoffs: u64,
}

impl SearchStatistics {
    pub(crate) fn visit(&mut self) {
        self.nodes_visited += 1;
    }

    pub(crate) fn terminal(&mut self) {
        self.terminal_nodes += 1;
    }

    pub(crate) fn cutoff(&mut self) {
        self.cutoffs += 1;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} terminal, {} cutoffs",
            self.nodes_visited, self.terminal_nodes, self.cutoffs
        )
    }
}
