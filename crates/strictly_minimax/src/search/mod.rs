//! Game-tree search for tic-tac-toe.

mod minimax;
mod statistics;

pub use minimax::{Analysis, analyze, max_value, min_value, minimax};
pub use statistics::SearchStatistics;
