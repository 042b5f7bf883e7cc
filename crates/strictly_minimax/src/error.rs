//! Error types for tic-tac-toe.

use crate::action::Action;
use derive_more::{Display, Error};
use tracing::instrument;

/// Error returned when an action cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidAction {
    /// The coordinate lies outside the 3x3 board.
    #[display("Action {} is out of bounds", _0)]
    OutOfBounds(Action),

    /// The square at the coordinate is already occupied.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Action),
}

impl InvalidAction {
    /// Returns the rejected action.
    pub fn action(&self) -> Action {
        match self {
            InvalidAction::OutOfBounds(action) | InvalidAction::Occupied(action) => *action,
        }
    }
}

impl std::error::Error for InvalidAction {}

/// Error returned when a board cannot be parsed from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character other than a mark, an empty marker or a separator.
    #[display("Unexpected symbol {:?} in board", _0)]
    UnexpectedSymbol(char),

    /// The text did not contain exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
