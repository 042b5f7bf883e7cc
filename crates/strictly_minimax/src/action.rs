//! First-class action type for tic-tac-toe.
//!
//! An action names a square; the mark placed there is always that of the
//! player to move, derived from the board.

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate identifying the square to mark.
///
/// Coordinates are signed so that requests coming from outside the game
/// loop (such as `(-1, 0)`) can be represented and rejected by
/// [`crate::result`]. Actions order row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Action {
    /// Row, 0 (top) to 2 (bottom).
    pub row: i32,
    /// Column, 0 (left) to 2 (right).
    pub col: i32,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the row of this action.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Returns the column of this action.
    pub fn col(&self) -> i32 {
        self.col
    }

    /// Board indices for this action, or `None` when it lies off the board.
    pub fn indices(&self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok().filter(|r| *r < 3)?;
        let col = usize::try_from(self.col).ok().filter(|c| *c < 3)?;
        Some((row, col))
    }

    /// Whether this action addresses a square on the board.
    pub fn in_bounds(&self) -> bool {
        self.indices().is_some()
    }
}

impl From<(i32, i32)> for Action {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
