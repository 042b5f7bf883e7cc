//! Move application.
//!
//! Moves never mutate a board; applying one yields the successor value.

use crate::invariants::{Invariant, MarkBalanceInvariant};
use crate::rules::player;
use crate::{Action, Board, InvalidAction, Square};
use tracing::instrument;

/// Returns the board that results from the player to move marking `action`.
///
/// # Errors
///
/// - [`InvalidAction::OutOfBounds`] if the row or column is outside `0..=2`.
/// - [`InvalidAction::Occupied`] if the square already holds a mark.
#[instrument(level = "trace", skip(board))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    let (row, col) = action
        .indices()
        .ok_or(InvalidAction::OutOfBounds(action))?;

    if board.rows()[row][col] != Square::Empty {
        return Err(InvalidAction::Occupied(action));
    }

    let next = board.with(row, col, Square::Occupied(player(board)));
    debug_assert!(
        !MarkBalanceInvariant::holds(board) || MarkBalanceInvariant::holds(&next),
        "{}",
        MarkBalanceInvariant::description()
    );
    Ok(next)
}
