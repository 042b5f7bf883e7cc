//! Turn derivation and legal move enumeration.

use crate::{Action, Board, Player, Square};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns the player who has the next turn on a board.
///
/// X moves first and players alternate, so X is to move whenever both
/// players have the same number of marks. A board that breaks that balance
/// gets a meaningless answer rather than an error; check such boards with
/// [`crate::validate`] first.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns the set of all empty squares on the board.
///
/// The set iterates row-major. Boards that already have a winner still
/// report their empty squares; callers stop at [`crate::terminal`].
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    board
        .squares()
        .filter(|(_, square)| *square == Square::Empty)
        .map(|(action, _)| action)
        .collect()
}
