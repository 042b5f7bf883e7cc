//! Terminal detection and scoring for tic-tac-toe.

use super::win::winner;
use crate::{Board, Player};
use tracing::instrument;

/// Returns true if the game is over: someone has won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Scores a board: 1 if X has won, -1 if O has won, 0 otherwise.
///
/// Meant for terminal boards. Non-terminal boards score 0 as well, which is
/// indistinguishable from a draw.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
