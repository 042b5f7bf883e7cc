//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines as `(row, col)` triples.
pub(crate) const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Owner of a completed line, if any.
pub(crate) fn line_owner(board: &Board, line: &[(usize, usize); 3]) -> Option<Player> {
    let rows = board.rows();
    let [a, b, c] = (*line).map(|(row, col)| rows[row][col]);
    match a {
        Square::Occupied(player) if a == b && a == c => Some(player),
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in order (rows, columns, diagonals) and the first
/// completed one decides. Boards with more than one completed line cannot
/// arise in play and are outside this function's contract.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line_owner(board, line))
}
