//! Perfect-play game driver.

use crate::rules::terminal;
use crate::search::analyze;
use crate::{Action, Board, SearchConfig, result};
use tracing::{info, instrument, trace};

/// Plays both sides with the minimax search, one move per item.
///
/// Each item is the action chosen and the board it produced. The iterator
/// ends once the board is terminal.
#[derive(Debug, Clone)]
pub struct SelfPlay {
    board: Board,
    config: SearchConfig,
}

impl SelfPlay {
    /// Starts self-play from `board`.
    #[instrument(skip(board))]
    pub fn new(board: Board, config: SearchConfig) -> Self {
        Self { board, config }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Iterator for SelfPlay {
    type Item = (Action, Board);

    fn next(&mut self) -> Option<Self::Item> {
        if terminal(&self.board) {
            return None;
        }

        let analysis = analyze(&self.board, &self.config);
        let action = (*analysis.action())?;
        let next = match result(&self.board, action) {
            Ok(next) => next,
            Err(e) => unreachable!("search chose an illegal move: {}", e),
        };
        trace!(%action, score = *analysis.score(), "Self-play move");

        self.board = next;
        Some((action, next))
    }
}

/// Plays perfect moves from `board` until the game ends and returns the final
/// board.
#[instrument(skip(board))]
pub fn play_out(board: Board, config: SearchConfig) -> Board {
    let mut game = SelfPlay::new(board, config);
    let moves = game.by_ref().count();
    info!(moves, "Self-play finished");
    *game.board()
}
