//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. Both evaluators share one
//! recursive routine parameterized by the side to move, since the player
//! to move at any board is derived from the board itself.

use super::statistics::SearchStatistics;
use crate::rules::{actions, player, terminal, utility};
use crate::{Action, Board, Player, SearchConfig, result};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of analysing one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Analysis {
    /// Optimal action for the player to move, `None` on terminal boards.
    action: Option<Action>,
    /// Minimax value of the board: +1 X wins, -1 O wins, 0 draw.
    score: i8,
    /// Counters for the search that produced this analysis.
    statistics: SearchStatistics,
}

/// Returns the optimal action for the current player, or `None` if the game
/// is over.
///
/// Ties are broken in favor of the first action in row-major order.
#[instrument(skip(board), fields(to_move = %player(board)))]
pub fn minimax(board: &Board) -> Option<Action> {
    if terminal(board) {
        return None;
    }

    let analysis = analyze(board, &SearchConfig::default());
    debug!(action = ?analysis.action, score = analysis.score, "Chose move");
    analysis.action
}

/// Best `(score, action)` for X on this board.
pub fn max_value(board: &Board) -> (i8, Option<Action>) {
    let mut statistics = SearchStatistics::default();
    evaluate(board, Player::X, &SearchConfig::default(), &mut statistics)
}

/// Best `(score, action)` for O on this board.
pub fn min_value(board: &Board) -> (i8, Option<Action>) {
    let mut statistics = SearchStatistics::default();
    evaluate(board, Player::O, &SearchConfig::default(), &mut statistics)
}

/// Searches the full game tree below `board` for the player to move.
#[instrument(skip(board, config), fields(to_move = %player(board), early_cutoff = *config.early_cutoff()))]
pub fn analyze(board: &Board, config: &SearchConfig) -> Analysis {
    let mut statistics = SearchStatistics::default();
    let (score, action) = evaluate(board, player(board), config, &mut statistics);
    debug!(%statistics, score, "Search finished");

    Analysis {
        action,
        score,
        statistics,
    }
}

/// Scores `board` assuming `side` is to move and both sides play perfectly.
fn evaluate(
    board: &Board,
    side: Player,
    config: &SearchConfig,
    statistics: &mut SearchStatistics,
) -> (i8, Option<Action>) {
    statistics.visit();
    if terminal(board) {
        statistics.terminal();
        return (utility(board), None);
    }

    let mut best: Option<(i8, Action)> = None;
    for action in actions(board) {
        let next = match result(board, action) {
            Ok(next) => next,
            Err(e) => unreachable!("actions() yielded an illegal move: {}", e),
        };
        let (score, _) = evaluate(&next, side.opponent(), config, statistics);

        let improves = best.is_none_or(|(incumbent, _)| side.prefers(score, incumbent));
        if improves {
            best = Some((score, action));
            if *config.early_cutoff() && score == side.best_score() {
                statistics.cutoff();
                break;
            }
        }
    }

    match best {
        Some((score, action)) => (score, Some(action)),
        // Non-terminal boards always have an empty square.
        None => (utility(board), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initial_state;

    #[test]
    fn test_terminal_board_has_no_move() {
        let board: Board = "XXX/.O./..O".parse().expect("valid board");
        assert_eq!(minimax(&board), None);
        assert_eq!(max_value(&board), (1, None));
        assert_eq!(min_value(&board), (1, None));
    }

    #[test]
    fn test_x_takes_immediate_win() {
        let board: Board = "XX./OO./...".parse().expect("valid board");
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        let board: Board = "XX./OO./X..".parse().expect("valid board");
        assert_eq!(minimax(&board), Some(Action::new(1, 2)));
    }

    #[test]
    fn test_o_blocks_threat() {
        let board: Board = "XX./.O./...".parse().expect("valid board");
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_first_move_is_corner_or_center() {
        let action = minimax(&initial_state()).expect("empty board has moves");
        let corners_and_center = [(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)];
        assert!(corners_and_center.contains(&(action.row, action.col)));
    }

    #[test]
    fn test_initial_value_is_draw() {
        let analysis = analyze(&initial_state(), &SearchConfig::default());
        assert_eq!(*analysis.score(), 0);
        assert_eq!(*analysis.action(), Some(Action::new(0, 0)));
    }

    #[test]
    fn test_cutoff_preserves_result() {
        let board: Board = "X../.O./...".parse().expect("valid board");
        let pruned = analyze(&board, &SearchConfig::new(true));
        let full = analyze(&board, &SearchConfig::new(false));

        assert_eq!(pruned.action(), full.action());
        assert_eq!(pruned.score(), full.score());
        assert_eq!(*full.statistics().cutoffs(), 0);
    }

    #[test]
    fn test_cutoff_visits_fewer_nodes() {
        let board = initial_state();
        let pruned = analyze(&board, &SearchConfig::new(true));
        let full = analyze(&board, &SearchConfig::new(false));

        assert!(pruned.statistics().nodes_visited() < full.statistics().nodes_visited());
        assert!(*pruned.statistics().cutoffs() > 0);
        // Every distinct move sequence of a full game tree, plus the root.
        assert_eq!(*full.statistics().nodes_visited(), 549_946);
    }

    #[test]
    fn test_evaluators_score_from_x_perspective() {
        // X to move can win at (0, 2).
        let board: Board = "XX./OO./...".parse().expect("valid board");
        assert_eq!(max_value(&board), (1, Some(Action::new(0, 2))));
    }
}
