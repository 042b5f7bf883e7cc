//! First-class invariants for tic-tac-toe boards.
//!
//! The rules derive whose turn it is from mark counts, so they quietly give
//! wrong answers on boards that could never occur in play. Boards built by
//! the game loop always satisfy these invariants; boards that arrive from
//! elsewhere (parsed text, deserialized values, [`Board::from_rows`]) should
//! be checked with [`validate`] before being searched.

use crate::rules::win::{LINES, line_owner};
use crate::{Board, Player};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has the same number of marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}

/// Invariant: at most one player has a completed line, and that player
/// made the last move.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let mut x_wins = false;
        let mut o_wins = false;
        for line in &LINES {
            match line_owner(board, line) {
                Some(Player::X) => x_wins = true,
                Some(Player::O) => o_wins = true,
                None => {}
            }
        }

        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        match (x_wins, o_wins) {
            (true, true) => false,
            (true, false) => x_count == o_count + 1,
            (false, true) => x_count == o_count,
            (false, false) => true,
        }
    }

    fn description() -> &'static str {
        "At most one player has three in a row, and the winner moved last"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (MarkBalanceInvariant, SingleWinnerInvariant);

/// Checks that a board could have been reached by legal play.
#[instrument(skip(board))]
pub fn validate(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    BoardInvariants::check_all(board).inspect_err(|violations| {
        warn!(count = violations.len(), "Board violates game invariants");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initial_state;

    #[test]
    fn test_empty_board_valid() {
        assert!(validate(&initial_state()).is_ok());
    }

    #[test]
    fn test_unbalanced_board_rejected() {
        let board: Board = "XX./.../...".parse().expect("valid board");
        assert!(!MarkBalanceInvariant::holds(&board));

        let board: Board = "O../.../...".parse().expect("valid board");
        let violations = validate(&board).expect_err("O cannot move first");
        assert_eq!(
            violations,
            vec![InvariantViolation::new(MarkBalanceInvariant::description())]
        );
    }

    #[test]
    fn test_two_winners_rejected() {
        let board: Board = "XXX/OOO/...".parse().expect("valid board");
        assert!(!SingleWinnerInvariant::holds(&board));
    }

    #[test]
    fn test_winner_must_have_moved_last() {
        // X completed a row but O has moved since.
        let board: Board = "XXX/OO./..O".parse().expect("valid board");
        assert!(MarkBalanceInvariant::holds(&board));
        assert!(!SingleWinnerInvariant::holds(&board));
    }

    #[test]
    fn test_double_line_by_one_player_allowed() {
        // X's last move at the corner completed a row and a column.
        let board: Board = "XXX/XOO/XOO".parse().expect("valid board");
        assert!(validate(&board).is_ok());
    }
}
