//! Tests for board queries and move application over every reachable board.

use std::collections::HashSet;
use strictly_minimax::{
    Action, Board, InvalidAction, Player, Square, actions, initial_state, player, result,
    terminal, utility, validate, winner,
};
use strum::IntoEnumIterator;

/// Every board reachable from the empty board by legal play.
fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if terminal(&board) {
            continue;
        }
        for action in actions(&board) {
            stack.push(result(&board, action).expect("legal move"));
        }
    }
    seen
}

fn marks(board: &Board) -> usize {
    Player::iter().map(|p| board.count(p)).sum()
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of distinct legal tic-tac-toe positions.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_mark_balance_holds_on_reachable_boards() {
    for board in reachable_boards() {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        assert!(x == o || x == o + 1, "unbalanced board:\n{}", board);
        assert!(validate(&board).is_ok(), "rejected reachable board:\n{}", board);
    }
}

#[test]
fn test_action_count_matches_empty_squares() {
    for board in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        assert_eq!(actions(&board).len(), 9 - marks(&board));
    }
}

#[test]
fn test_player_alternates() {
    for board in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        let mover = player(&board);
        for action in actions(&board) {
            let next = result(&board, action).expect("legal move");
            assert_eq!(next.get(action), Some(Square::Occupied(mover)));
            if !terminal(&next) {
                assert_eq!(player(&next), mover.opponent());
            }
        }
    }
}

#[test]
fn test_queries_are_pure() {
    for board in reachable_boards() {
        let snapshot = board;
        assert_eq!(player(&board), player(&board));
        assert_eq!(actions(&board), actions(&board));
        assert_eq!(winner(&board), winner(&board));
        assert_eq!(terminal(&board), terminal(&board));
        assert_eq!(utility(&board), utility(&board));
        assert_eq!(board, snapshot);
    }
}

#[test]
fn test_utility_matches_winner() {
    for board in reachable_boards().into_iter().filter(terminal) {
        let expected = match winner(&board) {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        };
        assert_eq!(utility(&board), expected);
    }
}

#[test]
fn test_x_row_win() {
    let board = Board::from_rows([
        [
            Square::Occupied(Player::X),
            Square::Occupied(Player::X),
            Square::Occupied(Player::X),
        ],
        [Square::Empty, Square::Occupied(Player::O), Square::Empty],
        [Square::Empty, Square::Empty, Square::Occupied(Player::O)],
    ]);
    assert_eq!(winner(&board), Some(Player::X));
    assert!(terminal(&board));
    assert_eq!(utility(&board), 1);
}

#[test]
fn test_full_board_draw() {
    let board: Board = "XOX/XOO/OXX".parse().expect("valid board");
    assert_eq!(winner(&board), None);
    assert!(terminal(&board));
    assert_eq!(utility(&board), 0);
}

#[test]
fn test_invalid_actions() {
    let board = initial_state();
    assert!(matches!(
        result(&board, Action::new(3, 0)),
        Err(InvalidAction::OutOfBounds(_))
    ));
    assert!(matches!(
        result(&board, Action::new(-1, 0)),
        Err(InvalidAction::OutOfBounds(_))
    ));

    let board = result(&board, Action::new(0, 0)).expect("legal move");
    assert!(matches!(
        result(&board, Action::new(0, 0)),
        Err(InvalidAction::Occupied(_))
    ));
}
