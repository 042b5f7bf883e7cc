//! Core domain types for tic-tac-toe.

use crate::action::Action;
use crate::error::BoardParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Best score this player can hope for: +1 for X, -1 for O.
    pub fn best_score(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Whether `candidate` is strictly better than `incumbent` for this player.
    pub fn prefers(self, candidate: i8, incumbent: i8) -> bool {
        match self {
            Player::X => candidate > incumbent,
            Player::O => candidate < incumbent,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every move produces a fresh board through
/// [`crate::result`], and nothing mutates a board after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed as `[row][col]`.
    rows: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            rows: [[Square::Empty; 3]; 3],
        }
    }

    /// Builds a board from explicit rows.
    ///
    /// No invariants are checked; see [`crate::validate`] for boards that
    /// come from outside the game loop.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.rows
    }

    /// Gets the square addressed by `action`, or `None` when out of bounds.
    pub fn get(&self, action: Action) -> Option<Square> {
        let (row, col) = action.indices()?;
        Some(self.rows[row][col])
    }

    /// Iterates over every square with its coordinate, row-major.
    pub fn squares(&self) -> impl Iterator<Item = (Action, Square)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, square)| (Action::new(row as i32, col as i32), *square))
        })
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|square| **square == Square::Occupied(player))
            .count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|s| *s != Square::Empty)
    }

    /// Returns a copy with `square` written at in-bounds indices.
    pub(crate) fn with(mut self, row: usize, col: usize, square: Square) -> Self {
        self.rows[row][col] = square;
        self
    }
}

/// Returns the starting state of the board.
#[instrument(level = "trace")]
pub fn initial_state() -> Board {
    Board::new()
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            let line: String = row.iter().map(|s| s.symbol()).collect();
            if idx < 2 {
                writeln!(f, "{}", line)?;
            } else {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine symbols (`X`, `O`, or one of `.`, `_`, `-` for empty).
    /// Whitespace, `/` and `|` are ignored so both `"XO./.../..."` and the
    /// multi-line [`Display`](std::fmt::Display) form are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(BoardParseError::UnexpectedSymbol(other)),
            };
            squares.push(square);
        }

        if squares.len() != 9 {
            return Err(BoardParseError::WrongLength(squares.len()));
        }

        let mut rows = [[Square::Empty; 3]; 3];
        for (idx, square) in squares.into_iter().enumerate() {
            rows[idx / 3][idx % 3] = square;
        }
        Ok(Self { rows })
    }
}
