//! Strictly Minimax - perfect tic-tac-toe play as pure functions
//!
//! Every operation takes a board value and returns a new value; nothing is
//! stored between calls and no board is ever mutated.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`], [`Action`]
//! - **Rules**: [`player`], [`actions`], [`winner`], [`terminal`], [`utility`]
//! - **Transitions**: [`result`] applies a move, rejecting [`InvalidAction`]s
//! - **Search**: [`minimax`] picks the optimal move by exhaustive search
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = result(&board, action)?;
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), strictly_minimax::InvalidAction>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod error;
mod invariants;
mod rules;
mod search;
mod self_play;
mod transition;
mod types;

// Crate-level exports - Board model
pub use action::Action;
pub use types::{Board, Player, Square, initial_state};

// Crate-level exports - Errors
pub use error::{BoardParseError, ConfigError, InvalidAction};

// Crate-level exports - Rules
pub use rules::{actions, player, terminal, utility, winner};
pub use transition::result;

// Crate-level exports - Invariants
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    SingleWinnerInvariant, validate,
};

// Crate-level exports - Search
pub use config::SearchConfig;
pub use search::{Analysis, SearchStatistics, analyze, max_value, min_value, minimax};
pub use self_play::{SelfPlay, play_out};
