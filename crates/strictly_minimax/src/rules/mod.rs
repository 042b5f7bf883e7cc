//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. None of them store or mutate state; everything is
//! derived from the squares of the board passed in.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{terminal, utility};
pub use turn::{actions, player};
pub use win::winner;
