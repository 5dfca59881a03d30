//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; they know nothing about whose turn it
//! is or how the board was reached.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, GameStatus};

/// Status a board implies on its own: a winner, a full board, or neither.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Tied
    } else {
        GameStatus::InProgress
    }
}
