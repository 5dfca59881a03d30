//! Move rejection reasons.
//!
//! A rejected move never fails the caller of
//! [`apply_move`](crate::apply_move); the reason is only reported through
//! [`GameState::try_move`](crate::GameState::try_move) and
//! [`GameEvent::MoveRejected`](crate::GameEvent::MoveRejected).

use super::Position;

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("{} is already taken", _0)]
    SquareOccupied(Position),

    /// The index does not name a square.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),

    /// The game is already won or tied.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
