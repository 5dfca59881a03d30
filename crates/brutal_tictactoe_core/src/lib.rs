//! Pure tic-tac-toe game logic.
//!
//! The engine holds a 3x3 board, the player to move and the game status.
//! A presentation layer drives it with two inputs, "select cell" and
//! "reset", and reads everything else back from [`GameState`].
//!
//! ```
//! use brutal_tictactoe_core::{GameState, GameStatus, Player, apply_move, status_message};
//!
//! let mut state = GameState::new();
//! for index in [0, 1, 3, 2, 6] {
//!     state = apply_move(&state, index);
//! }
//! assert_eq!(state.status(), GameStatus::Won(Player::X));
//! assert_eq!(status_message(&state), "🎉 Player X WINS! 🎉");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::MoveError;
pub use engine::{apply_move, replay, reset, status_message};
pub use position::Position;
pub use session::{GameEvent, GameObserver, GameSession};
pub use types::{Board, GameState, GameStatus, Player, Square};
