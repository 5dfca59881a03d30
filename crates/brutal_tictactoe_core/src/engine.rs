//! State transitions for tic-tac-toe.
//!
//! These are the operations a presentation layer drives: apply a move,
//! reset, and describe the current state. Each takes a state by reference
//! and returns a new one; none of them can fail.

use super::{GameState, GameStatus};
use tracing::{debug, info, instrument};

/// Applies a move at `index` (0-8) for the current player.
///
/// Illegal moves (occupied square, index off the board, game already
/// decided) are absorbed: the returned state equals `state`.
#[instrument(skip(state), fields(player = %state.current_player()))]
pub fn apply_move(state: &GameState, index: usize) -> GameState {
    let mut next = state.clone();
    match next.try_move(index) {
        Ok(GameStatus::InProgress) => {
            debug!(index, next_player = %next.current_player(), "Move applied");
            next
        }
        Ok(status) => {
            info!(index, ?status, "Game over");
            next
        }
        Err(reason) => {
            debug!(index, %reason, "Move ignored");
            state.clone()
        }
    }
}

/// Returns the initial state: empty board, X to move, in progress.
#[instrument(skip(_state))]
pub fn reset(_state: &GameState) -> GameState {
    info!("Game reset");
    GameState::new()
}

/// Human-readable status line for the current state.
pub fn status_message(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won(winner) => format!("🎉 Player {winner} WINS! 🎉"),
        GameStatus::Tied => "🤝 IT'S A TIE! 🤝".to_string(),
        GameStatus::InProgress => format!("Player {}'s Turn", state.current_player()),
    }
}

/// Plays a sequence of cell indices from the initial state.
///
/// Each index goes through [`apply_move`], so illegal entries are skipped
/// exactly as they would be in interactive play.
pub fn replay<I>(indices: I) -> GameState
where
    I: IntoIterator<Item = usize>,
{
    indices
        .into_iter()
        .fold(GameState::new(), |state, index| apply_move(&state, index))
}
