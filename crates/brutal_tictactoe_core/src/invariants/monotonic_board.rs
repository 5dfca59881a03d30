//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameState, Player, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board, alternating from X,
/// must never hit an occupied square and must reproduce the board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut player = Player::X;

        for &pos in state.history() {
            if !reconstructed.is_empty(pos) {
                return false;
            }
            reconstructed.set(pos, Square::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, replay};

    #[test]
    fn test_new_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        assert!(MonotonicBoardInvariant::holds(&replay([0, 4, 2, 6])));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut state = replay([4]);
        state.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut state = replay([4, 0]);
        state.history.push(Position::Center);
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
