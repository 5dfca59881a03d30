//! Alternating turn invariant: X moves first, then players alternate.

use super::super::{GameState, GameStatus, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The board holds either as many X marks as O marks, or exactly one more
/// X. While the game is running the player to move is X on an even number
/// of marks and O on an odd number.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        if x_count != o_count && x_count != o_count + 1 {
            return false;
        }

        match state.status() {
            GameStatus::InProgress => {
                let expected = if board.occupied() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                state.current_player() == expected
            }
            // The winner made the last move and is left as current player.
            GameStatus::Won(winner) => state.current_player() == winner,
            GameStatus::Tied => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square, replay};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let state = replay([0, 4, 8, 2, 6]);
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = replay([0]);
        state.board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut state = replay([0]);
        state.current_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
