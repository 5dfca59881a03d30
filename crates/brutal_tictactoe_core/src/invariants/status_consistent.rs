//! Status invariant: the recorded status is the one the board implies.

use super::super::GameState;
use super::super::rules;
use super::Invariant;

/// Invariant: `status` matches what the rules derive from the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.status() == rules::evaluate(state.board())
    }

    fn description() -> &'static str {
        "Status agrees with the board (win, tie or in progress)"
    }
}
