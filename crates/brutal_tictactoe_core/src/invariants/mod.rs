//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`]. They are checked after each accepted move in debug builds
//! and can be tested independently.

use super::GameState;
use tracing::warn;

pub mod alternating_turn;
pub mod monotonic_board;
pub mod status_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A state rejected because it breaks one or more game invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Game invariants broken: {violations:?}")]
pub struct InvalidGameState {
    /// Every invariant the state breaks.
    pub violations: Vec<InvariantViolation>,
}

impl std::error::Error for InvalidGameState {}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose by type alone.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type GameInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    StatusConsistentInvariant,
);

/// Checks every game invariant, logging each one that is broken.
///
/// # Errors
///
/// Returns [`InvalidGameState`] listing all broken invariants.
pub fn validate(state: &GameState) -> Result<(), InvalidGameState> {
    GameInvariants::check_all(state).map_err(|violations| {
        for violation in &violations {
            warn!(%violation, "Game invariant broken");
        }
        InvalidGameState { violations }
    })
}

/// Panics if any game invariant is broken.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub(crate) fn assert_invariants(state: &GameState) {
    if let Err(invalid) = validate(state) {
        panic!("{invalid}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square, replay};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let state = replay([0, 4, 2]);
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_for_finished_games() {
        assert!(GameInvariants::check_all(&replay([0, 1, 3, 2, 6])).is_ok());
        assert!(GameInvariants::check_all(&replay([0, 4, 2, 1, 3, 5, 7, 6, 8])).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut state = replay([4]);
        state.board.set(Position::TopLeft, Square::Occupied(Player::O));

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert!(!violations.is_empty());
        assert!(
            violations
                .iter()
                .any(|v| v.description
                    == <MonotonicBoardInvariant as Invariant<GameState>>::description())
        );
    }

    #[test]
    fn test_validate_reports_every_violation() {
        assert_eq!(validate(&replay([0, 4])), Ok(()));

        let mut state = GameState::new();
        state.board.set(Position::TopLeft, Square::Occupied(Player::X));
        state.board.set(Position::TopCenter, Square::Occupied(Player::X));

        let invalid = validate(&state).unwrap_err();
        assert_eq!(invalid.violations.len(), 2);
        assert!(invalid.to_string().starts_with("Game invariants broken"));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&replay([0, 1])).is_ok());
    }
}
