//! Single-owner game session with one-way event notification.

use super::{GameState, GameStatus, MoveError, Player, Position, engine};
use tracing::{debug, instrument};

/// Something that happened to a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameEvent {
    /// A mark was placed.
    #[display("{player} played {position}")]
    MoveApplied {
        /// Who placed it.
        player: Player,
        /// Where it was placed.
        position: Position,
        /// Status right after the move.
        status: GameStatus,
    },
    /// A selection was ignored; the state is unchanged.
    #[display("{reason}")]
    MoveRejected {
        /// The selected index.
        index: usize,
        /// Why it was ignored.
        reason: MoveError,
    },
    /// The game went back to its initial state.
    #[display("New game")]
    Reset,
}

/// Receives every event a session publishes, after the state has changed.
pub trait GameObserver {
    /// Called once per input with the event and the resulting state.
    fn on_event(&mut self, event: &GameEvent, state: &GameState);
}

/// Owns the one live [`GameState`] and forwards inputs to the engine.
#[derive(Default)]
pub struct GameSession {
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameSession {
    /// Creates a session holding a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer; it sees every later event.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Status line for the current state.
    pub fn status_message(&self) -> String {
        engine::status_message(&self.state)
    }

    /// Handles "select cell `index`".
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) -> GameEvent {
        let player = self.state.current_player();
        let mut next = self.state.clone();
        let applied = Position::from_index(index)
            .ok_or(MoveError::OutOfBounds(index))
            .and_then(|position| next.try_move(index).map(|status| (position, status)));

        let event = match applied {
            Ok((position, status)) => {
                self.state = next;
                GameEvent::MoveApplied {
                    player,
                    position,
                    status,
                }
            }
            Err(reason) => GameEvent::MoveRejected { index, reason },
        };

        self.publish(&event);
        event
    }

    /// Handles "reset".
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameEvent {
        self.state = engine::reset(&self.state);
        let event = GameEvent::Reset;
        self.publish(&event);
        event
    }

    fn publish(&mut self, event: &GameEvent) {
        debug!(%event, observers = self.observers.len(), "Publishing game event");
        for observer in &mut self.observers {
            observer.on_event(event, &self.state);
        }
    }
}
