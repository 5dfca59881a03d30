//! Application state and logic.

use super::input::{Input, move_cursor};
use brutal_tictactoe_core::{GameEvent, GameObserver, GameSession, GameState, Position};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

/// Keeps the most recent event for the footer line.
#[derive(Debug, Default, Clone)]
pub struct LastEventLog {
    last: Rc<RefCell<Option<GameEvent>>>,
}

impl LastEventLog {
    /// The latest event, if any since start-up.
    pub fn last(&self) -> Option<GameEvent> {
        self.last.borrow().clone()
    }
}

impl GameObserver for LastEventLog {
    fn on_event(&mut self, event: &GameEvent, state: &GameState) {
        if let GameEvent::MoveApplied { status, .. } = event
            && status.is_terminal()
        {
            match status.winner() {
                Some(winner) => info!(%winner, moves = state.history().len(), "Game won"),
                None => info!(moves = state.history().len(), "Game tied"),
            }
        }
        *self.last.borrow_mut() = Some(event.clone());
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    event_log: LastEventLog,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_cell_numbers: bool) -> Self {
        let event_log = LastEventLog::default();
        let mut session = GameSession::new();
        session.subscribe(Box::new(event_log.clone()));
        Self {
            session,
            cursor: Position::Center,
            event_log,
            show_cell_numbers,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Status banner text.
    pub fn status_message(&self) -> String {
        self.session.status_message()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Latest game event, for the footer.
    pub fn last_event(&self) -> Option<GameEvent> {
        self.event_log.last()
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Whether the main loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one input.
    pub fn handle_input(&mut self, input: Input) {
        debug!(?input, "Handling input");
        match input {
            Input::Up | Input::Down | Input::Left | Input::Right => {
                self.cursor = move_cursor(self.cursor, input);
            }
            Input::SelectCursor => {
                self.session.select(self.cursor.to_index());
            }
            Input::SelectCell(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.session.select(index);
            }
            Input::Reset => {
                self.session.reset();
                self.cursor = Position::Center;
            }
            Input::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }
}
