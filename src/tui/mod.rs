//! Terminal UI for brutal_tictactoe.

mod app;
mod input;
mod terminal;
mod ui;

pub use app::{App, LastEventLog};
pub use input::{Input, map_key, move_cursor};
use terminal::TerminalGuard;
use ui::draw;

use crate::config::TuiConfig;
use crate::logging;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    logging::init_file_logging(config.log_file(), config.log_filter())?;

    info!("Starting Brutal Tic-Tac-Toe TUI");

    let guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(*config.show_cell_numbers());
    let res = run_app(&mut terminal, app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for a key, apply it; one transition per key press.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(input) = map_key(key.code)
        {
            app.handle_input(input);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
