//! Headless play: apply a move list and report where the game ended up.

use brutal_tictactoe_core::{GameEvent, GameSession, GameState};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Outcome of a headless run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Final state.
    pub state: GameState,
    /// Status line for the final state.
    pub message: String,
    /// Indices that were ignored (occupied, off the board, or after the end).
    pub ignored: Vec<usize>,
}

/// Feeds `moves` into a fresh session, one selection per entry.
#[instrument]
pub fn run_moves(moves: &[usize]) -> ReplayReport {
    let mut session = GameSession::new();
    let mut ignored = Vec::new();

    for &index in moves {
        match session.select(index) {
            GameEvent::MoveRejected { index, reason } => {
                debug!(index, %reason, "Move ignored");
                ignored.push(index);
            }
            event => debug!(%event, "Move applied"),
        }
    }

    let message = session.status_message();
    let winner = session.state().status().winner();
    info!(%message, ?winner, ignored = ignored.len(), "Replay finished");
    ReplayReport {
        state: session.state().clone(),
        message,
        ignored,
    }
}

/// Writes the report as a board plus status line, or as pretty JSON.
pub fn write_report(out: &mut impl Write, report: &ReplayReport, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report.state.board())?;
        writeln!(out)?;
        writeln!(out, "{}", report.message)?;
        if !report.ignored.is_empty() {
            let ignored: Vec<String> = report.ignored.iter().map(ToString::to_string).collect();
            writeln!(out, "Ignored moves: {}", ignored.join(", "))?;
        }
    }
    Ok(())
}
