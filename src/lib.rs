//! Brutal Tic-Tac-Toe - a two-player terminal game.
//!
//! The game rules live in [`brutal_tictactoe_core`]; this crate is the
//! presentation around them.
//!
//! # Architecture
//!
//! - **TUI**: ratatui front end that observes a [`GameSession`] and forwards
//!   key presses into it
//! - **Replay**: headless mode applying a move list and printing the result
//! - **Config**: optional TOML file for the front end (log file, hints)
//!
//! # Example
//!
//! ```
//! use brutal_tictactoe::run_moves;
//!
//! let report = run_moves(&[0, 1, 3, 2, 6]);
//! assert_eq!(report.message, "🎉 Player X WINS! 🎉");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Headless replay
pub use replay::{ReplayReport, run_moves, write_report};

// Crate-level exports - Terminal UI
pub use tui::{App, Input, LastEventLog, map_key, move_cursor, run_tui};

// Crate-level exports - Game types
pub use brutal_tictactoe_core::{
    Board, GameEvent, GameObserver, GameSession, GameState, GameStatus, MoveError, Player,
    Position, Square,
};
