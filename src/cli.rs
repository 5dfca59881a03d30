//! Command-line interface for brutal_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Brutal Tic-Tac-Toe - two players, one keyboard
#[derive(Parser, Debug)]
#[command(name = "brutal_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log file (overrides the config file)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a list of moves without a UI and print the result
    Replay {
        /// Cell indices 0-8 in play order, e.g. `0,1,3,2,6`
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The chosen command, `play` with defaults when none was given.
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Play {
            config: None,
            log_file: None,
        })
    }
}
