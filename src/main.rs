//! Brutal Tic-Tac-Toe - unified CLI.

#![warn(missing_docs)]

use anyhow::Result;
use brutal_tictactoe::{
    Cli, Command, TuiConfig, init_stderr_logging, run_moves, run_tui, write_report,
};
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command() {
        Command::Play { config, log_file } => {
            let mut tui_config = TuiConfig::load(config.as_deref())?;
            if let Some(log_file) = log_file {
                tui_config = tui_config.with_log_file(log_file);
            }
            run_tui(&tui_config)
        }
        Command::Replay { moves, json } => {
            init_stderr_logging("warn");
            info!(moves = moves.len(), "Replaying moves");
            let report = run_moves(&moves);
            write_report(&mut std::io::stdout().lock(), &report, json)
        }
    }
}
