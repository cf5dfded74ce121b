//! Keypad tic-tac-toe console binary.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use keypad_tictactoe::{GameConfig, Session, StdinInput, WriterSink};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::load_or_default(&cli.config)?;
    run_game(config)
}

/// Plays one game on stdin/stdout.
#[instrument(skip(config))]
fn run_game(config: GameConfig) -> Result<()> {
    let output = WriterSink::new(std::io::stdout());
    let mut session = Session::new(StdinInput::new(), output, config);
    let outcome = session.run()?;
    info!(?outcome, "Exiting");
    Ok(())
}

/// Logs go to stderr so they never mix with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
