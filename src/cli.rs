//! Command-line interface for keypad_tictactoe.

use clap::Parser;

/// Two-player tic-tac-toe on the console, cells picked with the numeric keypad.
#[derive(Parser, Debug)]
#[command(name = "keypad_tictactoe")]
#[command(about = "Two-player console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (read only if it exists)
    #[arg(short, long, default_value = "keypad_tictactoe.toml")]
    pub config: std::path::PathBuf,
}
