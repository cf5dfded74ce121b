//! Keypad tic-tac-toe - two players, one console
//!
//! Players pick cells with the digits 1-9 laid out like a numeric keypad.
//!
//! # Architecture
//!
//! - **Games**: board, rules and the [`Game`] engine
//! - **Console**: injectable input/output collaborators
//! - **Session**: the prompt/render loop that drives one game
//! - **Config**: optional TOML presentation settings
//!
//! # Example
//!
//! ```
//! use keypad_tictactoe::{Game, Outcome, Player};
//!
//! let mut game = Game::new("Ada", "Brian");
//! for selector in [7, 5, 9, 1, 8] {
//!     assert!(game.is_legal(selector));
//!     game.apply_move(selector).unwrap();
//! }
//! assert_eq!(game.evaluate_outcome(), Outcome::Won(Player::One));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console collaborators
pub use console::{ClearStyle, InputSource, OutputSink, ScriptedInput, StdinInput, WriterSink};

// Crate-level exports - Session driver
pub use session::{Session, SessionError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardView, CELLS, Game, Legend, Marks, MoveError, Outcome, Player, Square, WIDTH,
    rules, selector,
};
