//! Keypad tic-tac-toe: board, rules and engine.

mod game;
mod render;
pub mod rules;
pub mod selector;
mod types;

pub use game::{Game, MoveError};
pub use render::{BoardView, Legend, Marks};
pub use types::{Board, CELLS, Outcome, Player, Square, WIDTH};
