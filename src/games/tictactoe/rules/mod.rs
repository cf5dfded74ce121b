//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine recomputes
//! the outcome from these after every move instead of tracking it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies the board. A completed line beats a full board.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
