//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// First player (moves first).
    One,
    /// Second player.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the 1-based seat number shown in prompts.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Side length of the board.
pub const WIDTH: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = WIDTH * WIDTH;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Row-major index of `(row, column)`.
    pub fn index(row: usize, column: usize) -> usize {
        row * WIDTH + column
    }

    /// Gets the square at the given row and column, if in range.
    pub fn get(&self, row: usize, column: usize) -> Option<Square> {
        if row >= WIDTH || column >= WIDTH {
            return None;
        }
        self.at(Self::index(row, column))
    }

    /// Gets the square at the given board index (0-8).
    pub fn at(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at the board index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.at(index), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|square| **square != Square::Empty)
            .count()
    }

    /// Marks a square. Callers check bounds and occupancy first.
    pub(super) fn place(&mut self, index: usize, player: Player) {
        self.squares[index] = Square::Occupied(player);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Square; CELLS]> for Board {
    fn from(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }
}

/// Classification of the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line and free squares remain.
    Ongoing,
    /// Board is full with no line.
    Draw,
    /// A player completed a line.
    Won(Player),
}

impl Outcome {
    /// True for `Draw` and `Won`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}
