//! Game engine for tic-tac-toe.

use super::rules;
use super::selector::board_index;
use super::types::{Board, Outcome, Player};
use tracing::{debug, instrument};

/// Error returned when a selector cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Selector is not in 1-9.
    #[display("Selector {} is out of range (must be 1-9)", _0)]
    OutOfRange(i64),

    /// The mapped square already holds a mark.
    #[display("Selector {} points at an occupied square", _0)]
    Occupied(i64),
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game engine.
///
/// Owns the board, whose turn it is, and the two display names. The outcome
/// is never stored; [`Game::evaluate_outcome`] recomputes it from the board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    names: [String; 2],
    history: Vec<i64>,
}

impl Game {
    /// Creates a new game with an empty board and player one to move.
    #[instrument(skip(first, second))]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            names: [first.into(), second.into()],
            history: Vec::new(),
        }
    }

    /// Builds a game by playing `selectors` in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument(skip(first, second))]
    pub fn replay(
        first: impl Into<String>,
        second: impl Into<String>,
        selectors: &[i64],
    ) -> Result<Self, MoveError> {
        let mut game = Self::new(first, second);
        for &selector in selectors {
            game.apply_move(selector)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn acting_player(&self) -> Player {
        self.to_move
    }

    /// Returns a player's display name.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.names[0],
            Player::Two => &self.names[1],
        }
    }

    /// Returns the accepted selectors, oldest first.
    pub fn history(&self) -> &[i64] {
        &self.history
    }

    /// True when the selector is in 1-9 and its square is empty.
    #[instrument(skip(self))]
    pub fn is_legal(&self, selector: i64) -> bool {
        board_index(selector).is_some_and(|index| self.board.is_empty(index))
    }

    /// Places the acting player's mark and passes the turn.
    ///
    /// Returns the player who moved.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] without touching the board when the selector is
    /// out of range or its square is taken.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn apply_move(&mut self, selector: i64) -> Result<Player, MoveError> {
        let index = board_index(selector).ok_or(MoveError::OutOfRange(selector))?;
        if !self.board.is_empty(index) {
            return Err(MoveError::Occupied(selector));
        }

        let mover = self.to_move;
        self.board.place(index, mover);
        self.history.push(selector);
        self.to_move = mover.opponent();
        debug!(index, ?mover, "Move applied");

        Ok(mover)
    }

    /// Classifies the current board.
    #[instrument(skip(self))]
    pub fn evaluate_outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }
}
