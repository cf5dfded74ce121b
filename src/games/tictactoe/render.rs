//! Text rendering of the board and player legend.

use super::types::{Board, Player, Square, WIDTH};
use super::Game;
use std::fmt;
use strum::IntoEnumIterator;

const TOP_BORDER: char = '-';
const SIDE_BORDER: char = '|';

/// Characters used for each player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marks {
    one: char,
    two: char,
}

impl Marks {
    /// Creates a mark pair.
    pub fn new(one: char, two: char) -> Self {
        Self { one, two }
    }

    /// The mark drawn for `player`.
    pub fn of(&self, player: Player) -> char {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    fn cell(&self, square: Square) -> char {
        match square {
            Square::Empty => ' ',
            Square::Occupied(player) => self.of(player),
        }
    }
}

impl Default for Marks {
    fn default() -> Self {
        Self::new('X', 'O')
    }
}

/// Bordered 3x3 grid.
///
/// ```text
/// -------
/// |X| |O|
/// -------
/// | |X| |
/// -------
/// |O| | |
/// -------
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    marks: Marks,
}

impl<'a> BoardView<'a> {
    /// Wraps a board for display.
    pub fn new(board: &'a Board, marks: Marks) -> Self {
        Self { board, marks }
    }

    fn border(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..2 * WIDTH + 1 {
            write!(f, "{TOP_BORDER}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::border(f)?;
        for row in self.board.squares().chunks(WIDTH) {
            write!(f, "{SIDE_BORDER}")?;
            for square in row {
                write!(f, "{}{SIDE_BORDER}", self.marks.cell(*square))?;
            }
            writeln!(f)?;
            Self::border(f)?;
        }
        Ok(())
    }
}

/// "Player N: name - mark" lines for both players.
#[derive(Debug, Clone, Copy)]
pub struct Legend<'a> {
    game: &'a Game,
    marks: Marks,
}

impl<'a> Legend<'a> {
    /// Wraps a game for display.
    pub fn new(game: &'a Game, marks: Marks) -> Self {
        Self { game, marks }
    }
}

impl fmt::Display for Legend<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for player in Player::iter() {
            writeln!(
                f,
                "Player {}: {} - {}",
                player.number(),
                self.game.name(player),
                self.marks.of(player)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        let text = BoardView::new(&board, Marks::default()).to_string();
        assert_eq!(
            text,
            "-------\n| | | |\n-------\n| | | |\n-------\n| | | |\n-------\n"
        );
    }

    #[test]
    fn test_marks_land_in_keypad_cells() {
        let game = Game::replay("Ada", "Brian", &[7, 5, 3]).unwrap();
        let text = BoardView::new(game.board(), Marks::default()).to_string();
        assert_eq!(
            text,
            "-------\n|X| | |\n-------\n| |O| |\n-------\n| | |X|\n-------\n"
        );
    }

    #[test]
    fn test_custom_marks() {
        let game = Game::replay("Ada", "Brian", &[1, 9]).unwrap();
        let text = BoardView::new(game.board(), Marks::new('#', '@')).to_string();
        assert_eq!(
            text,
            "-------\n| | |@|\n-------\n| | | |\n-------\n|#| | |\n-------\n"
        );
    }

    #[test]
    fn test_legend() {
        let game = Game::new("Ada", "Brian Kernighan");
        let text = Legend::new(&game, Marks::default()).to_string();
        assert_eq!(text, "Player 1: Ada - X\nPlayer 2: Brian Kernighan - O\n");
    }
}
