//! Tests for the tic-tac-toe engine through the public API.

use keypad_tictactoe::{Board, CELLS, Game, MoveError, Outcome, Player, Square, rules, selector};

const X: Square = Square::Occupied(Player::One);
const O: Square = Square::Occupied(Player::Two);

#[test]
fn test_keypad_layout() {
    // Bottom-left, center, top-right
    assert_eq!(selector::board_index(1), Some(Board::index(2, 0)));
    assert_eq!(selector::board_index(5), Some(Board::index(1, 1)));
    assert_eq!(selector::board_index(9), Some(Board::index(0, 2)));
    // Top row reads 7 8 9
    assert_eq!(selector::board_index(7), Some(0));
    assert_eq!(selector::board_index(8), Some(1));
}

#[test]
fn test_out_of_range_never_legal() {
    let game = Game::new("Ada", "Brian");
    for selector in [-100, -1, 0, 10, 11, 1_000] {
        assert!(!game.is_legal(selector), "selector {selector}");
    }
}

#[test]
fn test_each_move_fills_one_square_and_flips_turn() {
    let mut game = Game::new("Ada", "Brian");
    for (turn, selector) in [5, 1, 9, 3].into_iter().enumerate() {
        let before = game.acting_player();
        assert_eq!(game.apply_move(selector), Ok(before));
        assert_eq!(game.board().occupied_count(), turn + 1);
        assert_eq!(game.acting_player(), before.opponent());
        assert!(!game.is_legal(selector));
        assert_eq!(game.apply_move(selector), Err(MoveError::Occupied(selector)));
    }
    assert_eq!(game.history(), &[5, 1, 9, 3]);
}

#[test]
fn test_fewer_than_five_marks_is_ongoing() {
    // Every legal sequence of four moves
    for a in 1..=9 {
        for b in (1..=9).filter(|&b| b != a) {
            for c in (1..=9).filter(|&c| c != a && c != b) {
                for d in (1..=9).filter(|&d| d != a && d != b && d != c) {
                    let game = Game::replay("Ada", "Brian", &[a, b, c, d]).unwrap();
                    assert_eq!(game.evaluate_outcome(), Outcome::Ongoing);
                }
            }
        }
    }
}

#[test]
fn test_every_line_wins_for_its_owner() {
    for line in rules::LINES {
        for (mark, owner) in [(X, Player::One), (O, Player::Two)] {
            let mut squares = [Square::Empty; CELLS];
            for index in line {
                squares[index] = mark;
            }
            assert_eq!(
                rules::outcome(&Board::from(squares)),
                Outcome::Won(owner),
                "line {line:?}"
            );
        }
    }
}

#[test]
fn test_win_beats_full_board() {
    // Full board, X owns the left column
    let board = Board::from([X, O, X, X, O, O, X, X, O]);
    assert_eq!(rules::outcome(&board), Outcome::Won(Player::One));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / O X O / O X O
    let board = Board::from([X, O, X, O, X, O, O, X, O]);
    assert_eq!(rules::outcome(&board), Outcome::Draw);
}

#[test]
fn test_top_row_scenario() {
    let mut game = Game::new("Ada", "Brian");
    for selector in [7, 5, 9, 1] {
        game.apply_move(selector).unwrap();
        assert_eq!(game.evaluate_outcome(), Outcome::Ongoing);
    }
    assert_eq!(game.apply_move(8), Ok(Player::One));
    assert_eq!(game.evaluate_outcome(), Outcome::Won(Player::One));
    for column in 0..3 {
        assert_eq!(game.board().get(0, column), Some(X));
    }
}

#[test]
fn test_played_draw() {
    let game = Game::replay("Ada", "Brian", &[7, 5, 3, 8, 2, 1, 9, 6, 4]).unwrap();
    assert_eq!(game.board().occupied_count(), CELLS);
    assert_eq!(game.evaluate_outcome(), Outcome::Draw);
}
