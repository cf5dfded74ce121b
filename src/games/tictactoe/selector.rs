//! Keypad-style cell selectors.
//!
//! Players pick a cell with a digit laid out like a numeric keypad:
//!
//! ```text
//! 7 8 9
//! 4 5 6
//! 1 2 3
//! ```
//!
//! The table below translates a zero-based selector into a row-major
//! board index.

use super::types::CELLS;
use tracing::instrument;

/// Board index for each zero-based selector.
pub const KEYPAD: [usize; CELLS] = [6, 7, 8, 3, 4, 5, 0, 1, 2];

/// Smallest selector a player may type.
pub const MIN_SELECTOR: i64 = 1;

/// Largest selector a player may type.
pub const MAX_SELECTOR: i64 = CELLS as i64;

/// Maps a selector (1-9) to its board index, or `None` when out of range.
#[instrument]
pub fn board_index(selector: i64) -> Option<usize> {
    if !(MIN_SELECTOR..=MAX_SELECTOR).contains(&selector) {
        return None;
    }
    usize::try_from(selector - MIN_SELECTOR)
        .ok()
        .and_then(|offset| KEYPAD.get(offset).copied())
}

/// Parses one input token as a selector.
///
/// Any integer parses, including out-of-range ones; legality is the
/// engine's call. Non-numeric tokens yield `None`.
#[instrument]
pub fn parse(token: &str) -> Option<i64> {
    token.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keypad_corners_and_center() {
        assert_eq!(board_index(1), Some(6));
        assert_eq!(board_index(3), Some(8));
        assert_eq!(board_index(5), Some(4));
        assert_eq!(board_index(7), Some(0));
        assert_eq!(board_index(9), Some(2));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(board_index(0), None);
        assert_eq!(board_index(10), None);
        assert_eq!(board_index(-4), None);
        assert_eq!(board_index(i64::MAX), None);
        assert_eq!(board_index(i64::MIN), None);
    }

    #[test]
    fn test_mapping_is_bijection() {
        let indices: HashSet<usize> = (MIN_SELECTOR..=MAX_SELECTOR)
            .filter_map(board_index)
            .collect();
        assert_eq!(indices.len(), CELLS);
        assert!(indices.iter().all(|index| *index < CELLS));
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(parse("7"), Some(7));
        assert_eq!(parse(" 12 "), Some(12));
        assert_eq!(parse("-1"), Some(-1));
        assert_eq!(parse("abc"), None);
        assert_eq!(parse("4.5"), None);
        assert_eq!(parse(""), None);
    }
}
