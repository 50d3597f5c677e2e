//! Coordinate labels for the board edges
//!
//! Files are lettered `a`-`h` along x and ranks numbered `1`-`8` along y,
//! matching the labels a host draws around the board.

use crate::game::types::{Square, BOARD_SIZE};

/// Letter for file `x` (`0 -> 'a'`), `None` off the board
pub fn file_label(x: u8) -> Option<char> {
    (x < BOARD_SIZE).then(|| char::from(b'a' + x))
}

/// Digit for rank `y` (`0 -> '1'`), `None` off the board
pub fn rank_label(y: u8) -> Option<char> {
    (y < BOARD_SIZE).then(|| char::from(b'1' + y))
}

/// Algebraic name of a square, e.g. `"d2"` for (3, 1)
pub fn square_name(square: Square) -> String {
    // Both axes of a Square are below BOARD_SIZE
    format!(
        "{}{}",
        char::from(b'a' + square.x()),
        char::from(b'1' + square.y())
    )
}
