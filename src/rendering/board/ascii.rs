//! Plain-text board rendering
//!
//! Draws the board with rank 8 at the top. Each tile is three characters wide:
//!
//! | Tile                 | Text    |
//! |----------------------|---------|
//! | empty                | ` . `   |
//! | piece                | ` P `   |
//! | move destination     | ` * `   |
//! | attack destination   | `[p]`   |
//! | hovered              | `<.>`   |
//!
//! A hovered tile keeps its inner glyph (`<*>` on a move destination, `<p>`
//! on an attack destination). White pieces are uppercase, black pieces
//! lowercase.

use super::coordinates::{file_label, rank_label};
use crate::game::components::{Highlight, Tile};
use crate::game::rules::Board;
use crate::game::types::{Square, BOARD_SIZE};

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for y in (0..BOARD_SIZE).rev() {
        out.extend(rank_label(y));
        out.push(' ');
        for x in 0..BOARD_SIZE {
            // Coordinates come from the board range, so the square is valid
            if let Ok(square) = Square::new(x as i32, y as i32) {
                out.push_str(&render_tile(board.tile(square)));
            }
        }
        out.push('\n');
    }
    out.push_str("  ");
    for x in 0..BOARD_SIZE {
        out.push(' ');
        out.extend(file_label(x));
        out.push(' ');
    }
    out.push('\n');
    out
}

fn render_tile(tile: &Tile) -> String {
    let glyph = match tile.highlight {
        Highlight::Move => '*',
        _ => tile.piece().map_or('.', |p| p.symbol()),
    };
    let (open, close) = match (tile.hovered, tile.highlight) {
        (true, _) => ('<', '>'),
        (false, Highlight::Attack) => ('[', ']'),
        (false, _) => (' ', ' '),
    };
    format!("{open}{glyph}{close}")
}
