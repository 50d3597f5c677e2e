//! Board presentation module
//!
//! Tile geometry, coordinate labels and a plain-text renderer.

pub mod ascii;
pub mod board;
pub mod coordinates;

// Re-export all public items
pub use ascii::render_board;
pub use board::*;
pub use coordinates::*;
