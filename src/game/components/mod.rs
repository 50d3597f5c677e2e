//! Chess game components module
//!
//! Components are plain data structures with little logic.
//! Organized by domain: pieces and board tiles.

pub mod piece;
pub mod tile;


// Re-export all components for convenience
pub use piece::*;
pub use tile::*;
