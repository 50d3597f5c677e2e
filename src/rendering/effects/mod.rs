//! Visual effects module
//!
//! Manages move hints and hover highlighting on board tiles.

pub mod move_hints;

// Re-export all public items
pub use move_hints::*;
