//! Rendering support module - host-facing presentation helpers
//!
//! Nothing in here draws pixels. These are the pieces a 3D host needs to turn
//! rules output into visuals:
//!
//! # Architecture
//!
//! - `board` - Tile geometry ([`BoardLayout`]), coordinate labels and a
//!   plain-text renderer
//! - `effects` - Move/attack hints and hover marks stored on tiles
//! - `animation` - Jump arc and the per-tick jump state machine
//!
//! The host owns the frame clock and input; it calls into these helpers and
//! applies the resulting positions, rotations and highlights itself.

// Submodules
pub mod animation;
pub mod board;
pub mod effects;

// Re-export commonly used items
pub use animation::*;
pub use board::*;
pub use effects::*;
