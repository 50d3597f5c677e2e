//! Chess rules module - Pure game logic with no host coupling
//!
//! Implements the board model and move generation as plain data and pure
//! functions, so the rules can be unit tested without any rendering or input
//! layer attached.
//!
//! # Architecture
//!
//! - **Board** owns all 64 tiles; tiles own their occupant
//! - **Pieces** describe movement as offset lists (see
//!   [`crate::game::components::Piece`])
//! - **Move generation** filters those offsets against bounds and occupancy
//!
//! # Module Structure
//!
//! - `board` - [`Board`] with checked access and placement
//! - `move_gen` - [`valid_moves`] producing a [`MoveSet`]

pub mod board;
pub mod move_gen;


// Re-export commonly used items
pub use board::Board;
pub use move_gen::{valid_moves, valid_moves_with, DoubleStepPolicy, MoveSet};
