//! Chess game logic module - the rules core
//!
//! Everything in here is plain data and pure functions; the host layer
//! (rendering, input, animation) reads from it but is never called back.
//!
//! # Module Organization
//!
//! - `types` - [`Square`] and [`Offset`] coordinates
//! - `components` - [`Piece`] and [`Tile`] data
//! - `rules` - [`Board`] and move generation
//! - `error` - [`GameError`] and the [`GameResult`] alias
//!
//! # Control Flow
//!
//! 1. The host places pieces with [`Board::place`]
//! 2. On a query event (hover, selection) it calls [`valid_moves`] or
//!    [`Board::valid_moves_at`]
//! 3. The returned [`MoveSet`] is handed to the highlighting layer
//!
//! No turn order, captures or check detection exist here; moves are
//! previewed, never executed.

pub mod components;
pub mod error;
pub mod rules;
pub mod types;

pub use components::{Highlight, Piece, PieceColor, PieceType, Tile, TileColor};
pub use error::{GameError, GameResult};
pub use rules::{valid_moves, valid_moves_with, Board, DoubleStepPolicy, MoveSet};
pub use types::{Offset, Square, BOARD_SIZE};
