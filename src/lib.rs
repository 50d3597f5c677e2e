//! tilechess - tile-based chess rules core for 3D board hosts
//!
//! - [`game`] - board, pieces and move/attack generation
//! - [`rendering`] - tile geometry, move hints and jump animation
//! - [`core`] - settings and their persistence

pub mod core;
pub mod game;
pub mod rendering;

pub use game::{
    valid_moves, Board, DoubleStepPolicy, GameError, GameResult, MoveSet, Piece, PieceColor,
    PieceType, Square,
};
