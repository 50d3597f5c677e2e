//! Error types for game module
//!
//! Provides custom error types for the rules core: board access, piece
//! placement and move generation. All variants are precondition violations
//! raised by the caller, never runtime faults.

/// Errors that can occur in game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Coordinate outside the 8x8 board
    #[error("Square ({x}, {y}) is out of bounds (must be 0-7)")]
    OutOfBounds { x: i32, y: i32 },

    /// Placement onto a tile that already holds a piece
    #[error("Tile ({x}, {y}) is already occupied")]
    AlreadyOccupied { x: u8, y: u8 },

    /// Piece queried for moves before it was placed on the board
    #[error("Piece has no current tile; place it on the board first")]
    MissingCurrentTile,

    /// Move query on an empty tile
    #[error("No piece at position ({x}, {y})")]
    NoPieceAt { x: u8, y: u8 },

    /// Move query with a piece value that no longer matches the board's occupant
    #[error("Piece does not match the occupant of ({x}, {y})")]
    StalePiece { x: u8, y: u8 },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
