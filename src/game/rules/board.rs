//! Board representation: 64 tiles with checked access and placement

use tracing::debug;

use super::move_gen::{valid_moves_with, DoubleStepPolicy, MoveSet};
use crate::game::components::{Piece, PieceColor, PieceType, Tile};
use crate::game::error::{GameError, GameResult};
use crate::game::types::{Square, BOARD_SIZE};

/// Fixed 8x8 grid of tiles
///
/// Exactly one tile exists per coordinate and tiles never move, so a tile's
/// own square always matches the coordinate it is stored under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        let tiles: Vec<Tile> = Square::all().map(Tile::new).collect();
        debug_assert_eq!(tiles.len(), (BOARD_SIZE as usize).pow(2));
        Self { tiles }
    }

    /// Build a board from `(kind, colour, (x, y))` entries
    ///
    /// Intended for fixed setups and tests; fails like [`Board::place`] on a
    /// bad coordinate or a duplicated square.
    pub fn with_pieces(pieces: &[(PieceType, PieceColor, (u8, u8))]) -> GameResult<Self> {
        let mut board = Self::new();
        for &(piece_type, color, (x, y)) in pieces {
            board.place(Piece::new(piece_type, color), x as i32, y as i32)?;
        }
        Ok(board)
    }

    /// Board with both pawn ranks set up (white on rank 1, black on rank 6)
    pub fn standard() -> Self {
        let mut board = Self::new();
        for square in Square::all() {
            let color = match square.y() {
                1 => PieceColor::White,
                6 => PieceColor::Black,
                _ => continue,
            };
            board.place_at(Piece::pawn(color), square);
        }
        board
    }

    /// Tile at `(x, y)`, or [`GameError::OutOfBounds`]
    pub fn get(&self, x: i32, y: i32) -> GameResult<&Tile> {
        let square = Square::new(x, y)?;
        Ok(self.tile(square))
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> GameResult<&mut Tile> {
        let square = Square::new(x, y)?;
        Ok(self.tile_mut(square))
    }

    /// Tile at an already validated square
    pub fn tile(&self, square: Square) -> &Tile {
        &self.tiles[square.index()]
    }

    pub fn tile_mut(&mut self, square: Square) -> &mut Tile {
        &mut self.tiles[square.index()]
    }

    /// Place a piece on `(x, y)` and point the piece back at its tile
    ///
    /// Fails with [`GameError::AlreadyOccupied`] instead of overwriting an
    /// existing occupant.
    pub fn place(&mut self, piece: Piece, x: i32, y: i32) -> GameResult<&Piece> {
        let square = Square::new(x, y)?;
        if self.is_occupied(square) {
            return Err(GameError::AlreadyOccupied {
                x: square.x(),
                y: square.y(),
            });
        }
        Ok(self.place_at(piece, square))
    }

    fn place_at(&mut self, mut piece: Piece, square: Square) -> &Piece {
        debug!(
            "[BOARD] Placing {} {:?} on {}",
            piece.color, piece.piece_type, square
        );
        piece.set_current_tile(square);
        self.tile_mut(square).set_piece(piece)
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.tile(square).is_occupied()
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.tile(square).piece()
    }

    /// Mutable access to an occupant, e.g. to clear its first-move flag
    pub fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.tile_mut(square).piece_mut()
    }

    /// All tiles, file-major (x outer, y inner)
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    /// Number of occupied tiles
    pub fn piece_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_occupied()).count()
    }

    /// Move and attack destinations for the piece standing on `(x, y)`
    pub fn valid_moves_at(&self, x: i32, y: i32) -> GameResult<MoveSet> {
        self.valid_moves_at_with(x, y, DoubleStepPolicy::default())
    }

    pub fn valid_moves_at_with(
        &self,
        x: i32,
        y: i32,
        policy: DoubleStepPolicy,
    ) -> GameResult<MoveSet> {
        let tile = self.get(x, y)?;
        let piece = tile.piece().ok_or(GameError::NoPieceAt {
            x: tile.x(),
            y: tile.y(),
        })?;
        valid_moves_with(piece, self, policy)
    }
}
