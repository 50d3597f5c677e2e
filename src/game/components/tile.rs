//! Board tile component
//!
//! A [`Tile`] is one cell of the board. It owns the piece standing on it and
//! carries presentation state (base colour, move/attack highlight and a
//! separate hover flag) that the host layer reads when drawing. Occupancy is derived from the piece slot, so a tile can
//! never claim to be occupied while empty.

use std::fmt;

use super::piece::Piece;
use crate::game::types::Square;

/// Checkerboard base colour of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileColor {
    Light,
    Dark,
}

/// Move-hint state of a tile, never read by the rules
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    #[default]
    None,
    /// Empty destination of the selected piece
    Move,
    /// Enemy-occupied destination of the selected piece
    Attack,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    square: Square,
    piece: Option<Piece>,
    pub highlight: Highlight,
    /// Pointer is over the tile; independent of `highlight`
    pub hovered: bool,
    pub base_color: TileColor,
}

impl Tile {
    pub fn new(square: Square) -> Self {
        let base_color = if square.is_light() {
            TileColor::Light
        } else {
            TileColor::Dark
        };
        Self {
            square,
            piece: None,
            highlight: Highlight::None,
            hovered: false,
            base_color,
        }
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn x(&self) -> u8 {
        self.square.x()
    }

    pub fn y(&self) -> u8 {
        self.square.y()
    }

    pub fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub(crate) fn piece_mut(&mut self) -> Option<&mut Piece> {
        self.piece.as_mut()
    }

    /// Store a piece in this tile's slot
    ///
    /// The caller has already checked the tile is empty.
    pub(crate) fn set_piece(&mut self, piece: Piece) -> &Piece {
        self.piece.insert(piece)
    }

    /// Short label made of the two coordinates, e.g. `"34"` for (3, 4)
    pub fn label(&self) -> String {
        format!("{}{}", self.x(), self.y())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tile {} at ({}, {}), occupied: {}",
            self.label(),
            self.x(),
            self.y(),
            self.is_occupied()
        )
    }
}
