//! Piece-related components
//!
//! A [`Piece`] is plain data: colour, kind, the square it currently stands on
//! and the pawn first-move flag. Movement capabilities are exposed as two
//! offset lists, dispatched on [`PieceType`]:
//!
//! - [`Piece::move_offsets`] - displacements onto empty squares
//! - [`Piece::attack_offsets`] - displacements onto enemy-occupied squares
//!
//! Both are pure functions of the piece's own state and never look at the
//! board; filtering against bounds and occupancy is the job of
//! [`crate::game::rules::move_gen`].

use std::fmt;

use crate::game::types::{Offset, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// Rank direction this colour advances in: +1 for white, -1 for black
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }

    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "white"),
            PieceColor::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PieceType {
    #[default]
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// Single-letter symbol, uppercase (white convention)
    pub fn symbol(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Rook => 'R',
            PieceType::Pawn => 'P',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
    /// Square the piece stands on, set by [`crate::game::rules::Board::place`]
    current_tile: Option<Square>,
    /// Cleared by the move-execution step; enables the pawn double step
    first_move: bool,
}

impl Piece {
    /// Create an unplaced piece that has not moved yet
    pub fn new(piece_type: PieceType, color: PieceColor) -> Self {
        Self {
            color,
            piece_type,
            current_tile: None,
            first_move: true,
        }
    }

    pub fn pawn(color: PieceColor) -> Self {
        Self::new(PieceType::Pawn, color)
    }

    pub fn current_tile(&self) -> Option<Square> {
        self.current_tile
    }

    pub(crate) fn set_current_tile(&mut self, square: Square) {
        self.current_tile = Some(square);
    }

    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// Record that the piece has moved at least once
    pub fn mark_moved(&mut self) {
        self.first_move = false;
    }

    /// Builder form of [`Piece::mark_moved`]
    pub fn moved(mut self) -> Self {
        self.mark_moved();
        self
    }

    /// Board glyph: uppercase for white, lowercase for black
    pub fn symbol(&self) -> char {
        match self.color {
            PieceColor::White => self.piece_type.symbol(),
            PieceColor::Black => self.piece_type.symbol().to_ascii_lowercase(),
        }
    }

    /// Displacements this piece may move by onto empty squares
    ///
    /// Only pawns carry an offset table; other kinds return an empty list,
    /// meaning no legal moves.
    pub fn move_offsets(&self) -> Vec<Offset> {
        match self.piece_type {
            PieceType::Pawn => pawn_move_offsets(self.color, self.first_move),
            _ => Vec::new(),
        }
    }

    /// Displacements this piece may capture along
    pub fn attack_offsets(&self) -> Vec<Offset> {
        match self.piece_type {
            PieceType::Pawn => pawn_attack_offsets(self.color),
            _ => Vec::new(),
        }
    }
}

/// One step forward, plus two on the first move
///
/// The double step is returned regardless of what stands on the square in
/// between; the move generator decides whether that square must be empty.
fn pawn_move_offsets(color: PieceColor, first_move: bool) -> Vec<Offset> {
    let direction = color.forward();
    let mut offsets = vec![Offset::new(0, direction)];
    if first_move {
        offsets.push(Offset::new(0, 2 * direction));
    }
    offsets
}

/// Both forward diagonals, unconditionally (board edges are filtered later)
fn pawn_attack_offsets(color: PieceColor) -> Vec<Offset> {
    let direction = color.forward();
    vec![Offset::new(-1, direction), Offset::new(1, direction)]
}
