//! Type definitions and utilities for chess game logic
//!
//! Provides the coordinate types shared by the board, the pieces and the
//! move generator:
//!
//! - [`Square`] - a validated board coordinate, both axes in `0..8`
//! - [`Offset`] - a relative displacement applied from a piece's square
//!
//! `x` is the file (column) and `y` is the rank (row). White pawns advance
//! towards increasing `y`, black pawns towards decreasing `y`.

use std::fmt;

use super::error::{GameError, GameResult};

/// Number of files and ranks on the board
pub const BOARD_SIZE: u8 = 8;

/// Board coordinate
///
/// A `Square` can only be built through [`Square::new`] or [`Square::offset`],
/// so holding one means the coordinate is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Create a square, failing with [`GameError::OutOfBounds`] outside `0..8`
    ///
    /// Takes signed coordinates so that callers computing destinations can
    /// report the offending value instead of wrapping.
    pub fn new(x: i32, y: i32) -> GameResult<Self> {
        if Self::in_bounds(x, y) {
            Ok(Square {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(GameError::OutOfBounds { x, y })
        }
    }

    /// Returns true when both coordinates lie in `0..8`
    pub fn in_bounds(x: i32, y: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Apply an offset, returning `None` if the destination leaves the board
    pub fn offset(self, offset: Offset) -> Option<Square> {
        let x = self.x as i32 + offset.dx as i32;
        let y = self.y as i32 + offset.dy as i32;
        Square::new(x, y).ok()
    }

    /// Returns true if this square is light in the checkerboard pattern
    ///
    /// Tile (0, 0) is dark; colours alternate along both axes, so a square is
    /// dark exactly when `x + y` is even.
    pub fn is_light(self) -> bool {
        !(self.x + self.y).is_multiple_of(2)
    }

    /// Row-major index in `0..64` (`x * 8 + y`)
    pub(crate) fn index(self) -> usize {
        self.x as usize * BOARD_SIZE as usize + self.y as usize
    }

    /// Iterate over all 64 squares, file-major (x outer, y inner)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| Square { x, y }))
    }

    /// Convert to a `(x, y)` tuple
    pub fn coords(self) -> (u8, u8) {
        (self.x, self.y)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Relative (file, rank) displacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i8,
    pub dy: i8,
}

impl Offset {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Offset { dx, dy }
    }

    /// Number of single steps this offset spans when it is a straight or
    /// diagonal line, e.g. `(0, 2)` spans 2 and `(1, 1)` spans 1
    ///
    /// Returns `None` for non-linear jumps such as knight offsets.
    pub fn line_length(self) -> Option<u8> {
        let (ax, ay) = (self.dx.unsigned_abs(), self.dy.unsigned_abs());
        match (ax, ay) {
            (0, 0) => Some(0),
            (0, n) | (n, 0) => Some(n),
            (a, b) if a == b => Some(a),
            _ => None,
        }
    }

    /// Unit step along this offset (`signum` of each axis)
    pub fn unit(self) -> Offset {
        Offset::new(self.dx.signum(), self.dy.signum())
    }

    pub fn scaled(self, factor: i8) -> Offset {
        Offset::new(self.dx * factor, self.dy * factor)
    }
}

impl From<(i8, i8)> for Offset {
    fn from((dx, dy): (i8, i8)) -> Self {
        Offset::new(dx, dy)
    }
}
