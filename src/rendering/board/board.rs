//! Board geometry
//!
//! Maps squares to world-space tile placements and back. The board is a
//! square of side `width` centred on the origin in the XZ plane, raised to
//! `elevation`; each tile is a flat box of side `width / 8`.
//!
//! File (`x`) runs along world X and rank (`y`) along world Z, so tile (0, 0)
//! sits at the `-X, -Z` corner.

use bevy::math::Vec3;
use tracing::debug;

use crate::core::BoardSettings;
use crate::game::types::{Square, BOARD_SIZE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    cell_size: f32,
    offset: f32,
    elevation: f32,
    tile_thickness: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(&BoardSettings::default())
    }
}

impl BoardLayout {
    pub fn new(settings: &BoardSettings) -> Self {
        let cell_size = settings.width / BOARD_SIZE as f32;
        let offset = settings.width / 2.0 - cell_size / 2.0;
        debug!("[BOARD] cell size: {} offset: {}", cell_size, offset);
        Self {
            cell_size,
            offset,
            elevation: settings.elevation,
            tile_thickness: settings.tile_thickness,
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World-space centre of a tile
    pub fn tile_center(&self, square: Square) -> Vec3 {
        Vec3::new(
            square.x() as f32 * self.cell_size - self.offset,
            self.elevation,
            square.y() as f32 * self.cell_size - self.offset,
        )
    }

    /// Scale of the box drawn for each tile
    pub fn tile_scale(&self) -> Vec3 {
        Vec3::new(self.cell_size, self.tile_thickness, self.cell_size)
    }

    /// Square whose tile lies under `point` (height is ignored)
    ///
    /// Used for pointer picking; returns `None` off the board.
    pub fn square_at(&self, point: Vec3) -> Option<Square> {
        let half = self.cell_size / 2.0;
        let x = ((point.x + self.offset + half) / self.cell_size).floor();
        let y = ((point.z + self.offset + half) / self.cell_size).floor();
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Square::new(x as i32, y as i32).ok()
    }
}
