//! Core settings shared across the crate
//!
//! [`GameSettings`] groups everything a host can tune without touching code:
//! board geometry, jump animation timing, rule policy and hint display. Every
//! struct uses `#[serde(default)]`, so a settings file only has to name the
//! values it changes.

use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreResult};
use crate::game::rules::DoubleStepPolicy;

/// User-facing settings, persisted as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Board geometry
    pub board: BoardSettings,

    /// Piece jump animation
    pub animation: JumpSettings,

    /// Rule policies
    pub rules: RulesSettings,

    /// Whether to show move hints
    pub show_hints: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board: BoardSettings::default(),
            animation: JumpSettings::default(),
            rules: RulesSettings::default(),
            show_hints: true,
        }
    }
}

impl GameSettings {
    /// Reject values that would break layout or animation
    pub fn validate(&self) -> CoreResult<()> {
        let checks = [
            (
                self.board.width.is_finite() && self.board.width > 0.0,
                "board.width must be positive",
            ),
            (
                self.board.tile_thickness.is_finite() && self.board.tile_thickness >= 0.0,
                "board.tile_thickness must not be negative",
            ),
            (
                self.animation.jump_steps > 0,
                "animation.jump_steps must be at least 1",
            ),
            (
                self.animation.rotation_speed.is_finite() && self.animation.rotation_speed > 0.0,
                "animation.rotation_speed must be positive",
            ),
            (
                self.animation.max_angle_degrees.is_finite()
                    && self.animation.max_angle_degrees > 0.0,
                "animation.max_angle_degrees must be positive",
            ),
        ];

        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, message)) => Err(CoreError::InvalidSetting {
                message: (*message).to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Board geometry in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Side length of the whole board
    pub width: f32,
    /// Height of the tile tops above the world origin
    pub elevation: f32,
    /// Thickness of each tile box
    pub tile_thickness: f32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width: 8.0,
            elevation: 20.0,
            tile_thickness: 0.1,
        }
    }
}

/// Timing of the piece jump animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpSettings {
    /// Height of the arc's control point above the midpoint
    pub jump_height: f32,
    /// Frames spent travelling along the arc
    pub jump_steps: u32,
    /// Rotation blend per second while turning
    pub rotation_speed: f32,
    /// Facing error at which a turn counts as complete
    pub max_angle_degrees: f32,
}

impl Default for JumpSettings {
    fn default() -> Self {
        Self {
            jump_height: 10.0,
            jump_steps: 60,
            rotation_speed: 1.0,
            max_angle_degrees: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesSettings {
    pub double_step: DoubleStepPolicy,
}
