//! Jump animation state machine
//!
//! Drives a piece from its tile to a target point in three phases, one
//! [`JumpAnimator::tick`] per frame:
//!
//! ```text
//! Idle -> RotatingToTarget -> Jumping -> ResettingRotation -> Idle
//!              |                 |               |
//!        JumpTriggered        Landed          Finished
//! ```
//!
//! - **RotatingToTarget**: turn towards the target until the facing error is
//!   within `max_angle_degrees`
//! - **Jumping**: follow a [`QuadraticCurve`] in `jump_steps` equal parameter
//!   steps, one step per tick
//! - **ResettingRotation**: turn back to the rest orientation
//!
//! All progress lives in [`JumpState`], so the host only has to call `tick`
//! with the piece's [`Transform`] and its frame delta, then forward the
//! returned events to whatever plays the take-off and landing animations.
//!
//! The piece faces along its local `+Z` axis ([`Transform::local_z`]).

use bevy::math::{Mat3, Quat, Vec3};
use bevy_transform::components::Transform;
use tracing::debug;

use super::curve::QuadraticCurve;
use crate::core::JumpSettings;

/// Smallest facing tolerance in radians
///
/// Slerp with a blend below 1 only approaches its target, so a zero
/// tolerance would never be met.
const MIN_SETTLE_ANGLE: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JumpState {
    Idle,
    RotatingToTarget {
        target: Vec3,
        direction: Vec3,
        look: Quat,
    },
    Jumping {
        curve: QuadraticCurve,
        step: u32,
    },
    ResettingRotation,
}

/// Phase changes reported by [`JumpAnimator::tick`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationEvent {
    /// Facing the target; the take-off animation should start
    JumpTriggered,
    /// Reached the end of the arc
    Landed,
    /// Back at the rest orientation; the animator is idle again
    Finished,
}

#[derive(Clone, Debug)]
pub struct JumpAnimator {
    settings: JumpSettings,
    rest_rotation: Quat,
    state: JumpState,
}

impl JumpAnimator {
    /// Create an idle animator that returns to `rest_rotation` after each jump
    pub fn new(settings: JumpSettings, rest_rotation: Quat) -> Self {
        Self {
            settings,
            rest_rotation,
            state: JumpState::Idle,
        }
    }

    pub fn state(&self) -> &JumpState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, JumpState::Idle)
    }

    pub fn settings(&self) -> &JumpSettings {
        &self.settings
    }

    /// Start a jump from `transform` to `target`, abandoning any jump in progress
    pub fn jump_to(&mut self, transform: &Transform, target: Vec3) {
        let direction = (target - transform.translation).normalize_or_zero();
        let look = look_rotation(direction).unwrap_or(transform.rotation);
        debug!(
            "[JUMP] Jump from {:?} to {:?} (previous state: {:?})",
            transform.translation, target, self.state
        );
        self.state = JumpState::RotatingToTarget {
            target,
            direction,
            look,
        };
    }

    /// Advance one frame of `dt` seconds
    pub fn tick(&mut self, transform: &mut Transform, dt: f32) -> Option<AnimationEvent> {
        match self.state {
            JumpState::Idle => None,
            JumpState::RotatingToTarget {
                target,
                direction,
                look,
            } => {
                if self.is_facing(transform, direction) {
                    let curve = QuadraticCurve::new(
                        transform.translation,
                        target,
                        self.settings.jump_height,
                    );
                    self.state = JumpState::Jumping { curve, step: 0 };
                    return Some(AnimationEvent::JumpTriggered);
                }
                transform.rotation = transform.rotation.slerp(look, self.blend(dt));
                None
            }
            JumpState::Jumping { curve, step } => {
                let steps = self.settings.jump_steps.max(1);
                transform.translation = curve.evaluate(step as f32 / steps as f32);
                if step >= steps {
                    debug!("[JUMP] Landed at {:?}", transform.translation);
                    self.state = JumpState::ResettingRotation;
                    return Some(AnimationEvent::Landed);
                }
                self.state = JumpState::Jumping {
                    curve,
                    step: step + 1,
                };
                None
            }
            JumpState::ResettingRotation => {
                if transform.rotation.angle_between(self.rest_rotation) <= self.max_angle() {
                    transform.rotation = self.rest_rotation;
                    self.state = JumpState::Idle;
                    return Some(AnimationEvent::Finished);
                }
                transform.rotation = transform.rotation.slerp(self.rest_rotation, self.blend(dt));
                None
            }
        }
    }

    fn is_facing(&self, transform: &Transform, direction: Vec3) -> bool {
        direction == Vec3::ZERO
            || transform.local_z().as_vec3().angle_between(direction) <= self.max_angle()
    }

    fn max_angle(&self) -> f32 {
        self.settings
            .max_angle_degrees
            .to_radians()
            .max(MIN_SETTLE_ANGLE)
    }

    fn blend(&self, dt: f32) -> f32 {
        (dt * self.settings.rotation_speed).clamp(0.0, 1.0)
    }
}

/// Rotation whose forward (`+Z`) axis points along `direction`, keeping `+Y` up
fn look_rotation(direction: Vec3) -> Option<Quat> {
    if direction == Vec3::ZERO {
        return None;
    }
    let right = Vec3::Y.cross(direction);
    if right.length_squared() < 1e-12 {
        // Straight up or down: any roll will do
        return Some(Quat::from_rotation_arc(Vec3::Z, direction));
    }
    let right = right.normalize();
    let up = direction.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, direction)).normalize())
}
