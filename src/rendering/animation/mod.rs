//! Piece movement animation
//!
//! - `curve` - [`QuadraticCurve`] jump arc
//! - `jump` - [`JumpAnimator`] per-tick state machine built on the arc

pub mod curve;
pub mod jump;

pub use curve::QuadraticCurve;
pub use jump::{AnimationEvent, JumpAnimator, JumpState};
