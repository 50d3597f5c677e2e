//! Quadratic jump arc
//!
//! A three-point curve used to move a piece between tiles: it starts at `a`,
//! ends at `b` and is pulled upwards by the control point `c`, which sits
//! `height` units above the midpoint of `a` and `b`.

use bevy::math::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticCurve {
    /// Start point
    pub a: Vec3,
    /// End point
    pub b: Vec3,
    /// Raised control point
    pub c: Vec3,
}

impl QuadraticCurve {
    pub fn new(start: Vec3, target: Vec3, height: f32) -> Self {
        let midpoint = start + (target - start) / 2.0;
        Self {
            a: start,
            b: target,
            c: midpoint + Vec3::Y * height,
        }
    }

    /// Point on the arc at `t`, clamped to `[0, 1]`
    ///
    /// Two nested linear interpolations; `evaluate(0.0) == a` and
    /// `evaluate(1.0) == b` hold exactly.
    pub fn evaluate(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let ac = lerp(self.a, self.c, t);
        let cb = lerp(self.c, self.b, t);
        lerp(ac, cb, t)
    }

    /// `steps + 1` evenly spaced points from `a` to `b` inclusive
    pub fn sample(&self, steps: u32) -> Vec<Vec3> {
        if steps == 0 {
            return vec![self.b];
        }
        (0..=steps)
            .map(|i| self.evaluate(i as f32 / steps as f32))
            .collect()
    }
}

/// Endpoint-exact interpolation: returns `from` at 0 and `to` at 1 bit for bit
fn lerp(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    from * (1.0 - t) + to * t
}
