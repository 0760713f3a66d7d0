#![warn(missing_docs)]

//! Math types for the vecbox perspective engine.
//!
//! Thin wrappers around nalgebra providing the 2D canvas types used by
//! the sampler and drafting crates, plus the two angle helpers every
//! other crate leans on: polar-to-canvas mapping and shorter-arc
//! angular distance.
//!
//! Canvas space has its y axis pointing down. Angles are measured in
//! degrees, counter-clockwise from +x in the mathematical sense, so a
//! positive angle moves a point *up* the canvas.

use nalgebra::Vector2;

/// A point in 2D canvas space.
pub type Point2 = nalgebra::Point2<f64>;

/// A displacement in 2D canvas space.
pub type Vec2 = Vector2<f64>;

/// Degrees in a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Convert polar coordinates around `origin` into a canvas point.
///
/// `x = origin.x + length * cos(angle)`, `y = origin.y - length * sin(angle)`.
/// The y term is negated because canvas y grows downward.
///
/// Total over all real inputs: a negative `length` lands on the opposite ray.
pub fn polar_to_canvas(origin: &Point2, length: f64, angle_degrees: f64) -> Point2 {
    let (s, c) = angle_degrees.to_radians().sin_cos();
    Point2::new(origin.x + length * c, origin.y - length * s)
}

/// Direction angle of a canvas displacement in degrees, normalised to `[0, 360)`.
///
/// Inverse of the angle part of [`polar_to_canvas`]. Returns `0.0` for the zero vector.
pub fn canvas_angle_degrees(v: &Vec2) -> f64 {
    normalize_degrees((-v.y).atan2(v.x).to_degrees())
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Shorter-arc distance between two angles in degrees.
///
/// `min(|a - b|, 360 - |a - b|)` after wrapping the difference into one
/// turn, so the result is always in `[0, 180]` and symmetric in its arguments.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = normalize_degrees((a - b).abs());
    diff.min(FULL_TURN_DEG - diff)
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in canvas units.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-9 canvas units).
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}
