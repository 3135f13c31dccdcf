/*
 * Vector Module
 *
 * Small 2D helpers shared by every force rule. The simulation works in
 * viewport coordinates (origin top-left, y growing downwards) on top of
 * glam's Vec2.
 */

use glam::Vec2;
use rand::Rng;

// Squared distance between two points, used for every range check
#[inline]
pub fn distance_sq(a: Vec2, b: Vec2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

// Unit vector pointing along `v`, or None when `v` has no direction
#[inline]
pub fn normalized(v: Vec2) -> Option<Vec2> {
    let length_sq = v.length_squared();
    if length_sq > 0.0 && length_sq.is_finite() {
        Some(v / length_sq.sqrt())
    } else {
        None
    }
}

// Rescale `v` so its magnitude is exactly `length`
#[inline]
pub fn with_length(v: Vec2, current_length: f32, length: f32) -> Vec2 {
    v * (length / current_length)
}

/// Uniformly distributed unit vector.
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec2::new(angle.cos(), angle.sin())
}

// Heading of a velocity in radians, measured from +x towards +y
#[inline]
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
