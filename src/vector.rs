/*
 * Vector Utilities Module
 *
 * Heading normalization with recovery from degenerate vectors, and the
 * geometry of the toroidal world: bounds, wrapping and wrap-aware deltas.
 *
 * Every stored heading goes through `normalize`, so a zero or non-finite
 * vector can never end up as an agent's velocity.
 */

use nannou::prelude::{vec2, Vec2};
use rand::Rng;

use crate::NORMALIZE_RETRIES;

// Size of the toroidal plane. Coordinates live in [0, width) x [0, height).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Wrap a point back onto the plane, whatever its sign
    pub fn wrap(&self, point: Vec2) -> Vec2 {
        vec2(wrap_axis(point.x, self.width), wrap_axis(point.y, self.height))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..self.width).contains(&point.x) && (0.0..self.height).contains(&point.y)
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[inline]
fn wrap_axis(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

// Unit vector in the direction of `v`, or None when the division degenerates.
// Scaling by the larger component first keeps subnormal inputs exact.
#[inline]
fn try_normalize(v: Vec2) -> Option<Vec2> {
    let scale = v.x.abs().max(v.y.abs());
    if scale == 0.0 || !scale.is_finite() {
        return None;
    }

    let scaled = vec2(v.x / scale, v.y / scale);
    let length = scaled.x.hypot(scaled.y);
    let unit = vec2(scaled.x / length, scaled.y / length);
    if unit.x.is_finite() && unit.y.is_finite() {
        Some(unit)
    } else {
        None
    }
}

// Normalize `v`; a zero or non-finite input yields a random unit vector instead
pub fn normalize<R: Rng + ?Sized>(v: Vec2, rng: &mut R) -> Vec2 {
    try_normalize(v).unwrap_or_else(|| random_unit(rng))
}

// Uniformly drawn direction. Gives up after NORMALIZE_RETRIES degenerate draws.
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    for _ in 0..NORMALIZE_RETRIES {
        let candidate = vec2(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5));
        if let Some(unit) = try_normalize(candidate) {
            return unit;
        }
    }

    log::trace!("random heading retries exhausted, using +x axis");
    vec2(1.0, 0.0)
}

// Shortest signed displacement from `from` to `to` on the torus.
// Each component lies in [-extent / 2, extent / 2).
pub fn toroidal_delta(from: Vec2, to: Vec2, bounds: &WorldBounds) -> Vec2 {
    let dx = wrap_axis(to.x + bounds.width * 1.5 - from.x, bounds.width) - bounds.width / 2.0;
    let dy = wrap_axis(to.y + bounds.height * 1.5 - from.y, bounds.height) - bounds.height / 2.0;
    vec2(dx, dy)
}

// Plain Euclidean distance, ignoring wrap-around
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}
