/*
 * Boid Module
 *
 * A boid moves at unit speed on the toroidal plane. Its heading is double
 * buffered: `velocity` is what the rest of the flock sees this frame, and
 * `pending_velocity` is what the steering rules decided for the next one.
 * `commit` swaps the pending heading in and advances the position.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::vector::{self, WorldBounds};

#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    pub position: Point2,
    pub velocity: Vec2,
    pub pending_velocity: Vec2,
    // Angle drawn at spawn time; informational only
    pub heading: f32,
}

impl Boid {
    // Create a boid with a random initial heading
    pub fn spawn<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        let heading = rng.gen_range(0.0..TAU);
        let velocity = vector::random_unit(rng);

        Self {
            position: pt2(x, y),
            velocity,
            pending_velocity: velocity,
            heading,
        }
    }

    // Create a boid moving in a chosen direction. The direction is normalized.
    pub fn with_velocity<R: Rng + ?Sized>(position: Point2, velocity: Vec2, rng: &mut R) -> Self {
        let velocity = vector::normalize(velocity, rng);

        Self {
            position,
            velocity,
            pending_velocity: velocity,
            heading: velocity.y.atan2(velocity.x),
        }
    }

    // Adopt the pending heading, move one unit along it and wrap.
    // Only valid once every boid's pending heading for the frame is computed.
    pub fn commit(&mut self, bounds: &WorldBounds) {
        self.velocity = self.pending_velocity;
        self.position = bounds.wrap(self.position + self.velocity);
    }
}
