/*
 * Wall Module
 *
 * Walls are static point obstacles placed by the user. They never move and
 * are never removed; boids steer away from the ones they can detect.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    position: Point2,
}

impl Wall {
    pub fn place(x: f32, y: f32) -> Self {
        Self { position: pt2(x, y) }
    }

    pub fn position(&self) -> Point2 {
        self.position
    }
}
