/*
 * Simulation Module
 *
 * Owns the flock, the walls, the world bounds and the random source, and
 * drives one frame of the simulation in two phases:
 *
 * - Compute: every boid's next heading is derived from last frame's state.
 *   Results go to `pending_velocity`; nothing visible to other boids moves.
 * - Commit: every boid adopts its pending heading and steps forward.
 *
 * Running the phases back to back for all boids, never interleaved per boid,
 * keeps the outcome independent of iteration order.
 *
 * All additions go through `place`, `spawn_agent` or `place_wall`, which the
 * input layer calls between frames.
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::boid::Boid;
use crate::params::{Features, PlacementMode};
use crate::steering;
use crate::vector::WorldBounds;
use crate::wall::Wall;

pub struct Simulation {
    boids: Vec<Boid>,
    walls: Vec<Wall>,
    bounds: WorldBounds,
    rng: StdRng,
    frame: u64,
}

impl Simulation {
    // A seed makes every random draw (spawn headings, noise, fallbacks) repeatable
    pub fn new(bounds: WorldBounds, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            boids: Vec::new(),
            walls: Vec::new(),
            bounds,
            rng,
            frame: 0,
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    // Number of completed steps
    pub fn frame(&self) -> u64 {
        self.frame
    }

    // Add a boid with a random heading; the position is wrapped onto the plane
    pub fn spawn_agent(&mut self, x: f32, y: f32) -> &Boid {
        let position = self.bounds.wrap(pt2(x, y));
        let boid = Boid::spawn(position.x, position.y, &mut self.rng);
        log::debug!("Spawned boid #{} at ({:.1}, {:.1})", self.boids.len(), position.x, position.y);
        self.insert_boid(boid)
    }

    // Add a boid built elsewhere, e.g. with a chosen heading
    pub fn insert_boid(&mut self, mut boid: Boid) -> &Boid {
        boid.position = self.bounds.wrap(boid.position);
        self.boids.push(boid);
        &self.boids[self.boids.len() - 1]
    }

    pub fn place_wall(&mut self, x: f32, y: f32) -> &Wall {
        let position = self.bounds.wrap(pt2(x, y));
        log::debug!("Placed wall #{} at ({:.1}, {:.1})", self.walls.len(), position.x, position.y);
        self.walls.push(Wall::place(position.x, position.y));
        &self.walls[self.walls.len() - 1]
    }

    // Click entry point: create whatever the placement mode selects
    pub fn place(&mut self, mode: PlacementMode, position: Point2) {
        match mode {
            PlacementMode::Boid => {
                self.spawn_agent(position.x, position.y);
            }
            PlacementMode::Wall => {
                self.place_wall(position.x, position.y);
            }
        }
    }

    // New world size after a window resize. Degenerate sizes (a minimized
    // window) are ignored; boids re-wrap on their next commit.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let bounds = WorldBounds::new(width, height);
        if !bounds.is_valid() {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return false;
        }

        if bounds != self.bounds {
            log::info!("World resized to {:.0}x{:.0}", width, height);
            self.bounds = bounds;
        }
        true
    }

    // Phase one: write every boid's pending heading from committed state only
    pub fn compute_phase(&mut self, features: &Features) {
        let Self { boids, walls, bounds, rng, .. } = self;
        let flock: &[Boid] = boids;

        let pending: Vec<Vec2> = (0..flock.len())
            .map(|i| steering::compute_heading(flock, i, walls, features, bounds, &mut *rng))
            .collect();

        for (boid, heading) in boids.iter_mut().zip(pending) {
            boid.pending_velocity = heading;
        }
    }

    // Phase two: every boid adopts its pending heading and moves
    pub fn commit_phase(&mut self) {
        let bounds = self.bounds;
        for boid in &mut self.boids {
            boid.commit(&bounds);
        }
    }

    // One full frame
    pub fn step(&mut self, features: &Features) {
        self.compute_phase(features);
        self.commit_phase();
        self.frame += 1;
    }
}
