/*
 * Steering Module
 *
 * Computes a boid's next heading from the last committed state of the flock
 * and the walls. Each behavior gathers its neighbors into an accumulator and
 * contributes only the *direction* of that sum, so a boid in a crowd turns
 * no harder than one with a single neighbor.
 *
 * Blend order on top of the current heading:
 * 1. Alignment: add the direction of the neighbors' summed velocity
 * 2. Separation OR cohesion: subtract the direction to very close boids,
 *    otherwise add the direction to the rest of the neighborhood
 * 3. Wall evasion: subtract the direction to nearby walls
 * 4. Noise: uniform jitter on each axis
 *
 * Detection uses plain Euclidean distance while steering directions are
 * wrap-aware, so near the edges a boid may not notice a neighbor that is
 * close across the seam.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::boid::Boid;
use crate::params::Features;
use crate::vector::{self, distance, toroidal_delta, WorldBounds};
use crate::wall::Wall;
use crate::NOISE_AMPLITUDE;

// Running sum for one behavior, plus whether the behavior was triggered
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Accumulator {
    pub sum: Vec2,
    pub active: bool,
}

impl Accumulator {
    #[inline]
    fn add(&mut self, v: Vec2) {
        self.sum += v;
        self.active = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Accumulators {
    pub alignment: Accumulator,
    pub cohesion: Accumulator,
    pub separation: Accumulator,
    pub wall: Accumulator,
}

// Scan the flock and the walls around `flock[index]`.
// Reads positions and velocities only, never pending headings.
pub fn accumulate(
    flock: &[Boid],
    index: usize,
    walls: &[Wall],
    features: &Features,
    bounds: &WorldBounds,
) -> Accumulators {
    let boid = &flock[index];
    let mut acc = Accumulators::default();

    let alignment_radius = features.alignment_radius as f32;
    let cohesion_radius = features.cohesion_radius as f32;
    let repel_radius = features.repel_radius as f32;
    let wall_range = features.wall_detection_range as f32;

    for (i, other) in flock.iter().enumerate() {
        if i == index {
            continue;
        }

        let dist = distance(boid.position, other.position);

        if features.alignment && dist < alignment_radius {
            acc.alignment.add(other.velocity);
        }

        if features.cohesion && dist < cohesion_radius {
            acc.cohesion.active = true;
            let delta = toroidal_delta(boid.position, other.position, bounds);

            // Close neighbors feed separation instead of cohesion. The delta
            // still points toward the neighbor; the blend subtracts it.
            if features.repel && dist < repel_radius {
                acc.separation.add(delta);
            } else {
                acc.cohesion.sum += delta;
            }
        }
    }

    if features.evade_wall {
        for wall in walls {
            if distance(boid.position, wall.position()) < wall_range {
                acc.wall.add(toroidal_delta(boid.position, wall.position(), bounds));
            }
        }
    }

    acc
}

// Combine the accumulated behaviors with the current heading
pub fn blend<R: Rng + ?Sized>(
    current: Vec2,
    acc: &Accumulators,
    features: &Features,
    rng: &mut R,
) -> Vec2 {
    let mut heading = current;

    if acc.alignment.active {
        heading += vector::normalize(acc.alignment.sum, rng);
    }

    // Separation masks cohesion for the whole frame
    if acc.separation.active {
        heading -= vector::normalize(acc.separation.sum, rng);
    } else if acc.cohesion.active {
        heading += vector::normalize(acc.cohesion.sum, rng);
    }

    if acc.wall.active {
        heading -= vector::normalize(acc.wall.sum, rng);
    }

    if features.noise {
        heading += vec2(
            rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE),
            rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE),
        );
    }

    vector::normalize(heading, rng)
}

// Next heading for `flock[index]`
pub fn compute_heading<R: Rng + ?Sized>(
    flock: &[Boid],
    index: usize,
    walls: &[Wall],
    features: &Features,
    bounds: &WorldBounds,
    rng: &mut R,
) -> Vec2 {
    let acc = accumulate(flock, index, walls, features, bounds);
    blend(flock[index].velocity, &acc, features, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BOUNDS: WorldBounds = WorldBounds { width: 800.0, height: 600.0 };

    fn boid(x: f32, y: f32, vx: f32, vy: f32) -> Boid {
        let mut rng = StdRng::seed_from_u64(0);
        Boid::with_velocity(pt2(x, y), vec2(vx, vy), &mut rng)
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn lone_boid_keeps_its_heading() {
        let mut rng = StdRng::seed_from_u64(21);
        let features = Features { noise: false, ..Features::default() };
        let flock = vec![boid(100.0, 100.0, 0.6, 0.8)];
        let heading = compute_heading(&flock, 0, &[], &features, &BOUNDS, &mut rng);
        assert!(approx(heading, vec2(0.6, 0.8)), "{:?}", heading);
    }

    #[test]
    fn alignment_sums_neighbor_velocities() {
        let mut features = Features::none();
        features.alignment = true;

        let flock = vec![
            boid(100.0, 100.0, 1.0, 0.0),
            boid(110.0, 100.0, 0.0, 1.0),
            boid(100.0, 115.0, 0.0, 1.0),
            // Outside the radius
            boid(300.0, 300.0, -1.0, 0.0),
        ];
        let acc = accumulate(&flock, 0, &[], &features, &BOUNDS);
        assert!(acc.alignment.active);
        assert!(approx(acc.alignment.sum, vec2(0.0, 2.0)));
        assert!(!acc.cohesion.active && !acc.separation.active && !acc.wall.active);

        let mut rng = StdRng::seed_from_u64(22);
        let heading = blend(flock[0].velocity, &acc, &features, &mut rng);
        let expected = vec2(1.0, 1.0).normalize();
        assert!(approx(heading, expected), "{:?}", heading);
    }

    #[test]
    fn opposite_headings_cancel_to_a_random_unit_vector() {
        let mut features = Features::none();
        features.alignment = true;
        features.alignment_radius = 40;

        let flock = vec![boid(100.0, 100.0, 1.0, 0.0), boid(110.0, 100.0, -1.0, 0.0)];
        let mut rng = StdRng::seed_from_u64(23);
        for i in 0..2 {
            let heading = compute_heading(&flock, i, &[], &features, &BOUNDS, &mut rng);
            assert!(heading.x.is_finite() && heading.y.is_finite());
            assert!((heading.length() - 1.0).abs() < 1e-5, "{:?}", heading);
        }
    }

    #[test]
    fn repel_masks_cohesion_for_close_neighbors() {
        let mut features = Features::none();
        features.cohesion = true;
        features.cohesion_radius = 400;
        features.repel = true;
        features.repel_radius = 30;

        let flock = vec![boid(100.0, 100.0, 0.0, 1.0), boid(110.0, 100.0, 0.0, 1.0)];
        let acc = accumulate(&flock, 0, &[], &features, &BOUNDS);

        assert!(acc.cohesion.active);
        assert_eq!(acc.cohesion.sum, Vec2::ZERO);
        assert!(acc.separation.active);
        assert!(approx(acc.separation.sum, vec2(10.0, 0.0)));

        let mut rng = StdRng::seed_from_u64(24);
        let heading = blend(flock[0].velocity, &acc, &features, &mut rng);
        // (0, 1) - (1, 0), away from the neighbor
        assert!(approx(heading, vec2(-1.0, 1.0).normalize()), "{:?}", heading);
    }

    #[test]
    fn distant_neighbors_still_feed_cohesion_while_repel_is_active() {
        let mut features = Features::none();
        features.cohesion = true;
        features.repel = true;

        let flock = vec![
            boid(100.0, 100.0, 0.0, 1.0),
            boid(110.0, 100.0, 0.0, 1.0),
            boid(100.0, 200.0, 0.0, 1.0),
        ];
        let acc = accumulate(&flock, 0, &[], &features, &BOUNDS);
        assert!(approx(acc.separation.sum, vec2(10.0, 0.0)));
        assert!(approx(acc.cohesion.sum, vec2(0.0, 100.0)));

        // Separation wins the blend; the cohesion sum is ignored this frame
        let mut rng = StdRng::seed_from_u64(25);
        let heading = blend(flock[0].velocity, &acc, &features, &mut rng);
        assert!(approx(heading, vec2(-1.0, 1.0).normalize()), "{:?}", heading);
    }

    #[test]
    fn cohesion_steers_toward_the_neighborhood() {
        let mut features = Features::none();
        features.cohesion = true;

        let flock = vec![boid(100.0, 100.0, 0.0, 1.0), boid(200.0, 100.0, 0.0, 1.0)];
        let mut rng = StdRng::seed_from_u64(26);
        let heading = compute_heading(&flock, 0, &[], &features, &BOUNDS, &mut rng);
        assert!(approx(heading, vec2(1.0, 1.0).normalize()), "{:?}", heading);
    }

    #[test]
    fn cohesion_direction_wraps_across_the_seam() {
        let mut features = Features::none();
        features.cohesion = true;
        features.cohesion_radius = 1000;

        // 780 apart directly, 20 apart across the left/right seam
        let flock = vec![boid(10.0, 300.0, 0.0, 1.0), boid(790.0, 300.0, 0.0, 1.0)];
        let acc = accumulate(&flock, 0, &[], &features, &BOUNDS);
        assert!(approx(acc.cohesion.sum, vec2(-20.0, 0.0)), "{:?}", acc.cohesion.sum);
    }

    #[test]
    fn detection_uses_unwrapped_distance_near_edges() {
        let mut features = Features::none();
        features.alignment = true;
        features.alignment_radius = 40;

        // Two units apart across the seam, but not detected
        let flock = vec![boid(1.0, 300.0, 0.0, 1.0), boid(799.0, 300.0, 1.0, 0.0)];
        let acc = accumulate(&flock, 0, &[], &features, &BOUNDS);
        assert!(!acc.alignment.active);
    }

    #[test]
    fn walls_push_boids_away() {
        let mut features = Features::none();
        features.evade_wall = true;
        features.wall_detection_range = 50;

        let flock = vec![boid(100.0, 100.0, 0.0, 1.0)];
        let walls = [Wall::place(105.0, 100.0), Wall::place(400.0, 400.0)];
        let acc = accumulate(&flock, 0, &walls, &features, &BOUNDS);
        assert!(approx(acc.wall.sum, vec2(5.0, 0.0)));

        let mut rng = StdRng::seed_from_u64(27);
        let heading = blend(flock[0].velocity, &acc, &features, &mut rng);
        let away = (flock[0].position - walls[0].position()).normalize();
        assert!(heading.dot(away) > 0.0, "{:?}", heading);
    }

    #[test]
    fn disabled_behaviors_gather_nothing() {
        let features = Features::none();
        let flock = vec![boid(100.0, 100.0, 0.0, 1.0), boid(101.0, 100.0, 1.0, 0.0)];
        let walls = [Wall::place(100.0, 101.0)];
        let acc = accumulate(&flock, 0, &walls, &features, &BOUNDS);
        assert_eq!(acc, Accumulators::default());
    }

    #[test]
    fn noise_stays_unit_length() {
        let mut features = Features::none();
        features.noise = true;
        let flock = vec![boid(100.0, 100.0, 0.0, 1.0)];
        let mut rng = StdRng::seed_from_u64(28);
        for _ in 0..100 {
            let heading = compute_heading(&flock, 0, &[], &features, &BOUNDS, &mut rng);
            assert!((heading.length() - 1.0).abs() < 1e-5);
            // Jitter of at most 0.35 per axis cannot flip a unit heading
            assert!(heading.y > 0.0);
        }
    }
}
