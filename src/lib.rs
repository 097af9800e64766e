/*
 * Boid Playground - Module Definitions
 *
 * Boids fly at unit speed on a wrap-around plane, steering by alignment,
 * cohesion, separation, wall evasion and noise. Clicking places boids or
 * walls; a small panel toggles behaviors and radii live.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use wall::Wall;
pub use params::{Features, PlacementMode, SimulationParams};
pub use simulation::Simulation;
pub use vector::WorldBounds;
pub use debug::DebugInfo;
pub use error::ConfigError;
pub use app::Model;

// Define modules
pub mod vector;
pub mod boid;
pub mod wall;
pub mod steering;
pub mod simulation;
pub mod params;
pub mod error;
pub mod debug;
pub mod screen;
pub mod app;
pub mod ui;
pub mod input;
pub mod renderer;

// Drawing sizes, in pixels
pub const BOID_RADIUS: f32 = 2.0;
pub const WALL_RADIUS: f32 = 4.0;
pub const HEADING_LENGTH: f32 = 5.0;

// Per-axis jitter added when noise is enabled
pub const NOISE_AMPLITUDE: f32 = 0.35;

// Degenerate draws tolerated before falling back to a fixed heading
pub const NORMALIZE_RETRIES: usize = 8;
