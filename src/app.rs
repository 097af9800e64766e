/*
 * Application Module
 *
 * This module defines the nannou model and the per-frame update for the
 * boid playground. Each frame:
 * 1. The control panel runs and may change the live parameters
 * 2. An immutable feature snapshot is taken
 * 3. The simulation runs its compute phase, then its commit phase
 * 4. The renderer draws the committed state
 *
 * Clicks and resizes arrive through nannou callbacks between frames, never
 * during a step.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::input::{mouse_moved, mouse_pressed, raw_window_event};
use crate::params::{Features, PlacementMode, SimulationParams};
use crate::renderer::view;
use crate::simulation::Simulation;
use crate::ui;
use crate::vector::WorldBounds;

// Startup choices made on the command line
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub features: Features,
    pub placement: PlacementMode,
    pub seed: Option<u64>,
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

// Store the startup settings; must run before `nannou::app(model)`.
// Hands the settings back if they were already set.
pub fn configure(settings: Settings) -> Result<(), Settings> {
    SETTINGS.set(settings)
}

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub mouse_position: Point2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let settings = SETTINGS.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title("Boids")
        .size(1024, 768)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .resized(resized)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to create window");

    let window = app.window(window_id).expect("Window vanished after creation");
    let egui = Egui::from_window(&window);

    let window_rect = window.rect();
    let bounds = WorldBounds::new(window_rect.w(), window_rect.h());
    log::info!(
        "Window opened at {:.0}x{:.0}, placement mode '{}'",
        bounds.width,
        bounds.height,
        settings.placement.label()
    );

    Model {
        simulation: Simulation::new(bounds, settings.seed),
        params: SimulationParams::new(settings.features, settings.placement),
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Point2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    if ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info) {
        log::debug!("Features changed: {:?}", model.params.features);
    }

    // The physics sees this copy for the whole frame
    let features = model.params.snapshot();
    model.simulation.step(&features);

    model.debug_info.frames = model.simulation.frame();
    model.debug_info.boid_count = model.simulation.boids().len();
    model.debug_info.wall_count = model.simulation.walls().len();
}

// Window resize handler; the world always matches the window
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.simulation.resize(size.x, size.y);
}
