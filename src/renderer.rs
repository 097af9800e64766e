/*
 * Renderer Module
 *
 * Draws walls as rings, boids as small rings with a line along their
 * heading, and the debug overlay when enabled.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::screen::{direction_to_screen, world_to_screen};
use crate::ui;
use crate::{BOID_RADIUS, HEADING_LENGTH, WALL_RADIUS};

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let window_rect = app.window_rect();
    let features = &model.params.features;

    for boid in model.simulation.boids() {
        let center = world_to_screen(boid.position, window_rect);
        let tip = center + direction_to_screen(boid.velocity) * HEADING_LENGTH;

        draw.ellipse()
            .xy(center)
            .radius(BOID_RADIUS)
            .no_fill()
            .stroke(BLACK)
            .stroke_weight(1.0);

        draw.line().start(center).end(tip).color(BLACK).weight(1.0);
    }

    for wall in model.simulation.walls() {
        draw.ellipse()
            .xy(world_to_screen(wall.position(), window_rect))
            .radius(WALL_RADIUS)
            .no_fill()
            .stroke(BLACK)
            .stroke_weight(1.0);
    }

    if model.params.show_debug {
        // Detection radii around the first boid
        if let Some(first) = model.simulation.boids().first() {
            let center = world_to_screen(first.position, window_rect);
            let rings = [
                (features.alignment, features.alignment_radius, GREEN),
                (features.cohesion, features.cohesion_radius, BLUE),
                (features.repel, features.repel_radius, RED),
                (features.evade_wall, features.wall_detection_range, ORANGE),
            ];

            for (enabled, radius, color) in rings {
                if enabled {
                    draw.ellipse()
                        .xy(center)
                        .radius(radius as f32)
                        .no_fill()
                        .stroke(color)
                        .stroke_weight(1.0);
                }
            }
        }

        ui::draw_debug_info(&draw, &model.debug_info, window_rect, &model.simulation.bounds());
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {:?}", e);
    }

    if let Err(e) = model.egui.draw_to_frame(&frame) {
        log::error!("Failed to draw control panel: {:?}", e);
    }
}
