/*
 * Input Module
 *
 * Mouse handling: clicks on the canvas place a boid or a wall depending on
 * the palette, clicks on the control panel are left to egui.
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, WindowEvent};

use crate::app::Model;
use crate::screen;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    // The panel consumes its own clicks
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    // Wrapped onto the plane by the simulation
    let world_pos = screen::screen_to_world(model.mouse_position, app.window_rect());
    model.simulation.place(model.params.placement, world_pos);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
