/*
 * UI Module
 *
 * The control panel: a movable, collapsible egui window with a "Features"
 * section (behavior toggles and radii) and a "Palette" section (what a click
 * places). Also draws the optional debug overlay.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{PlacementMode, SimulationParams};
use crate::vector::WorldBounds;

pub const PANEL_TITLE: &str = concat!("Boids v", env!("CARGO_PKG_VERSION"));

const OVERLAY_MARGIN: f32 = 20.0;
const OVERLAY_LINE_HEIGHT: f32 = 20.0;
const OVERLAY_WIDTH: f32 = 200.0;
// nannou centers text on its x; this puts the left edge of a line near the margin
const OVERLAY_TEXT_INDENT: f32 = 70.0;

// Update the panel and return whether any feature changed this frame
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> bool {
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new(PANEL_TITLE)
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(&ctx, |ui| {
            ui.collapsing("Features", |ui| {
                let features = &mut params.features;

                ui.checkbox(&mut features.alignment, "alignment");
                ui.add(egui::Slider::new(&mut features.alignment_radius, SimulationParams::get_radius_range()).text("alignmentRadius"));

                ui.checkbox(&mut features.cohesion, "cohesion");
                ui.add(egui::Slider::new(&mut features.cohesion_radius, SimulationParams::get_radius_range()).text("cohesionRadius"));

                ui.checkbox(&mut features.repel, "repel");
                ui.add(egui::Slider::new(&mut features.repel_radius, SimulationParams::get_radius_range()).text("repelRadius"));

                ui.checkbox(&mut features.noise, "noise");

                ui.checkbox(&mut features.evade_wall, "evadeWall");
                ui.add(egui::Slider::new(&mut features.wall_detection_range, SimulationParams::get_wall_range_range()).text("wallDetectionRange"));
            });

            ui.collapsing("Palette", |ui| {
                for mode in PlacementMode::ALL {
                    ui.radio_value(&mut params.placement, mode, mode.label());
                }
            });

            ui.separator();
            ui.label(format!("Boids: {}  Walls: {}", debug_info.boid_count, debug_info.wall_count));
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
        });

    params.detect_changes()
}

// Center of the first overlay line; later lines stack downward from it.
// Anchored bottom-left so the panel window does not cover it.
fn overlay_text_origin(window_rect: Rect, line_count: usize) -> Point2 {
    pt2(
        window_rect.left() + OVERLAY_MARGIN + OVERLAY_TEXT_INDENT,
        window_rect.bottom() + OVERLAY_MARGIN + OVERLAY_LINE_HEIGHT * line_count.saturating_sub(1) as f32,
    )
}

// Draw frame statistics in the bottom-left corner
pub fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect, bounds: &WorldBounds) {
    let lines = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time_ms()),
        format!("Frame: {}", debug_info.frames),
        format!("Boids: {}", debug_info.boid_count),
        format!("Walls: {}", debug_info.wall_count),
        format!("World: {:.0}x{:.0}", bounds.width, bounds.height),
    ];

    let panel_height = OVERLAY_LINE_HEIGHT * lines.len() as f32 + OVERLAY_MARGIN;
    draw.rect()
        .x_y(window_rect.left() + OVERLAY_WIDTH / 2.0, window_rect.bottom() + panel_height / 2.0)
        .w_h(OVERLAY_WIDTH, panel_height)
        .color(rgba(0.0, 0.0, 0.0, 0.7));

    let origin = overlay_text_origin(window_rect, lines.len());
    for (i, text) in lines.iter().enumerate() {
        draw.text(text)
            .x_y(origin.x, origin.y - i as f32 * OVERLAY_LINE_HEIGHT)
            .color(WHITE)
            .font_size(14);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_text_sits_inside_the_bottom_left_panel() {
        let window = Rect::from_w_h(1024.0, 768.0);
        let lines = 6;
        let origin = overlay_text_origin(window, lines);

        assert_eq!(origin.x, -512.0 + OVERLAY_MARGIN + OVERLAY_TEXT_INDENT);
        assert!(origin.x < window.left() + OVERLAY_WIDTH);

        // Last line one margin above the bottom edge, first line below the panel top
        let last = origin.y - (lines - 1) as f32 * OVERLAY_LINE_HEIGHT;
        assert_eq!(last, -384.0 + OVERLAY_MARGIN);
        let panel_top = window.bottom() + OVERLAY_LINE_HEIGHT * lines as f32 + OVERLAY_MARGIN;
        assert!(origin.y < panel_top);
    }
}
