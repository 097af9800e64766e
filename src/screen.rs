/*
 * Screen Module
 *
 * nannou puts the origin at the window center with y pointing up. The
 * simulation lives on [0, width) x [0, height) with the origin at the
 * top-left corner and y pointing down, like a canvas.
 */

use nannou::prelude::*;

// Convert a window point to world coordinates
pub fn screen_to_world(point: Point2, window_rect: Rect) -> Point2 {
    pt2(point.x - window_rect.left(), window_rect.top() - point.y)
}

// Convert a world point to window coordinates
pub fn world_to_screen(point: Point2, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + point.x, window_rect.top() - point.y)
}

// World directions flip their y component on screen
pub fn direction_to_screen(direction: Vec2) -> Vec2 {
    vec2(direction.x, -direction.y)
}
