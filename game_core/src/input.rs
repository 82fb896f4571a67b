//! Input adapter helpers
//!
//! The presentation layer owns pointer and keyboard events; these functions
//! turn them into the clamped paddle top the simulation accepts.

use crate::Config;

/// Paddle top that keeps the paddle centred under an absolute pointer Y.
///
/// `court_top` is the top of the court's bounding box in the same space as
/// `pointer_y`.
pub fn pointer_to_paddle_top(pointer_y: f32, court_top: f32, config: &Config) -> f32 {
    let relative_y = pointer_y - court_top;
    config.clamp_paddle_top(relative_y - config.paddle_height / 2.0)
}

/// Direction for a key press: -1 = up, 1 = down, 0 = not a paddle key
pub fn key_direction(key: &str) -> i8 {
    match key {
        "ArrowUp" | "w" | "W" => -1,
        "ArrowDown" | "s" | "S" => 1,
        _ => 0,
    }
}

/// Move a paddle top one keyboard step in `dir`
pub fn nudge_top(top: f32, dir: i8, step: f32, config: &Config) -> f32 {
    config.clamp_paddle_top(top + dir.signum() as f32 * step)
}
