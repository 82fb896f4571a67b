use glam::Vec2;

use crate::{Params, Side};

/// Court geometry and tuning for a match
#[derive(Debug, Clone)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub opponent_tracking_speed: f32,
    pub ball_size: f32,
    pub serve_speed_x: f32,
    pub opening_speed_y: f32,
    pub serve_angle_range: f32,
    pub ball_speed_increase: f32,
    pub return_angle_factor: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            opponent_tracking_speed: Params::OPPONENT_TRACKING_SPEED,
            ball_size: Params::BALL_SIZE,
            serve_speed_x: Params::SERVE_SPEED_X,
            opening_speed_y: Params::OPENING_SPEED_Y,
            serve_angle_range: Params::SERVE_ANGLE_RANGE,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            return_angle_factor: Params::RETURN_ANGLE_FACTOR,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge of a side's paddle; the human plays against the left wall
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Human => 0.0,
            Side::Opponent => self.court_width - self.paddle_width,
        }
    }

    /// Largest valid paddle top
    pub fn max_paddle_top(&self) -> f32 {
        self.court_height - self.paddle_height
    }

    /// Clamp a paddle top edge to the court
    pub fn clamp_paddle_top(&self, top: f32) -> f32 {
        top.clamp(0.0, self.max_paddle_top())
    }

    /// Largest valid ball y (top edge)
    pub fn max_ball_y(&self) -> f32 {
        self.court_height - self.ball_size
    }

    /// Paddle top that vertically centres a paddle on the court
    pub fn centered_paddle_top(&self) -> f32 {
        self.max_paddle_top() / 2.0
    }

    pub fn court_center(&self) -> Vec2 {
        Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }

    /// Velocity the ball carries when a match starts
    pub fn opening_velocity(&self) -> Vec2 {
        Vec2::new(self.serve_speed_x, self.opening_speed_y)
    }
}
