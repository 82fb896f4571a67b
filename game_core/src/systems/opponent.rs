use crate::{Config, Paddle, Side};
use hecs::World;

/// Next top for a tracking paddle chasing `ball_center_y`.
///
/// Moves a fixed step toward the ball and holds still once it is within one
/// step, so it never jitters around the target. Reacts only to where the ball
/// is now, which keeps it beatable.
pub fn track_ball(paddle_top: f32, ball_center_y: f32, config: &Config) -> f32 {
    let speed = config.opponent_tracking_speed;
    let diff = ball_center_y - (paddle_top + config.paddle_height / 2.0);

    if diff.abs() < speed {
        return paddle_top;
    }

    config.clamp_paddle_top(paddle_top + speed.copysign(diff))
}

/// Move the opponent paddle one tick toward the ball
pub fn move_opponent(world: &mut World, ball_center_y: f32, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Opponent {
            paddle.top = track_ball(paddle.top, ball_center_y, config);
        }
    }
}
