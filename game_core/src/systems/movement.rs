use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Write the latest pointer-derived top into the human paddle
pub fn apply_player_input(world: &mut World, top: Option<f32>, config: &Config) {
    let Some(top) = top else {
        return;
    };
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Human {
            paddle.top = config.clamp_paddle_top(top);
        }
    }
}

/// Integrate ball position by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
