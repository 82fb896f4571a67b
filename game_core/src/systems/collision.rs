use crate::{Ball, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Resolve wall and paddle collisions for the already integrated ball
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // First, collect ball data without holding borrows
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let Some((mut ball_pos, mut ball_vel)) = ball_data else {
        return; // No ball in world
    };

    // Paddle gates use the velocity the ball arrived with, not the result of an
    // earlier rule in this tick
    let incoming_vx = ball_vel.x;

    // Top/bottom walls: reflect and pin to the boundary, no energy loss
    let max_y = config.max_ball_y();
    if ball_pos.y <= 0.0 || ball_pos.y >= max_y {
        ball_vel.y = -ball_vel.y;
        ball_pos.y = if ball_pos.y <= 0.0 { 0.0 } else { max_y };
        events.wall_bounce = true;
    }

    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.top))
        .collect();
    // Human rule is evaluated before the opponent rule
    paddles.sort_by_key(|(side, _)| *side != Side::Human);

    for (side, top) in paddles {
        if !touches_paddle(side, top, ball_pos, incoming_vx, config) {
            continue;
        }

        let speed = ball_vel.x.abs() * config.ball_speed_increase;
        ball_vel.x = match side {
            Side::Human => speed,
            Side::Opponent => -speed,
        };
        ball_vel.y = hit_offset(top, ball_pos.y, config) * config.return_angle_factor;
        events.paddle_hit = Some(side);
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = ball_pos;
        ball.vel = ball_vel;
    }
}

/// Ball is moving toward the paddle, has reached its plane and overlaps it vertically
fn touches_paddle(side: Side, top: f32, ball_pos: Vec2, incoming_vx: f32, config: &Config) -> bool {
    let overlaps = ball_pos.y + config.ball_size >= top && ball_pos.y <= top + config.paddle_height;
    if !overlaps {
        return false;
    }
    let face_x = config.paddle_x(side);
    match side {
        Side::Human => incoming_vx < 0.0 && ball_pos.x <= face_x + config.paddle_width,
        Side::Opponent => incoming_vx > 0.0 && ball_pos.x + config.ball_size >= face_x,
    }
}

/// Strike position relative to paddle centre: about -1 at the top edge, 1 at the bottom
pub fn hit_offset(paddle_top: f32, ball_y: f32, config: &Config) -> f32 {
    let half = config.paddle_height / 2.0;
    let ball_center = ball_y + config.ball_size / 2.0;
    (ball_center - (paddle_top + half)) / half
}
