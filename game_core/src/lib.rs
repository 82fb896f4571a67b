pub mod components;
pub mod config;
pub mod fsm;
pub mod input;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use session::*;

pub use glam;

use hecs::World;
use systems::*;

/// Run one deterministic tick of the volley simulation
///
/// `player_top` is the newest human paddle position written by the input
/// collaborator, if any.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    player_top: Option<f32>,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Latest pointer position lands on the human paddle
    apply_player_input(world, player_top, config);

    // The opponent reacts to the ball as it stood when the tick began
    let ball_center_y = ball_state(world).map(|ball| ball.center_y(config.ball_size));

    // 2. Move ball
    move_ball(world);

    // 3. Walls, then human paddle, then opponent paddle
    check_collisions(world, config, events);

    // 4. Check scoring (ball fully left the court)
    check_scoring(world, config, score, events, rng);

    // 5. Opponent tracking
    if let Some(ball_center_y) = ball_center_y {
        move_opponent(world, ball_center_y, config);
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, top: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, top),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Copy of the ball, if one exists
pub fn ball_state(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}

/// Current top of a side's paddle, if spawned
pub fn paddle_top(world: &World, side: Side) -> Option<f32> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, paddle)| paddle.side == side)
        .map(|(_e, paddle)| paddle.top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Human, config.centered_paddle_top());
        create_paddle(&mut world, Side::Opponent, config.centered_paddle_top());
        (world, config, Score::new(), Events::new(), GameRng::new(1))
    }

    #[test]
    fn test_wall_bounce_from_top_edge() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 0.0), Vec2::new(4.0, -2.0));

        step(&mut world, &config, &mut score, &mut events, &mut rng, None);

        let ball = ball_state(&world).unwrap();
        assert_eq!(ball.vel.y, 2.0);
        assert_eq!(ball.pos.y, 0.0, "Ball never goes above the court");
        assert_eq!(ball.pos.x, 404.0);
    }

    #[test]
    fn test_ball_crossing_left_line_scores_for_opponent() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        // Far below the human paddle so only the score rule applies
        create_ball(&mut world, Vec2::new(-13.0, 500.0), Vec2::new(-4.0, 0.0));

        step(&mut world, &config, &mut score, &mut events, &mut rng, None);

        assert_eq!(score.opponent, 1);
        assert_eq!(events.scored, Some(Side::Opponent));
        let ball = ball_state(&world).unwrap();
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel.x, -4.0, "Serve toward the human side");
    }

    #[test]
    fn test_player_input_applied_before_collision() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        // Ball arrives at y=504, far from the centred paddle
        create_ball(&mut world, Vec2::new(18.0, 504.0), Vec2::new(-4.0, 0.0));

        step(&mut world, &config, &mut score, &mut events, &mut rng, Some(470.0));

        assert_eq!(paddle_top(&world, Side::Human), Some(470.0));
        assert_eq!(events.paddle_hit, Some(Side::Human));
        assert!(ball_state(&world).unwrap().vel.x > 0.0);
    }

    #[test]
    fn test_fast_return_past_line_is_not_a_point() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        // Lands at x=-14, beyond the scoring line, while still over the paddle
        create_ball(&mut world, Vec2::new(16.0, 294.0), Vec2::new(-30.0, 0.0));

        step(&mut world, &config, &mut score, &mut events, &mut rng, None);

        assert_eq!(events.paddle_hit, Some(Side::Human));
        assert_eq!(events.scored, None);
        assert_eq!(score, Score::new());
        let ball = ball_state(&world).unwrap();
        assert!((ball.vel.x - 31.5).abs() < 1e-4, "Reflected and escalated");

        // Next tick carries it back into the court
        step(&mut world, &config, &mut score, &mut events, &mut rng, None);
        assert!(ball_state(&world).unwrap().pos.x > 0.0);
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_opponent_tracks_ball_each_step() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 100.0), Vec2::new(4.0, 0.0));

        step(&mut world, &config, &mut score, &mut events, &mut rng, None);

        assert_eq!(paddle_top(&world, Side::Opponent), Some(256.5));
        assert_eq!(paddle_top(&world, Side::Human), Some(260.0));
    }
}
