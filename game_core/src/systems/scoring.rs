use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check if the ball has fully left the court and serve toward the side that conceded
///
/// Runs after collisions: a paddle return recorded this tick wins over the
/// scoring line, and the reflected ball re-enters the court next tick.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if events.paddle_hit.is_some() {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x < -config.ball_size {
            Side::Opponent
        } else if ball.pos.x > config.court_width + config.ball_size {
            Side::Human
        } else {
            continue;
        };

        score.increment(scorer);
        events.scored = Some(scorer);
        tracing::info!(
            ?scorer,
            human = score.human,
            opponent = score.opponent,
            "point scored"
        );

        ball.serve(scorer.opposite(), config, rng);
    }
}
