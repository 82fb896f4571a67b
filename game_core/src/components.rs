use glam::Vec2;

/// Which end of the court a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,    // left wall, pointer controlled
    Opponent, // right wall, tracking controller
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

/// Paddle component - fixed x, moves vertically
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub top: f32, // top edge, clamped to court on every write
}

impl Paddle {
    pub fn new(side: Side, top: f32) -> Self {
        Self { side, top }
    }
}

/// Ball component - `pos` is the top-left corner of the ball's box
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn center_y(&self, size: f32) -> f32 {
        self.pos.y + size / 2.0
    }

    /// Re-centre on the court and serve toward `receiver`
    pub fn serve(&mut self, receiver: Side, config: &crate::Config, rng: &mut crate::GameRng) {
        use rand::Rng;

        self.pos = config.court_center();

        let dir = match receiver {
            Side::Human => -1.0,
            Side::Opponent => 1.0,
        };
        let range = config.serve_angle_range;
        self.vel = Vec2::new(
            dir * config.serve_speed_x,
            rng.0.gen_range(-range..=range),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, GameRng};

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Human.opposite(), Side::Opponent);
        assert_eq!(Side::Opponent.opposite(), Side::Human);
    }

    #[test]
    fn test_serve_heads_toward_receiver() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-20.0, 40.0), Vec2::new(-9.0, 2.0));

        ball.serve(Side::Human, &config, &mut rng);
        assert_eq!(ball.pos, config.court_center());
        assert_eq!(ball.vel.x, -config.serve_speed_x);

        ball.serve(Side::Opponent, &config, &mut rng);
        assert_eq!(ball.vel.x, config.serve_speed_x);
    }

    #[test]
    fn test_serve_angle_stays_in_range() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        for _ in 0..500 {
            ball.serve(Side::Opponent, &config, &mut rng);
            assert!(ball.vel.y.abs() <= config.serve_angle_range);
        }
    }
}
