//! Authoritative match state
//!
//! Everything the presentation layer reads, and the one entry point (`tick`)
//! through which the simulation mutates it.

use hecs::World;

use crate::{
    ball_state, create_ball, create_paddle, paddle_top, step, Config, Events, GameRng, InputCell,
    MatchCommand, MatchFsm, MatchPhase, Score, Side, TransitionResult,
};

/// What happened during one processed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u32,
    pub events: Events,
    /// Set on the tick that ended the match
    pub winner: Option<Side>,
}

/// Read-only copy of the whole simulation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimSnapshot {
    pub tick: u32,
    pub phase: MatchPhase,
    pub ball_pos: glam::Vec2,
    pub ball_vel: glam::Vec2,
    pub human_top: f32,
    pub opponent_top: f32,
    pub score: Score,
    pub last_contact: Option<Side>,
    pub winner: Option<Side>,
}

/// A single match against the tracking opponent
pub struct MatchSession {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    input: InputCell,
    fsm: MatchFsm,
    last_contact: Option<Side>,
    tick: u32,
}

impl MatchSession {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let mut session = Self {
            world: World::new(),
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            input: InputCell::new(),
            fsm: MatchFsm::new(),
            last_contact: None,
            tick: 0,
        };
        session.init_match();
        session
    }

    /// Ball centred with the opening velocity, paddles centred, scores zeroed
    fn init_match(&mut self) {
        self.world.clear();

        let paddle_top = self.config.centered_paddle_top();
        create_paddle(&mut self.world, Side::Human, paddle_top);
        create_paddle(&mut self.world, Side::Opponent, paddle_top);
        create_ball(
            &mut self.world,
            self.config.court_center(),
            self.config.opening_velocity(),
        );

        self.score = Score::new();
        self.events.clear();
        self.last_contact = None;
        self.tick = 0;
        self.input.clear();
    }

    /// Handle for the input collaborator to write the human paddle top
    pub fn input(&self) -> InputCell {
        self.input.clone()
    }

    /// Record the latest human paddle top; applied on the next tick
    pub fn set_player_top(&self, top: f32) {
        self.input.write(self.config.clamp_paddle_top(top));
    }

    /// Apply a UI command
    pub fn apply(&mut self, command: MatchCommand) -> TransitionResult {
        let result = self.fsm.apply(command);
        if result.success && matches!(command, MatchCommand::Start | MatchCommand::Reset) {
            self.init_match();
            if command == MatchCommand::Start {
                tracing::info!("match started");
            }
        }
        result
    }

    pub fn start(&mut self) -> TransitionResult {
        self.apply(MatchCommand::Start)
    }

    pub fn pause(&mut self) -> TransitionResult {
        self.apply(MatchCommand::Pause)
    }

    pub fn resume(&mut self) -> TransitionResult {
        self.apply(MatchCommand::Resume)
    }

    pub fn toggle_pause(&mut self) -> TransitionResult {
        self.apply(MatchCommand::TogglePause)
    }

    pub fn reset(&mut self) -> TransitionResult {
        self.apply(MatchCommand::Reset)
    }

    /// Advance one tick. Returns `None` without touching state unless playing.
    pub fn tick(&mut self) -> Option<TickReport> {
        if !self.fsm.is_playing() {
            return None;
        }

        let before = self.score;
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            self.input.latest(),
        );
        self.tick += 1;

        debug_assert!(self.score.human >= before.human && self.score.opponent >= before.opponent);
        debug_assert!(self.paddles_in_court());

        if let Some(side) = self.events.paddle_hit {
            self.last_contact = Some(side);
        }
        if self.events.scored.is_some() {
            self.last_contact = None;
        }

        let mut winner = None;
        if self.events.scored.is_some() {
            winner = self.score.has_winner(self.config.win_score);
            if let Some(side) = winner {
                self.fsm.finish();
                tracing::info!(
                    ?side,
                    human = self.score.human,
                    opponent = self.score.opponent,
                    "match over"
                );
            }
        }

        Some(TickReport {
            tick: self.tick,
            events: self.events,
            winner,
        })
    }

    fn paddles_in_court(&self) -> bool {
        let max = self.config.max_paddle_top();
        [Side::Human, Side::Opponent]
            .into_iter()
            .filter_map(|side| paddle_top(&self.world, side))
            .all(|top| (0.0..=max).contains(&top))
    }

    pub fn phase(&self) -> MatchPhase {
        self.fsm.phase()
    }

    pub fn is_playing(&self) -> bool {
        self.fsm.is_playing()
    }

    /// Side that reached the winning score, once the match is over
    pub fn winner(&self) -> Option<Side> {
        if self.fsm.is_game_over() {
            self.score.has_winner(self.config.win_score)
        } else {
            None
        }
    }

    pub fn last_contact(&self) -> Option<Side> {
        self.last_contact
    }

    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    pub fn snapshot(&self) -> SimSnapshot {
        let (ball_pos, ball_vel) = ball_state(&self.world)
            .map(|ball| (ball.pos, ball.vel))
            .unwrap_or((self.config.court_center(), glam::Vec2::ZERO));
        let centered = self.config.centered_paddle_top();

        SimSnapshot {
            tick: self.tick,
            phase: self.phase(),
            ball_pos,
            ball_vel,
            human_top: paddle_top(&self.world, Side::Human).unwrap_or(centered),
            opponent_top: paddle_top(&self.world, Side::Opponent).unwrap_or(centered),
            score: self.score,
            last_contact: self.last_contact,
            winner: self.winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ball;
    use glam::Vec2;

    fn place_ball(session: &mut MatchSession, pos: Vec2, vel: Vec2) {
        for (_e, ball) in session.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    #[test]
    fn test_initial_snapshot() {
        let session = MatchSession::new(1);
        let snap = session.snapshot();
        assert_eq!(snap.phase, MatchPhase::Menu);
        assert_eq!(snap.ball_pos, Vec2::new(400.0, 300.0));
        assert_eq!(snap.ball_vel, Vec2::new(4.0, 3.0));
        assert_eq!(snap.human_top, 260.0);
        assert_eq!(snap.opponent_top, 260.0);
        assert_eq!(snap.score, Score::new());
        assert_eq!(snap.last_contact, None);
        assert_eq!(snap.tick, 0);
    }

    #[test]
    fn test_no_tick_outside_playing() {
        let mut session = MatchSession::new(1);
        let before = session.snapshot();
        assert_eq!(session.tick(), None);
        assert_eq!(session.snapshot(), before, "Menu is frozen");

        session.start();
        session.tick();
        session.pause();
        let paused = session.snapshot();
        assert_eq!(session.tick(), None);
        assert_eq!(session.snapshot(), paused, "Paused is frozen");
    }

    #[test]
    fn test_tick_moves_ball() {
        let mut session = MatchSession::new(1);
        session.start();

        let report = session.tick().expect("playing");

        assert_eq!(report.tick, 1);
        assert_eq!(session.snapshot().ball_pos, Vec2::new(404.0, 303.0));
    }

    #[test]
    fn test_latest_input_wins() {
        let mut session = MatchSession::new(1);
        session.start();

        let input = session.input();
        input.write(10.0);
        input.write(75.0);
        session.tick();

        assert_eq!(session.snapshot().human_top, 75.0);
    }

    #[test]
    fn test_set_player_top_clamps() {
        let mut session = MatchSession::new(1);
        session.start();
        session.set_player_top(-40.0);
        session.tick();
        assert_eq!(session.snapshot().human_top, 0.0);
    }

    #[test]
    fn test_contact_recorded_and_cleared() {
        let mut session = MatchSession::new(1);
        session.start();
        place_ball(&mut session, Vec2::new(18.0, 294.0), Vec2::new(-4.0, 0.0));

        session.tick();
        assert_eq!(session.last_contact(), Some(Side::Human));

        place_ball(&mut session, Vec2::new(-13.0, 550.0), Vec2::new(-4.0, 0.0));
        session.tick();
        assert_eq!(session.last_contact(), None);
        assert_eq!(session.score.opponent, 1);
    }

    #[test]
    fn test_eleventh_point_ends_match() {
        let mut session = MatchSession::new(1);
        session.start();
        session.score = Score {
            human: 3,
            opponent: 10,
        };
        place_ball(&mut session, Vec2::new(-13.0, 550.0), Vec2::new(-4.0, 0.0));

        let report = session.tick().expect("playing");

        assert_eq!(report.winner, Some(Side::Opponent));
        assert_eq!(session.phase(), MatchPhase::GameOver);
        assert_eq!(session.winner(), Some(Side::Opponent));
        assert_eq!(session.tick(), None, "No ticks after game over");
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = MatchSession::new(1);
        let initial = session.snapshot();

        session.start();
        session.set_player_top(10.0);
        for _ in 0..200 {
            session.tick();
        }
        session.score.increment(Side::Human);

        assert!(session.reset().success);
        assert_eq!(session.snapshot(), initial);
        assert_eq!(session.input().latest(), None);
    }

    #[test]
    fn test_start_after_reset_is_fresh() {
        let mut session = MatchSession::new(1);
        session.start();
        for _ in 0..50 {
            session.tick();
        }
        session.reset();
        session.start();

        let snap = session.snapshot();
        assert_eq!(snap.phase, MatchPhase::Playing);
        assert_eq!(snap.ball_pos, Vec2::new(400.0, 300.0));
        assert_eq!(snap.tick, 0);
    }
}
