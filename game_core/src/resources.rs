use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::Side;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub human: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Human => self.human,
            Side::Opponent => self.opponent,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.human >= win_score {
            Some(Side::Human)
        } else if self.opponent >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_bounce: bool,
    pub paddle_hit: Option<Side>,
    pub scored: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

const NO_INPUT: u32 = u32::MAX; // a NaN bit pattern, never produced by `write`

/// Latest human paddle top written by the input collaborator.
///
/// Writers overwrite, the tick reads whatever is newest. Nothing is queued.
#[derive(Debug, Clone)]
pub struct InputCell(Arc<AtomicU32>);

impl InputCell {
    pub fn new() -> Self {
        Self(Arc::new(AtomicU32::new(NO_INPUT)))
    }

    /// Store a new paddle top. Non-finite values are dropped.
    pub fn write(&self, top: f32) {
        if top.is_finite() {
            self.0.store(top.to_bits(), Ordering::Release);
        }
    }

    pub fn latest(&self) -> Option<f32> {
        match self.0.load(Ordering::Acquire) {
            NO_INPUT => None,
            bits => Some(f32::from_bits(bits)),
        }
    }

    pub fn clear(&self) {
        self.0.store(NO_INPUT, Ordering::Release);
    }
}

impl Default for InputCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Human);
        score.increment(Side::Opponent);
        score.increment(Side::Opponent);
        assert_eq!(score.get(Side::Human), 1);
        assert_eq!(score.get(Side::Opponent), 2);
    }

    #[test]
    fn test_score_has_winner_human() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Human);
        }
        assert_eq!(
            score.has_winner(11),
            Some(Side::Human),
            "Human should win at 11"
        );
    }

    #[test]
    fn test_score_has_winner_opponent_regardless_of_margin() {
        let score = Score {
            human: 10,
            opponent: 11,
        };
        assert_eq!(score.has_winner(11), Some(Side::Opponent));
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score {
            human: 10,
            opponent: 10,
        };
        assert_eq!(score.has_winner(11), None, "No winner below threshold");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            wall_bounce: true,
            paddle_hit: Some(Side::Human),
            scored: Some(Side::Opponent),
        };
        events.clear();
        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_input_cell_keeps_only_latest() {
        let cell = InputCell::new();
        assert_eq!(cell.latest(), None);

        let writer = cell.clone();
        writer.write(10.0);
        writer.write(42.5);
        assert_eq!(cell.latest(), Some(42.5));

        writer.write(f32::NAN);
        assert_eq!(cell.latest(), Some(42.5), "NaN writes are ignored");

        cell.clear();
        assert_eq!(writer.latest(), None);
    }
}
