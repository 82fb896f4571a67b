//! Match State Machine
//!
//! Guards which commands are legal in each phase. The automatic
//! `Playing -> GameOver` transition is not a command and is driven by the
//! session after a score.

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Commands from UI controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCommand {
    Start,
    Pause,
    Resume,
    TogglePause,
    Reset,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: MatchPhase,
    pub to: MatchPhase,
    pub command: MatchCommand,
}

/// Match finite state machine
#[derive(Debug, Default)]
pub struct MatchFsm {
    phase: MatchPhase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Check if a command is legal in the current phase
    pub fn can_apply(&self, command: MatchCommand) -> bool {
        self.next_phase(command).is_some()
    }

    /// Attempt a transition
    pub fn apply(&mut self, command: MatchCommand) -> TransitionResult {
        let from = self.phase;
        let to = match self.next_phase(command) {
            Some(next) => next,
            None => {
                tracing::debug!(?command, phase = ?from, "command rejected");
                return TransitionResult {
                    success: false,
                    from,
                    to: from,
                    command,
                };
            }
        };

        self.phase = to;
        tracing::debug!(?command, ?from, ?to, "phase transition");
        TransitionResult {
            success: true,
            from,
            to,
            command,
        }
    }

    /// Automatic end of match. Only fires while playing.
    pub fn finish(&mut self) -> bool {
        if self.phase != MatchPhase::Playing {
            return false;
        }
        self.phase = MatchPhase::GameOver;
        true
    }

    fn next_phase(&self, command: MatchCommand) -> Option<MatchPhase> {
        use MatchCommand::*;
        use MatchPhase::*;

        match (self.phase, command) {
            // Reset is legal from anywhere
            (_, Reset) => Some(Menu),

            (Menu, Start) => Some(Playing),

            (Playing, Pause | TogglePause) => Some(Paused),
            (Paused, Resume | TogglePause) => Some(Playing),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == MatchPhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }
}
