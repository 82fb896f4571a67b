//! Fixed-rate tick driver
//!
//! A ticker task exists exactly while the match is playing. It is acquired
//! when a command enters `Playing`, dropped when a command leaves it, and the
//! task exits on its own when a tick ends the match.

use std::sync::Arc;
use std::time::Duration;

use game_core::{InputCell, MatchCommand, MatchSession, TransitionResult};
use parking_lot::Mutex;
use proto::{Command, StateSnapshot};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::wire::{side_to_wire, snapshot_to_wire};
use crate::{DriverConfig, DriverError};

/// Owns the running ticker task; dropping it stops the task
struct TickerGuard {
    handle: JoinHandle<()>,
}

impl TickerGuard {
    fn is_live(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct MatchDriver {
    session: Arc<Mutex<MatchSession>>,
    config: DriverConfig,
    runtime: Handle,
    ticker: Option<TickerGuard>,
    snapshots: Arc<watch::Sender<StateSnapshot>>,
}

impl MatchDriver {
    /// Create a driver in the menu phase. Must be called inside a tokio runtime.
    pub fn new(config: DriverConfig) -> Result<Self, DriverError> {
        let runtime = Handle::try_current()?;
        let session = MatchSession::new(config.seed);
        let (tx, _rx) = watch::channel(snapshot_to_wire(&session.snapshot()));

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            config,
            runtime,
            ticker: None,
            snapshots: Arc::new(tx),
        })
    }

    /// Apply a UI command and acquire or release the ticker to match the new phase
    pub fn command(&mut self, command: MatchCommand) -> TransitionResult {
        let result = self.session.lock().apply(command);
        self.sync_ticker();
        self.publish();
        result
    }

    /// Decode and apply a boundary command.
    ///
    /// Paddle positions produce no transition and return `None`.
    pub fn handle_bytes(&mut self, bytes: &[u8]) -> Result<Option<TransitionResult>, DriverError> {
        let command = Command::from_bytes(bytes).map_err(DriverError::Decode)?;
        let command = match command {
            Command::Start => MatchCommand::Start,
            Command::Pause => MatchCommand::Pause,
            Command::Resume => MatchCommand::Resume,
            Command::TogglePause => MatchCommand::TogglePause,
            Command::Reset => MatchCommand::Reset,
            Command::PaddleTop { top } => {
                self.set_player_top(top);
                return Ok(None);
            }
        };
        Ok(Some(self.command(command)))
    }

    /// Record the newest human paddle top; the next tick picks it up
    pub fn set_player_top(&self, top: f32) {
        self.session.lock().set_player_top(top);
    }

    /// Write handle for an input collaborator that bypasses the driver
    pub fn input(&self) -> InputCell {
        self.session.lock().input()
    }

    pub fn session(&self) -> Arc<Mutex<MatchSession>> {
        self.session.clone()
    }

    pub fn snapshot(&self) -> StateSnapshot {
        snapshot_to_wire(&self.session.lock().snapshot())
    }

    pub fn snapshot_bytes(&self) -> Result<Vec<u8>, DriverError> {
        self.snapshot().to_bytes().map_err(DriverError::Encode)
    }

    /// Latest snapshot, updated after every tick and command
    pub fn subscribe(&self) -> watch::Receiver<StateSnapshot> {
        self.snapshots.subscribe()
    }

    /// Whether a ticker task is currently running
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(TickerGuard::is_live)
    }

    fn sync_ticker(&mut self) {
        // A ticker that ended the match has already exited
        if self.ticker.as_ref().is_some_and(|t| !t.is_live()) {
            self.ticker = None;
        }

        let playing = self.session.lock().is_playing();
        match (playing, self.ticker.is_some()) {
            (true, false) => {
                let handle = self.runtime.spawn(run_ticker(
                    self.session.clone(),
                    self.snapshots.clone(),
                    self.config.tick_interval,
                ));
                self.ticker = Some(TickerGuard { handle });
                debug!("ticker acquired");
            }
            (false, true) => {
                self.ticker = None;
                debug!("ticker released");
            }
            _ => {}
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.snapshot());
    }
}

/// Tick the session at a fixed rate until it stops playing
async fn run_ticker(
    session: Arc<Mutex<MatchSession>>,
    snapshots: Arc<watch::Sender<StateSnapshot>>,
    tick_interval: Duration,
) {
    let mut ticker = interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // First tick completes immediately
    ticker.tick().await;

    let ticks_per_log = (30_000 / tick_interval.as_millis().max(1)) as u32;

    loop {
        ticker.tick().await;

        let (report, snapshot) = {
            let mut session = session.lock();
            let report = session.tick();
            (report, session.snapshot())
        };

        let Some(report) = report else {
            debug!("session left playing, ticker exiting");
            break;
        };

        let snapshot = snapshot_to_wire(&snapshot);
        snapshots.send_replace(snapshot);

        if let Some(winner) = report.winner {
            info!(
                winner = ?side_to_wire(winner),
                human = snapshot.score_human,
                opponent = snapshot.score_opponent,
                ticks = report.tick,
                "match finished, ticker released"
            );
            break;
        }

        if ticks_per_log > 0 && report.tick % ticks_per_log == 0 {
            info!(
                tick = report.tick,
                human = snapshot.score_human,
                opponent = snapshot.score_opponent,
                ball_speed = snapshot.ball_vx.abs(),
                "match running"
            );
        }
    }
}
