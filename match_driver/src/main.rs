use game_core::{pointer_to_paddle_top, Config, MatchCommand};
use match_driver::{DriverConfig, MatchDriver};
use proto::PhaseP;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Pixels the stand-in player's hand moves per snapshot
const HAND_SPEED: f32 = 5.0;

/// Distance between paddle centre and ball centre the stand-in aims for at
/// contact. Edge strikes give steep returns the opponent cannot chase.
const STRIKE_OFFSET: f32 = 30.0;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Pickleball driver v{}", env!("CARGO_PKG_VERSION"));

    let config = DriverConfig::load_or_default();
    info!(
        "Configuration loaded: tick={}ms, seed={}",
        config.tick_interval.as_millis(),
        config.seed
    );

    let mut driver = MatchDriver::new(config)?;
    let mut updates = driver.subscribe();
    let input = driver.input();
    let court = Config::new();

    let result = driver.command(MatchCommand::Start);
    if !result.success {
        warn!("Could not start match from {:?}", result.from);
        return Ok(());
    }

    // Headless stand-in for the pointer: the hand chases the ball at a human pace
    let mut hand_y = court.court_height / 2.0;
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snap = *updates.borrow_and_update();
                if snap.phase == PhaseP::GameOver {
                    break;
                }

                // Angle the return away from wherever the opponent is waiting
                let opponent_center = snap.opponent_top + court.paddle_height / 2.0;
                let aim = if opponent_center > court.court_height / 2.0 {
                    STRIKE_OFFSET
                } else {
                    -STRIKE_OFFSET
                };
                let target = snap.ball_y + court.ball_size / 2.0 + aim;
                hand_y += (target - hand_y).clamp(-HAND_SPEED, HAND_SPEED);
                input.write(pointer_to_paddle_top(hand_y, 0.0, &court));
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    let snap = driver.snapshot();
    info!(
        "Final score: human {} - opponent {} ({:?} won)",
        snap.score_human, snap.score_opponent, snap.winner
    );

    driver.command(MatchCommand::Reset);
    info!("Driver stopped, ticking={}", driver.is_ticking());

    Ok(())
}
