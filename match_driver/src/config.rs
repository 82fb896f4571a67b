use std::time::Duration;

use game_core::Params;

/// Tick driver configuration
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Time between simulation ticks
    pub tick_interval: Duration,
    /// Seed for the serve-angle RNG
    pub seed: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(Params::TICK_MS),
            seed: 12345,
        }
    }
}

impl DriverConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ms) = lookup("TICK_INTERVAL_MS") {
            match ms.parse::<u64>() {
                Ok(parsed) if (1..=1000).contains(&parsed) => {
                    config.tick_interval = Duration::from_millis(parsed);
                }
                Ok(_) => tracing::warn!("TICK_INTERVAL_MS must be 1-1000, using default"),
                Err(_) => tracing::warn!("Invalid TICK_INTERVAL_MS '{}', using default", ms),
            }
        }

        if let Some(seed) = lookup("MATCH_SEED") {
            if let Ok(parsed) = seed.parse::<u64>() {
                config.seed = parsed;
            } else {
                tracing::warn!("Invalid MATCH_SEED '{}', using default", seed);
            }
        }

        config
    }
}
