//! Terminal front end settings read from the environment.
use calcul_core::REFRESH_INTERVAL;
use std::env;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Floor for the refresh interval, in milliseconds.
const MIN_REFRESH_MS: u64 = 50;

/// Runtime settings that are not part of the game rules.
#[derive(Clone, Debug)]
pub struct TermConfig {
    /// How often the elapsed time is redrawn during a run.
    pub refresh: Duration,
    /// Seed for problem generation.
    pub seed: u64,
}

impl TermConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CALCUL_REFRESH_MS` - Refresh interval in milliseconds (default: 500)
    /// - `CALCUL_SEED` - Problem generation seed (default: from system time)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("CALCUL_REFRESH_MS") {
            config.refresh = Duration::from_millis(ms.max(MIN_REFRESH_MS));
        }
        if let Some(seed) = read_env::<u64>("CALCUL_SEED") {
            config.seed = seed;
        }

        config
    }
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            refresh: REFRESH_INTERVAL,
            seed: time_seed(),
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_refresh() {
        let config = TermConfig::default();
        assert_eq!(config.refresh, Duration::from_millis(500));
    }

    #[test]
    fn test_read_env_missing() {
        assert_eq!(read_env::<u64>("CALCUL_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
