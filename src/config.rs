//! Run-time settings for the headless runner, read from the environment.

use std::env;
use std::time::Duration;

use crate::constants::LOOP_TIME;
use crate::error::ConfigError;

/// How many ticks to run when `PACMAN_TICKS` is unset.
pub const DEFAULT_TICKS: u64 = 600;
/// Print the board every this many ticks when `PACMAN_RENDER_EVERY` is unset.
pub const DEFAULT_RENDER_EVERY: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of ticks to simulate.
    pub ticks: u64,
    /// Simulated length of each tick.
    pub tick: Duration,
    /// Seed for the random strategies. `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Print the board every N ticks; 0 disables printing.
    pub render_every: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            tick: LOOP_TIME,
            seed: None,
            render_every: DEFAULT_RENDER_EVERY,
        }
    }
}

impl SimulationConfig {
    /// Reads `PACMAN_TICKS`, `PACMAN_TICK_MS`, `PACMAN_SEED`, and `PACMAN_RENDER_EVERY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(ticks) = parse_var(&lookup, "PACMAN_TICKS")? {
            config.ticks = ticks;
        }
        if let Some(millis) = parse_var(&lookup, "PACMAN_TICK_MS")? {
            config.tick = Duration::from_millis(millis);
        }
        config.seed = parse_var(&lookup, "PACMAN_SEED")?;
        if let Some(every) = parse_var(&lookup, "PACMAN_RENDER_EVERY")? {
            config.render_every = every;
        }

        Ok(config)
    }
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<u64>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SimulationConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = SimulationConfig::from_lookup(lookup(&[
            ("PACMAN_TICKS", "10"),
            ("PACMAN_TICK_MS", "100"),
            ("PACMAN_SEED", " 42 "),
            ("PACMAN_RENDER_EVERY", "0"),
        ]))
        .unwrap();

        assert_eq!(config.ticks, 10);
        assert_eq!(config.tick, Duration::from_millis(100));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.render_every, 0);
    }

    #[test]
    fn test_invalid_value() {
        let result = SimulationConfig::from_lookup(lookup(&[("PACMAN_TICKS", "lots")]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidValue {
                key: "PACMAN_TICKS",
                value: "lots".to_string()
            }
        );
    }
}
