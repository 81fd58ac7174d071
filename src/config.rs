//! Startup configuration from environment variables.
//!
//! - `SNAKE_GRID_WIDTH` / `SNAKE_GRID_HEIGHT`: board size (default 20x20,
//!   clamped to 3x1 ..= 512x512)
//! - `SNAKE_TICK_MS`: movement interval (default 120, minimum 10)
//! - `SNAKE_SEED`: replayable food placement from a fixed seed
//! - `SNAKE_LOG_PATH`: log file (default `tui-snake.log`, empty disables logging)
//!
//! Unparseable or out-of-range values fall back (or are clamped) with a
//! warning. Config is read before the logger exists, so warnings are collected
//! in [`SnakeConfig::warnings`] and emitted by the host once logging is up.

use std::env;
use std::time::Duration;

use rand::Rng;

use crate::core::{RandomSource, SimpleRng};
use crate::types::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MAX_GRID_HEIGHT, MAX_GRID_WIDTH, MIN_GRID_HEIGHT,
    MIN_GRID_WIDTH, MIN_TICK_MS, TICK_MS,
};

pub const DEFAULT_LOG_PATH: &str = "tui-snake.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub tick_ms: u32,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    /// Problems found while reading the environment.
    pub warnings: Vec<String>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            tick_ms: TICK_MS,
            seed: None,
            log_path: Some(DEFAULT_LOG_PATH.to_string()),
            warnings: Vec::new(),
        }
    }
}

impl SnakeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let grid_width =
            parse_or(&lookup, "SNAKE_GRID_WIDTH", defaults.grid_width, &mut warnings);
        let grid_width = clamp_or_warn(
            "SNAKE_GRID_WIDTH",
            grid_width,
            MIN_GRID_WIDTH,
            MAX_GRID_WIDTH,
            &mut warnings,
        );
        let grid_height =
            parse_or(&lookup, "SNAKE_GRID_HEIGHT", defaults.grid_height, &mut warnings);
        let grid_height = clamp_or_warn(
            "SNAKE_GRID_HEIGHT",
            grid_height,
            MIN_GRID_HEIGHT,
            MAX_GRID_HEIGHT,
            &mut warnings,
        );
        let tick_ms = parse_or(&lookup, "SNAKE_TICK_MS", defaults.tick_ms, &mut warnings);
        let tick_ms = clamp_or_warn("SNAKE_TICK_MS", tick_ms, MIN_TICK_MS, u32::MAX, &mut warnings);

        let seed = lookup("SNAKE_SEED").and_then(|raw| match raw.trim().parse::<u32>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warnings.push(format!("ignoring invalid SNAKE_SEED={:?}", raw));
                None
            }
        });

        let log_path = match lookup("SNAKE_LOG_PATH") {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(raw.trim().to_string()),
            None => defaults.log_path,
        };

        Self {
            grid_width,
            grid_height,
            tick_ms,
            seed,
            log_path,
            warnings,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    /// Seeded LCG when `SNAKE_SEED` is set, otherwise the thread RNG.
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SimpleRng::new(seed)),
            None => {
                let mut rng = rand::thread_rng();
                Box::new(move || rng.gen::<f64>())
            }
        }
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    warnings: &mut Vec<String>,
) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warnings.push(format!("ignoring invalid {}={:?}, using {:?}", key, raw, default));
            default
        }),
        None => default,
    }
}

fn clamp_or_warn<T>(key: &str, value: T, min: T, max: T, warnings: &mut Vec<String>) -> T
where
    T: Ord + Copy + std::fmt::Display,
{
    let clamped = value.clamp(min, max);
    if clamped != value {
        warnings.push(format!("{}={} out of range, using {}", key, value, clamped));
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SnakeConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SnakeConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), SnakeConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("SNAKE_GRID_WIDTH", "32"),
            ("SNAKE_GRID_HEIGHT", " 16 "),
            ("SNAKE_TICK_MS", "80"),
            ("SNAKE_SEED", "42"),
            ("SNAKE_LOG_PATH", "/tmp/snake.log"),
        ]);
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 16);
        assert_eq!(config.tick_duration(), Duration::from_millis(80));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/snake.log"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("SNAKE_GRID_WIDTH", "wide"),
            ("SNAKE_TICK_MS", "-5"),
            ("SNAKE_SEED", "abc"),
        ]);
        assert_eq!(config.grid_width, DEFAULT_GRID_WIDTH);
        assert_eq!(config.tick_ms, TICK_MS);
        assert_eq!(config.seed, None);
        assert_eq!(config.warnings.len(), 3);
        assert!(config.warnings[0].contains("SNAKE_GRID_WIDTH=\"wide\""));
        assert!(config.warnings[1].contains("SNAKE_TICK_MS"));
        assert!(config.warnings[2].contains("SNAKE_SEED"));
    }

    #[test]
    fn valid_values_produce_no_warnings() {
        let config = config_from(&[("SNAKE_GRID_WIDTH", "30"), ("SNAKE_SEED", "1")]);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn grid_is_clamped_to_supported_range() {
        let config = config_from(&[("SNAKE_GRID_WIDTH", "40000"), ("SNAKE_GRID_HEIGHT", "0")]);
        assert_eq!(config.grid_width, MAX_GRID_WIDTH);
        assert_eq!(config.grid_height, MIN_GRID_HEIGHT);
        assert_eq!(
            config.warnings,
            vec![
                format!("SNAKE_GRID_WIDTH=40000 out of range, using {}", MAX_GRID_WIDTH),
                format!("SNAKE_GRID_HEIGHT=0 out of range, using {}", MIN_GRID_HEIGHT),
            ]
        );
    }

    #[test]
    fn width_beyond_u16_falls_back_to_default() {
        let config = config_from(&[("SNAKE_GRID_WIDTH", "70000")]);
        assert_eq!(config.grid_width, DEFAULT_GRID_WIDTH);
        assert_eq!(config.warnings.len(), 1);
    }

    #[test]
    fn tick_is_clamped_and_empty_log_path_disables() {
        let config = config_from(&[("SNAKE_TICK_MS", "1"), ("SNAKE_LOG_PATH", "")]);
        assert_eq!(config.tick_ms, MIN_TICK_MS);
        assert_eq!(config.log_path, None);
        assert_eq!(config.warnings, vec!["SNAKE_TICK_MS=1 out of range, using 10".to_string()]);
    }

    #[test]
    fn seeded_source_is_replayable() {
        let config = config_from(&[("SNAKE_SEED", "7")]);
        let mut a = config.random_source();
        let mut b = config.random_source();
        for _ in 0..10 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }
}
