//! Session configuration.
//!
//! Read from environment variables:
//!
//! - `MAZE_FOG_WIDTH` / `MAZE_FOG_HEIGHT`: maze size in cells (default 31x21)
//! - `MAZE_FOG_SEED`: layout seed (default 1)
//! - `MAZE_FOG_SIGHT_RADIUS`: sensor radius in cells (default 4)
//! - `MAZE_FOG_MIX_RATE`: fog blend progress per second (default 2.0)
//! - `MAZE_FOG_TREASURES`: number of treasures to scatter (default 6)
//! - `MAZE_FOG_LOG_PATH`: write log records to this file (default: no logging)
//!
//! Missing or unparsable values fall back to the defaults.

use std::str::FromStr;

use crate::types::DEFAULT_MIX_RATE;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub width: u16,
    pub height: u16,
    pub seed: u32,
    pub sight_radius: u16,
    pub mix_rate: f32,
    pub treasure_count: usize,
    pub log_path: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 31,
            height: 21,
            seed: 1,
            sight_radius: 4,
            mix_rate: DEFAULT_MIX_RATE,
            treasure_count: 6,
            log_path: None,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = parsed(&lookup, "MAZE_FOG_WIDTH").unwrap_or(defaults.width);
        let height = parsed(&lookup, "MAZE_FOG_HEIGHT").unwrap_or(defaults.height);
        let seed = parsed(&lookup, "MAZE_FOG_SEED").unwrap_or(defaults.seed);
        let sight_radius =
            parsed(&lookup, "MAZE_FOG_SIGHT_RADIUS").unwrap_or(defaults.sight_radius);
        let mix_rate = parsed::<f32>(&lookup, "MAZE_FOG_MIX_RATE")
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(defaults.mix_rate);
        let treasure_count =
            parsed(&lookup, "MAZE_FOG_TREASURES").unwrap_or(defaults.treasure_count);

        let log_path = lookup("MAZE_FOG_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width,
            height,
            seed,
            sight_radius,
            mix_rate,
            treasure_count,
            log_path,
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        assert_eq!(SessionConfig::from_lookup(|_| None), SessionConfig::default());
    }

    #[test]
    fn values_are_parsed() {
        let cfg = SessionConfig::from_lookup(lookup_from(&[
            ("MAZE_FOG_WIDTH", "41"),
            ("MAZE_FOG_HEIGHT", " 25 "),
            ("MAZE_FOG_SEED", "77"),
            ("MAZE_FOG_SIGHT_RADIUS", "6"),
            ("MAZE_FOG_MIX_RATE", "3.5"),
            ("MAZE_FOG_TREASURES", "0"),
            ("MAZE_FOG_LOG_PATH", "/tmp/maze-fog.log"),
        ]));
        assert_eq!(cfg.width, 41);
        assert_eq!(cfg.height, 25);
        assert_eq!(cfg.seed, 77);
        assert_eq!(cfg.sight_radius, 6);
        assert_eq!(cfg.mix_rate, 3.5);
        assert_eq!(cfg.treasure_count, 0);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/maze-fog.log"));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let cfg = SessionConfig::from_lookup(lookup_from(&[
            ("MAZE_FOG_WIDTH", "wide"),
            ("MAZE_FOG_MIX_RATE", "-1"),
            ("MAZE_FOG_LOG_PATH", "   "),
        ]));
        let defaults = SessionConfig::default();
        assert_eq!(cfg.width, defaults.width);
        assert_eq!(cfg.mix_rate, defaults.mix_rate);
        assert_eq!(cfg.log_path, None);
    }
}
