//! Level table and per-level tuning
//!
//! The table is validated once when a [`crate::sim::Simulation`] is built;
//! the tick loop indexes it without further checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Per-level tuning values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Pixels per tick that pipes (and pickups) scroll left
    pub pipe_speed: f32,
    /// Base milliseconds between pipe spawns (jitter is added on top)
    pub spawn_interval_ms: f64,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical gap size between a pipe's halves
    pub gap_size: f32,
    /// Score needed to leave this level
    pub required_score: u32,
    /// Gap oscillation factor (0 disables oscillation)
    pub oscillation: f32,
}

/// Errors reported while validating a level table
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("level table is empty")]
    Empty,
    #[error("level {level}: {field} must be positive")]
    NonPositive { level: u32, field: &'static str },
    #[error("level {level}: gap size {gap} does not fit the {canvas} px canvas")]
    GapTooLarge { level: u32, gap: u32, canvas: u32 },
    #[error("level {level}: required score {score} below level {prev_level}'s {prev_score}")]
    NonMonotoneScore {
        level: u32,
        score: u32,
        prev_level: u32,
        prev_score: u32,
    },
}

/// An ordered set of level configs, indexed by 1-based level number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelTable {
    levels: Vec<LevelConfig>,
}

impl LevelTable {
    /// Build a table from level 1..=N configs, failing fast on bad tuning
    pub fn new(levels: Vec<LevelConfig>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::Empty);
        }
        let mut prev_score = 0u32;
        for (i, cfg) in levels.iter().enumerate() {
            let level = i as u32 + 1;
            for (value, field) in [
                (cfg.pipe_speed, "pipe_speed"),
                (cfg.spawn_interval_ms as f32, "spawn_interval_ms"),
                (cfg.gravity, "gravity"),
                (cfg.gap_size, "gap_size"),
            ] {
                if value <= 0.0 {
                    return Err(ConfigError::NonPositive { level, field });
                }
            }
            if cfg.gap_size + 2.0 * PIPE_MIN_HEIGHT > CANVAS_HEIGHT {
                return Err(ConfigError::GapTooLarge {
                    level,
                    gap: cfg.gap_size as u32,
                    canvas: CANVAS_HEIGHT as u32,
                });
            }
            if i > 0 && cfg.required_score < prev_score {
                return Err(ConfigError::NonMonotoneScore {
                    level,
                    score: cfg.required_score,
                    prev_level: level - 1,
                    prev_score,
                });
            }
            prev_score = cfg.required_score;
        }
        Ok(Self { levels })
    }

    /// Load a table from a JSON array of level configs
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let levels: Vec<LevelConfig> = serde_json::from_str(json)?;
        Ok(Self::new(levels)?)
    }

    /// Config for a 1-based level number, clamped to the final level
    pub fn get(&self, level: u32) -> &LevelConfig {
        let idx = (level.max(1) as usize - 1).min(self.levels.len() - 1);
        &self.levels[idx]
    }

    /// Highest level number in the table
    pub fn max_level(&self) -> u32 {
        self.levels.len() as u32
    }
}

impl Default for LevelTable {
    /// The reference 5-level difficulty ramp
    fn default() -> Self {
        let levels = vec![
            LevelConfig {
                pipe_speed: 2.0,
                spawn_interval_ms: 2000.0,
                gravity: 0.25,
                gap_size: 250.0,
                required_score: 5,
                oscillation: 0.0,
            },
            LevelConfig {
                pipe_speed: 3.0,
                spawn_interval_ms: 1800.0,
                gravity: 0.30,
                gap_size: 225.0,
                required_score: 10,
                oscillation: 0.0,
            },
            LevelConfig {
                pipe_speed: 4.0,
                spawn_interval_ms: 1600.0,
                gravity: 0.35,
                gap_size: 200.0,
                required_score: 15,
                oscillation: 0.5,
            },
            LevelConfig {
                pipe_speed: 5.0,
                spawn_interval_ms: 1400.0,
                gravity: 0.40,
                gap_size: 175.0,
                required_score: 20,
                oscillation: 1.0,
            },
            LevelConfig {
                pipe_speed: 6.0,
                spawn_interval_ms: 1200.0,
                gravity: 0.45,
                gap_size: 150.0,
                required_score: 25,
                oscillation: 1.5,
            },
        ];
        Self::new(levels).expect("default level table is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_level(required_score: u32) -> LevelConfig {
        LevelConfig {
            pipe_speed: 2.0,
            spawn_interval_ms: 2000.0,
            gravity: 0.25,
            gap_size: 250.0,
            required_score,
            oscillation: 0.0,
        }
    }

    #[test]
    fn test_default_table_is_valid() {
        let table = LevelTable::default();
        assert_eq!(table.max_level(), 5);
        assert_eq!(table.get(1).required_score, 5);
        assert_eq!(table.get(5).required_score, 25);
        // Out-of-range levels clamp to the final entry
        assert_eq!(table.get(9).required_score, 25);
        assert_eq!(table.get(0).required_score, 5);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(LevelTable::new(vec![]).unwrap_err(), ConfigError::Empty);
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        let mut cfg = one_level(5);
        cfg.pipe_speed = 0.0;
        assert_eq!(
            LevelTable::new(vec![cfg]).unwrap_err(),
            ConfigError::NonPositive {
                level: 1,
                field: "pipe_speed"
            }
        );
    }

    #[test]
    fn test_oversized_gap_rejected() {
        let mut cfg = one_level(5);
        cfg.gap_size = 790.0;
        assert!(matches!(
            LevelTable::new(vec![cfg]).unwrap_err(),
            ConfigError::GapTooLarge { level: 1, .. }
        ));
    }

    #[test]
    fn test_non_monotone_scores_rejected() {
        let err = LevelTable::new(vec![one_level(10), one_level(5)]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonMonotoneScore {
                level: 2,
                score: 5,
                prev_level: 1,
                prev_score: 10,
            }
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{
            "pipe_speed": 2.0,
            "spawn_interval_ms": 2000.0,
            "gravity": 0.25,
            "gap_size": 250.0,
            "required_score": 5,
            "oscillation": 0.0
        }]"#;
        let table = LevelTable::from_json(json).unwrap();
        assert_eq!(table.max_level(), 1);
    }
}
