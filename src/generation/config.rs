use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid room range: min_rooms={min}, max_rooms={max} (need 1 <= min <= max)")]
    InvalidRange { min: u32, max: u32 },
    #[error("branch probability must be within [0, 1], got {0}")]
    InvalidProbability(f32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Path generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub min_rooms: u32,
    pub max_rooms: u32,
    /// Reserved for branching generation
    pub branch_probability: f32,
    /// 0 disables forced MiniBoss rooms
    pub mini_boss_interval: u32,
    /// Reserved
    pub guaranteed_shops: u32,
    /// Reserved
    pub guaranteed_fountains: u32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            min_rooms: DEFAULT_MIN_ROOMS,
            max_rooms: DEFAULT_MAX_ROOMS,
            branch_probability: DEFAULT_BRANCH_PROBABILITY,
            mini_boss_interval: DEFAULT_MINI_BOSS_INTERVAL,
            guaranteed_shops: DEFAULT_GUARANTEED_SHOPS,
            guaranteed_fountains: DEFAULT_GUARANTEED_FOUNTAINS,
        }
    }
}

impl PathConfig {
    /// Fixed-length run with the default room rules
    pub fn with_room_count(count: u32) -> Self {
        Self {
            min_rooms: count,
            max_rooms: count,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_rooms == 0 || self.min_rooms > self.max_rooms {
            return Err(ConfigError::InvalidRange {
                min: self.min_rooms,
                max: self.max_rooms,
            });
        }
        if !(0.0..=1.0).contains(&self.branch_probability) {
            return Err(ConfigError::InvalidProbability(self.branch_probability));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from disk: RON for `.ron` files, JSON otherwise
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("ron") => Self::from_ron(&contents),
            _ => Self::from_json(&contents),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
