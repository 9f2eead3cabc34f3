//! Run configuration — cabin size, class split, arrival window, seed.
//!
//! A [`SimulationConfig`] fully determines a run when `seed` is set. The
//! defaults come from [`crate::constants`]; any subset of fields can be
//! overridden from a TOML document:
//!
//! ```
//! use seatplan_logic::config::{validate_config, SimulationConfig};
//!
//! let config = SimulationConfig::from_toml_str("passenger_count = 40\nseed = 7").unwrap();
//! assert_eq!(config.passenger_count, 40);
//! assert_eq!(config.total_seats, 159);
//! assert!(validate_config(&config).is_empty());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_FIRST_CLASS_COUNT, DEFAULT_MAX_ARRIVAL_TIME, DEFAULT_PASSENGER_COUNT,
    DEFAULT_TOTAL_SEATS,
};
use crate::error::{Result, SeatingError};

/// Parameters for one seating run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seats in the aircraft, first class included.
    pub total_seats: usize,
    /// Seats in the first-class block at the front of the cabin.
    pub first_class_count: usize,
    /// Exclusive upper bound for arrival times; draws fall in `1..max_arrival_time`.
    pub max_arrival_time: u32,
    /// Passengers to generate and seat.
    pub passenger_count: usize,
    /// Random seed (None = seed from system entropy).
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_seats: DEFAULT_TOTAL_SEATS,
            first_class_count: DEFAULT_FIRST_CLASS_COUNT,
            max_arrival_time: DEFAULT_MAX_ARRIVAL_TIME,
            passenger_count: DEFAULT_PASSENGER_COUNT,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Seats in the economy block.
    pub fn economy_count(&self) -> usize {
        self.total_seats.saturating_sub(self.first_class_count)
    }

    /// Validate and convert the error list into a [`SeatingError`].
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = validate_config(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SeatingError::InvalidConfig(errors))
        }
    }
}

/// Configuration validation error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the cabin needs at least one seat")]
    NoSeats,
    /// First-class block larger than the whole cabin.
    #[error("first class count {first_class} exceeds total seats {total}")]
    FirstClassExceedsTotal { first_class: usize, total: usize },
    /// `1..max_arrival_time` would be empty.
    #[error("max arrival time must be at least 2, got {0}")]
    ArrivalWindowEmpty(u32),
}

/// Validate a run configuration, returning all errors found.
///
/// `passenger_count` is checked later by passenger generation, which
/// reports [`SeatingError::InvalidRequest`].
pub fn validate_config(config: &SimulationConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.total_seats == 0 {
        errors.push(ConfigError::NoSeats);
    }
    if config.first_class_count > config.total_seats {
        errors.push(ConfigError::FirstClassExceedsTotal {
            first_class: config.first_class_count,
            total: config.total_seats,
        });
    }
    if config.max_arrival_time < 2 {
        errors.push(ConfigError::ArrivalWindowEmpty(config.max_arrival_time));
    }

    errors
}
