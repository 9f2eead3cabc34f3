//! Error type shared by every stage of a seating run.

use thiserror::Error;

use crate::cabin::CabinClass;
use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum SeatingError {
    /// More passengers requested than the aircraft has seats.
    #[error("requested {requested} passengers but the cabin only has {total_seats} seats")]
    InvalidRequest { requested: usize, total_seats: usize },

    #[error("{passengers} passengers cannot be seated in {seats} seats")]
    CapacityExceeded { passengers: usize, seats: usize },

    /// Every seat of the passenger's class is already taken.
    #[error("no {class} seat left for passenger {passenger_id}")]
    NoSeatAvailable {
        passenger_id: usize,
        class: CabinClass,
    },

    #[error("invalid configuration: {}", format_config_errors(.0))]
    InvalidConfig(Vec<ConfigError>),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_config_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, SeatingError>;
