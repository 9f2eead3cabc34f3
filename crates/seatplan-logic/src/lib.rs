//! Pure seat assignment logic for SeatPlan.
//!
//! This crate models seating an aircraft: it lays out the cabin, draws a
//! stream of passengers with class and seat preferences, and seats them one
//! by one with a weighted greedy heuristic. Functions take plain data and
//! return results; nothing here renders or owns a window, so the output can
//! be handed to any front end as a list of `(passenger, seat, class)`
//! triples.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`assignment`] | Seat scoring, greedy selection, the finished [`SeatingChart`] |
//! | [`audit`] | Invariant checks over a finished chart |
//! | [`cabin`] | Seat topology: classes, rows, window/aisle/middle |
//! | [`config`] | Run configuration, TOML loading, validation |
//! | [`constants`] | Default cabin size, row geometry, scoring weights |
//! | [`error`] | The [`SeatingError`] type |
//! | [`passengers`] | Passenger data and seeded generation |
//! | [`report`] | Occupancy and preference statistics |
//! | [`simulation`] | One end-to-end run from a config |
//!
//! ```
//! use seatplan_logic::config::SimulationConfig;
//! use seatplan_logic::simulation::run_simulation;
//!
//! let config = SimulationConfig { seed: Some(42), ..Default::default() };
//! let chart = run_simulation(&config).unwrap();
//! assert_eq!(chart.assignments().len(), config.passenger_count);
//! ```

pub mod assignment;
pub mod audit;
pub mod cabin;
pub mod config;
pub mod constants;
pub mod error;
pub mod passengers;
pub mod report;
pub mod simulation;

pub use assignment::{assign_seats, SeatAssignment, SeatingChart};
pub use cabin::{CabinClass, CabinLayout, Seat, SeatId, SeatKind};
pub use config::SimulationConfig;
pub use error::{Result, SeatingError};
pub use passengers::{Passenger, PassengerGenerator, PassengerId, SeatPreference};
