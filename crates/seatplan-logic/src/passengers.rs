//! Passenger generation — random class, seat preference and arrival time.
//!
//! Passengers are drawn in id order and then stably sorted by arrival time,
//! so passengers who arrive together keep their id order. That order is the
//! order in which the assigner seats them.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cabin::{CabinClass, SeatId};
use crate::config::SimulationConfig;
use crate::error::{Result, SeatingError};

/// Generation-order index of a passenger.
pub type PassengerId = usize;

/// Kind of seat a passenger would like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatPreference {
    Window,
    Aisle,
    #[default]
    NoPreference,
}

impl SeatPreference {
    /// Uniform three-way draw.
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => SeatPreference::Window,
            1 => SeatPreference::Aisle,
            _ => SeatPreference::NoPreference,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: PassengerId,
    pub preferred_class: CabinClass,
    pub preference: SeatPreference,
    /// Check-in time, `1..max_arrival_time`.
    pub arrival_time: u32,
    pub assigned_seat: Option<SeatId>,
}

impl Passenger {
    /// Economy passenger with no preference, arriving at time 1.
    pub fn new(id: PassengerId) -> Self {
        Self {
            id,
            preferred_class: CabinClass::Economy,
            preference: SeatPreference::NoPreference,
            arrival_time: 1,
            assigned_seat: None,
        }
    }

    pub fn with_class(mut self, class: CabinClass) -> Self {
        self.preferred_class = class;
        self
    }

    pub fn with_preference(mut self, preference: SeatPreference) -> Self {
        self.preference = preference;
        self
    }

    pub fn with_arrival(mut self, arrival_time: u32) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    pub fn wants_window(&self) -> bool {
        self.preference == SeatPreference::Window
    }

    pub fn wants_aisle(&self) -> bool {
        self.preference == SeatPreference::Aisle
    }
}

/// Draws passengers for a cabin of a given size.
#[derive(Debug, Clone)]
pub struct PassengerGenerator {
    total_seats: usize,
    first_class_count: usize,
    max_arrival_time: u32,
}

impl PassengerGenerator {
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.ensure_valid()?;
        Ok(Self {
            total_seats: config.total_seats,
            first_class_count: config.first_class_count,
            max_arrival_time: config.max_arrival_time,
        })
    }

    /// Generate `count` passengers sorted by arrival time (stable).
    ///
    /// At most `first_class_count` passengers prefer first class: each
    /// passenger gets a coin flip for first class only while first-class
    /// grants remain, everyone after that flies economy.
    pub fn generate(&self, count: usize, rng: &mut impl Rng) -> Result<Vec<Passenger>> {
        if count > self.total_seats {
            return Err(SeatingError::InvalidRequest {
                requested: count,
                total_seats: self.total_seats,
            });
        }

        let mut passengers = Vec::with_capacity(count);
        let mut first_class_granted = 0;

        for id in 0..count {
            let mut passenger = Passenger::new(id);

            if first_class_granted < self.first_class_count && rng.gen_bool(0.5) {
                passenger.preferred_class = CabinClass::First;
                first_class_granted += 1;
            }
            passenger.preference = SeatPreference::random(rng);
            passenger.arrival_time = rng.gen_range(1..self.max_arrival_time);

            passengers.push(passenger);
        }

        // sort_by_key is stable: equal arrival times keep id order
        passengers.sort_by_key(|p| p.arrival_time);

        debug!(
            count,
            first_class = first_class_granted,
            "generated passengers"
        );
        Ok(passengers)
    }
}

/// Convenience wrapper around [`PassengerGenerator`].
pub fn generate_passengers(
    count: usize,
    config: &SimulationConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Passenger>> {
    PassengerGenerator::new(config)?.generate(count, rng)
}
