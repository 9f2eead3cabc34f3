//! Cabin and scoring constants — seat counts, row geometry, weights.
//!
//! Plain integer constants with no runtime dependency. The defaults model a
//! Boeing 737-800 style cabin: three rows of first class up front and a long
//! economy section behind it.

/// Default number of seats in the aircraft.
pub const DEFAULT_TOTAL_SEATS: usize = 159;
/// Default number of first-class seats (ids `0..DEFAULT_FIRST_CLASS_COUNT`).
pub const DEFAULT_FIRST_CLASS_COUNT: usize = 12;
/// Default exclusive upper bound for passenger arrival times.
pub const DEFAULT_MAX_ARRIVAL_TIME: u32 = 62;
/// Default number of passengers requested per run.
pub const DEFAULT_PASSENGER_COUNT: usize = 100;

pub mod rows {
    /// Seats per first-class row (2 + 2).
    pub const FIRST_ROW_SIZE: usize = 4;
    /// Seats per economy row (3 + 3).
    pub const ECONOMY_ROW_SIZE: usize = 6;
}

pub mod weights {
    /// Seat type matches the passenger's window/aisle preference.
    pub const PREFERENCE_MATCH: i32 = 10;
    /// Single row neighbour (edge/aisle seats), added if free, subtracted if taken.
    pub const SINGLE_NEIGHBOR: i32 = 2;
    /// Each of the two neighbours of a middle seat.
    pub const MIDDLE_NEIGHBOR: i32 = 1;
    /// Free seat directly in front of or behind.
    pub const FRONT_BEHIND_FREE: i32 = 1;
}
