//! Greedy seat assignment — scores every seat for each passenger in arrival
//! order and seats them in the best free seat of their class.
//!
//! Scoring for passenger `p` and seat `s` (all seats are scored, the class
//! filter is applied at selection time):
//!
//! | Rule | Weight |
//! |------|--------|
//! | window/aisle preference met | +10 |
//! | single row neighbour (window and aisle seats) | +2 free / −2 taken |
//! | each neighbour of an economy middle seat | +1 free / −1 taken |
//! | seat one row behind free, while still inside the block | +1 |
//! | seat one row ahead free, when its id is past the block start | +1 |
//!
//! The row-ahead check uses `id - row_size > block_start`, so the first seat
//! of each block's second row never gets that bonus. Highest score wins,
//! ties go to the lowest seat id.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cabin::{CabinClass, CabinLayout, Seat, SeatId};
use crate::constants::weights::{
    FRONT_BEHIND_FREE, MIDDLE_NEIGHBOR, PREFERENCE_MATCH, SINGLE_NEIGHBOR,
};
use crate::error::{Result, SeatingError};
use crate::passengers::{Passenger, PassengerId};

/// One line of the output mapping consumed by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub passenger_id: PassengerId,
    pub seat_id: SeatId,
    pub cabin_class: CabinClass,
}

/// Result of a completed run: the occupied cabin and the seated passengers
/// in the order they were processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatingChart {
    layout: CabinLayout,
    passengers: Vec<Passenger>,
}

impl SeatingChart {
    pub fn layout(&self) -> &CabinLayout {
        &self.layout
    }

    /// Passengers in processing (arrival) order.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// `(passenger, seat, class)` triples in processing order.
    pub fn assignments(&self) -> Vec<SeatAssignment> {
        self.passengers
            .iter()
            .filter_map(|p| {
                let seat_id = p.assigned_seat?;
                let seat = self.layout.seat(seat_id)?;
                Some(SeatAssignment {
                    passenger_id: p.id,
                    seat_id,
                    cabin_class: seat.cabin_class,
                })
            })
            .collect()
    }

    pub fn seat_of(&self, passenger_id: PassengerId) -> Option<SeatId> {
        self.passengers
            .iter()
            .find(|p| p.id == passenger_id)
            .and_then(|p| p.assigned_seat)
    }

    pub fn into_parts(self) -> (CabinLayout, Vec<Passenger>) {
        (self.layout, self.passengers)
    }
}

/// Score a seat for a passenger against the current occupancy.
pub fn score_seat(layout: &CabinLayout, seat: &Seat, passenger: &Passenger) -> i32 {
    let mut score = 0;

    if passenger.wants_window() && seat.is_window() {
        score += PREFERENCE_MATCH;
    }
    if passenger.wants_aisle() && seat.is_aisle() {
        score += PREFERENCE_MATCH;
    }

    score += row_neighbor_score(layout, seat);
    score += front_behind_score(layout, seat);
    score
}

fn row_neighbor_score(layout: &CabinLayout, seat: &Seat) -> i32 {
    let neighbor = |offset: isize, weight: i32| match layout.block_neighbor(seat, offset) {
        Some(other) if other.occupied => -weight,
        Some(_) => weight,
        None => 0,
    };

    match (seat.cabin_class, seat.position) {
        (CabinClass::First, 0 | 2) => neighbor(1, SINGLE_NEIGHBOR),
        (CabinClass::First, _) => neighbor(-1, SINGLE_NEIGHBOR),
        (CabinClass::Economy, 0 | 3) => neighbor(1, SINGLE_NEIGHBOR),
        (CabinClass::Economy, 2 | 5) => neighbor(-1, SINGLE_NEIGHBOR),
        (CabinClass::Economy, _) => {
            neighbor(-1, MIDDLE_NEIGHBOR) + neighbor(1, MIDDLE_NEIGHBOR)
        }
    }
}

fn front_behind_score(layout: &CabinLayout, seat: &Seat) -> i32 {
    let offset = seat.cabin_class.row_size();
    let block = layout.class_range(seat.cabin_class);
    let mut score = 0;

    let behind = seat.id + offset;
    if behind < block.end && layout.is_free(behind) {
        score += FRONT_BEHIND_FREE;
    }
    if let Some(ahead) = seat.id.checked_sub(offset) {
        if ahead > block.start && layout.is_free(ahead) {
            score += FRONT_BEHIND_FREE;
        }
    }

    score
}

/// Pick the best free seat of `class` given per-seat scores.
/// Returns the lowest id among equal maxima.
fn select_seat(layout: &CabinLayout, class: CabinClass, scores: &[i32]) -> Option<SeatId> {
    let mut best: Option<(SeatId, i32)> = None;
    for seat in layout.seats_in(class).iter().filter(|s| !s.occupied) {
        let score = scores[seat.id];
        // strict > keeps the earlier (lower) id on ties
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((seat.id, score));
        }
    }
    best.map(|(id, _)| id)
}

/// Seat every passenger in arrival order, ties broken by passenger id.
///
/// Takes ownership of both collections. On any error nothing is returned,
/// so a failed run never leaves a partially seated cabin behind.
pub fn assign_seats(mut passengers: Vec<Passenger>, mut layout: CabinLayout) -> Result<SeatingChart> {
    if passengers.len() > layout.len() {
        return Err(SeatingError::CapacityExceeded {
            passengers: passengers.len(),
            seats: layout.len(),
        });
    }

    passengers.sort_by_key(|p| (p.arrival_time, p.id));

    for passenger in &mut passengers {
        let scores: Vec<i32> = layout
            .seats()
            .iter()
            .map(|seat| score_seat(&layout, seat, &*passenger))
            .collect();

        let Some(seat_id) = select_seat(&layout, passenger.preferred_class, &scores) else {
            warn!(
                passenger = passenger.id,
                class = %passenger.preferred_class,
                "no seat left in class"
            );
            return Err(SeatingError::NoSeatAvailable {
                passenger_id: passenger.id,
                class: passenger.preferred_class,
            });
        };

        layout.occupy(seat_id);
        passenger.assigned_seat = Some(seat_id);
        debug!(
            passenger = passenger.id,
            seat = seat_id,
            score = scores[seat_id],
            "seat assigned"
        );
    }

    Ok(SeatingChart { layout, passengers })
}
