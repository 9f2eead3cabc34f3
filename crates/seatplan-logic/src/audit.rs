//! Invariant audit for seating results.
//!
//! Checks a chart (or any layout + passenger list) for the properties every
//! successful run must have: each passenger seated exactly once in a seat of
//! their class, no shared seats, arrival order respected and the first-class
//! cap held. Used by the harness to sweep many seeds.

use std::collections::HashMap;

use thiserror::Error;

use crate::assignment::SeatingChart;
use crate::cabin::{CabinClass, CabinLayout, SeatId};
use crate::passengers::{Passenger, PassengerId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditViolation {
    #[error("passenger {0} has no seat")]
    Unassigned(PassengerId),
    #[error("passenger {passenger_id} sits in seat {seat_id}, which does not exist")]
    UnknownSeat {
        passenger_id: PassengerId,
        seat_id: SeatId,
    },
    #[error("seat {seat_id} is shared by passengers {first} and {second}")]
    SharedSeat {
        seat_id: SeatId,
        first: PassengerId,
        second: PassengerId,
    },
    #[error("passenger {passenger_id} wants {wanted} but sits in {got} seat {seat_id}")]
    ClassMismatch {
        passenger_id: PassengerId,
        seat_id: SeatId,
        wanted: CabinClass,
        got: CabinClass,
    },
    #[error("seat {0} is marked occupied but nobody sits there")]
    PhantomOccupancy(SeatId),
    #[error("passenger {later} was seated after passenger {earlier} despite arriving earlier or tying with a lower id")]
    OutOfOrder {
        earlier: PassengerId,
        later: PassengerId,
    },
    #[error("{count} passengers prefer first class, cap is {cap}")]
    FirstClassCapExceeded { count: usize, cap: usize },
}

pub fn audit_chart(chart: &SeatingChart) -> Vec<AuditViolation> {
    audit_assignment(chart.layout(), chart.passengers())
}

/// Audit `passengers` (in processing order) against `layout`.
pub fn audit_assignment(layout: &CabinLayout, passengers: &[Passenger]) -> Vec<AuditViolation> {
    let mut violations = Vec::new();
    let mut seated: HashMap<SeatId, PassengerId> = HashMap::new();

    for p in passengers {
        let Some(seat_id) = p.assigned_seat else {
            violations.push(AuditViolation::Unassigned(p.id));
            continue;
        };
        let Some(seat) = layout.seat(seat_id) else {
            violations.push(AuditViolation::UnknownSeat {
                passenger_id: p.id,
                seat_id,
            });
            continue;
        };
        if let Some(&first) = seated.get(&seat_id) {
            violations.push(AuditViolation::SharedSeat {
                seat_id,
                first,
                second: p.id,
            });
        } else {
            seated.insert(seat_id, p.id);
        }
        if seat.cabin_class != p.preferred_class {
            violations.push(AuditViolation::ClassMismatch {
                passenger_id: p.id,
                seat_id,
                wanted: p.preferred_class,
                got: seat.cabin_class,
            });
        }
    }

    for seat in layout.seats() {
        if seat.occupied && !seated.contains_key(&seat.id) {
            violations.push(AuditViolation::PhantomOccupancy(seat.id));
        }
    }

    for pair in passengers.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if (b.arrival_time, b.id) < (a.arrival_time, a.id) {
            violations.push(AuditViolation::OutOfOrder {
                earlier: b.id,
                later: a.id,
            });
        }
    }

    let first_class = passengers
        .iter()
        .filter(|p| p.preferred_class == CabinClass::First)
        .count();
    if first_class > layout.first_class_count() {
        violations.push(AuditViolation::FirstClassCapExceeded {
            count: first_class,
            cap: layout.first_class_count(),
        });
    }

    violations
}
