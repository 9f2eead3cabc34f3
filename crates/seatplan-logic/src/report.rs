//! Seating report — occupancy and preference statistics for a finished run.

use serde::{Deserialize, Serialize};

use crate::assignment::{SeatAssignment, SeatingChart};
use crate::cabin::CabinClass;
use crate::passengers::{PassengerId, SeatPreference};

/// Seats and passengers of one cabin class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassOccupancy {
    pub class: CabinClass,
    pub seats: usize,
    pub occupied: usize,
    pub passengers: usize,
}

impl ClassOccupancy {
    /// Fraction of the class block that is occupied, 0.0–1.0.
    pub fn load_factor(&self) -> f64 {
        if self.seats == 0 {
            0.0
        } else {
            self.occupied as f64 / self.seats as f64
        }
    }
}

/// How many passengers asked for a seat kind and how many got it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceStats {
    pub requested: usize,
    pub satisfied: usize,
}

/// Derived, read-only summary of a [`SeatingChart`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingReport {
    pub total_seats: usize,
    pub total_passengers: usize,
    pub classes: Vec<ClassOccupancy>,
    pub window: PreferenceStats,
    pub aisle: PreferenceStats,
    /// Passenger ids in the order they were seated.
    pub processing_order: Vec<PassengerId>,
    pub assignments: Vec<SeatAssignment>,
}

impl SeatingReport {
    pub fn class(&self, class: CabinClass) -> Option<&ClassOccupancy> {
        self.classes.iter().find(|c| c.class == class)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn build_report(chart: &SeatingChart) -> SeatingReport {
    let layout = chart.layout();
    let passengers = chart.passengers();

    let classes = [CabinClass::First, CabinClass::Economy]
        .into_iter()
        .map(|class| {
            let seats = layout.seats_in(class);
            ClassOccupancy {
                class,
                seats: seats.len(),
                occupied: seats.iter().filter(|s| s.occupied).count(),
                passengers: passengers
                    .iter()
                    .filter(|p| p.preferred_class == class)
                    .count(),
            }
        })
        .collect();

    let mut window = PreferenceStats::default();
    let mut aisle = PreferenceStats::default();
    for p in passengers {
        let seat = p.assigned_seat.and_then(|id| layout.seat(id));
        match p.preference {
            SeatPreference::Window => {
                window.requested += 1;
                if seat.is_some_and(|s| s.is_window()) {
                    window.satisfied += 1;
                }
            }
            SeatPreference::Aisle => {
                aisle.requested += 1;
                if seat.is_some_and(|s| s.is_aisle()) {
                    aisle.satisfied += 1;
                }
            }
            SeatPreference::NoPreference => {}
        }
    }

    SeatingReport {
        total_seats: layout.len(),
        total_passengers: passengers.len(),
        classes,
        window,
        aisle,
        processing_order: passengers.iter().map(|p| p.id).collect(),
        assignments: chart.assignments(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::assign_seats;
    use crate::cabin::CabinLayout;
    use crate::passengers::Passenger;

    #[test]
    fn counts_classes_and_preferences() {
        let layout = CabinLayout::new(12, 4);
        let passengers = vec![
            Passenger::new(0)
                .with_class(CabinClass::First)
                .with_preference(SeatPreference::Window),
            Passenger::new(1).with_preference(SeatPreference::Aisle),
            Passenger::new(2),
        ];
        let chart = assign_seats(passengers, layout).unwrap();
        let report = build_report(&chart);

        assert_eq!(report.total_seats, 12);
        assert_eq!(report.total_passengers, 3);
        let first = report.class(CabinClass::First).unwrap();
        assert_eq!((first.seats, first.occupied, first.passengers), (4, 1, 1));
        let economy = report.class(CabinClass::Economy).unwrap();
        assert_eq!((economy.seats, economy.occupied, economy.passengers), (8, 2, 2));
        assert_eq!(report.window, PreferenceStats { requested: 1, satisfied: 1 });
        assert_eq!(report.aisle, PreferenceStats { requested: 1, satisfied: 1 });
        assert_eq!(report.processing_order, vec![0, 1, 2]);
        assert_eq!(report.assignments.len(), 3);
    }

    #[test]
    fn load_factor_of_empty_class_is_zero() {
        let occupancy = ClassOccupancy {
            class: CabinClass::First,
            seats: 0,
            occupied: 0,
            passengers: 0,
        };
        assert_eq!(occupancy.load_factor(), 0.0);
    }

    #[test]
    fn report_serializes_to_json() {
        let chart = assign_seats(vec![Passenger::new(0)], CabinLayout::new(6, 0)).unwrap();
        let json = build_report(&chart).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_passengers"], 1);
        assert_eq!(value["assignments"][0]["cabin_class"], "Economy");
    }
}
