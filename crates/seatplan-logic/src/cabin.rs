//! Cabin layout — the static seat topology of the aircraft.
//!
//! Seats are numbered from the nose back. The first `first_class_count` ids
//! form the first-class block (rows of 4, two either side of the aisle), the
//! rest form the economy block (rows of 6, three either side). Row and
//! in-row position are counted from the start of each block:
//!
//! ```text
//! First    position: 0   1 | 2   3        Economy  position: 0   1   2 | 3   4   5
//!                    W   A | A   W                           W   M   A | A   M   W
//! ```

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::constants::rows::{ECONOMY_ROW_SIZE, FIRST_ROW_SIZE};

/// Index of a seat in the cabin layout.
pub type SeatId = usize;

/// Cabin class of a seat or a passenger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CabinClass {
    #[default]
    Economy,
    First,
}

impl CabinClass {
    /// Seats per physical row in this class.
    pub fn row_size(self) -> usize {
        match self {
            CabinClass::First => FIRST_ROW_SIZE,
            CabinClass::Economy => ECONOMY_ROW_SIZE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CabinClass::First => "First",
            CabinClass::Economy => "Economy",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where in the row a seat sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatKind {
    Window,
    Aisle,
    /// Economy only: between a window and an aisle seat.
    Middle,
}

impl SeatKind {
    fn for_position(class: CabinClass, position: usize) -> Self {
        match (class, position) {
            (CabinClass::First, 0 | 3) => SeatKind::Window,
            (CabinClass::First, _) => SeatKind::Aisle,
            (CabinClass::Economy, 0 | 5) => SeatKind::Window,
            (CabinClass::Economy, 2 | 3) => SeatKind::Aisle,
            (CabinClass::Economy, _) => SeatKind::Middle,
        }
    }
}

/// A single seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub cabin_class: CabinClass,
    pub kind: SeatKind,
    /// Row number within the class block (0 = frontmost row of the block).
    pub row: usize,
    /// Position within the row, `0..cabin_class.row_size()`.
    pub position: usize,
    /// Set once when a passenger is seated; never cleared.
    pub occupied: bool,
}

impl Seat {
    pub fn is_window(&self) -> bool {
        self.kind == SeatKind::Window
    }

    pub fn is_aisle(&self) -> bool {
        self.kind == SeatKind::Aisle
    }
}

/// Seat topology for one aircraft. Only built through [`CabinLayout::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CabinLayout {
    seats: Vec<Seat>,
    first_class_count: usize,
}

impl CabinLayout {
    /// Build `total_seats` seats, the first `first_class_count` of them first
    /// class. A first-class count above `total_seats` is clamped to it.
    pub fn new(total_seats: usize, first_class_count: usize) -> Self {
        let first_class_count = first_class_count.min(total_seats);
        let mut seats = Vec::with_capacity(total_seats);

        for id in 0..total_seats {
            let (cabin_class, block_index) = if id < first_class_count {
                (CabinClass::First, id)
            } else {
                (CabinClass::Economy, id - first_class_count)
            };
            let row_size = cabin_class.row_size();
            let position = block_index % row_size;

            seats.push(Seat {
                id,
                cabin_class,
                kind: SeatKind::for_position(cabin_class, position),
                row: block_index / row_size,
                position,
                occupied: false,
            });
        }

        Self {
            seats,
            first_class_count,
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.get(id)
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn first_class_count(&self) -> usize {
        self.first_class_count
    }

    /// Seat ids belonging to a class block.
    pub fn class_range(&self, class: CabinClass) -> Range<SeatId> {
        let split = self.first_class_count.min(self.seats.len());
        match class {
            CabinClass::First => 0..split,
            CabinClass::Economy => split..self.seats.len(),
        }
    }

    /// Seats of one class, in ascending id order.
    pub fn seats_in(&self, class: CabinClass) -> &[Seat] {
        &self.seats[self.class_range(class)]
    }

    /// True if `id` exists and nobody sits there.
    pub fn is_free(&self, id: SeatId) -> bool {
        self.seats.get(id).is_some_and(|seat| !seat.occupied)
    }

    /// The seat `offset` places away from `seat`, if it lies in the same class block.
    pub fn block_neighbor(&self, seat: &Seat, offset: isize) -> Option<&Seat> {
        let id = seat.id.checked_add_signed(offset)?;
        if self.class_range(seat.cabin_class).contains(&id) {
            self.seats.get(id)
        } else {
            None
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.occupied).count()
    }

    /// Mark a seat as taken. Returns false if it was already occupied or does not exist.
    pub(crate) fn occupy(&mut self, id: SeatId) -> bool {
        match self.seats.get_mut(id) {
            Some(seat) if !seat.occupied => {
                seat.occupied = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cabin_partitions_by_class() {
        let layout = CabinLayout::new(159, 12);
        assert_eq!(layout.len(), 159);
        assert_eq!(layout.seats_in(CabinClass::First).len(), 12);
        assert_eq!(layout.seats_in(CabinClass::Economy).len(), 147);

        for (index, seat) in layout.seats().iter().enumerate() {
            assert_eq!(seat.id, index, "ids must be contiguous");
            let expected = if index < 12 {
                CabinClass::First
            } else {
                CabinClass::Economy
            };
            assert_eq!(seat.cabin_class, expected);
            assert!(!seat.occupied);
        }
    }

    #[test]
    fn first_class_row_kinds() {
        let layout = CabinLayout::new(159, 12);
        let kinds: Vec<SeatKind> = layout.seats()[..4].iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SeatKind::Window,
                SeatKind::Aisle,
                SeatKind::Aisle,
                SeatKind::Window
            ]
        );
        assert_eq!(layout.seats()[7].row, 1);
        assert_eq!(layout.seats()[7].position, 3);
    }

    #[test]
    fn economy_positions_count_from_block_start() {
        // Block starts at id 5, which is not a multiple of 6.
        let layout = CabinLayout::new(20, 5);
        let first_economy = &layout.seats()[5];
        assert_eq!(first_economy.position, 0);
        assert_eq!(first_economy.row, 0);
        assert_eq!(first_economy.kind, SeatKind::Window);

        let kinds: Vec<SeatKind> = layout.seats()[5..11].iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SeatKind::Window,
                SeatKind::Middle,
                SeatKind::Aisle,
                SeatKind::Aisle,
                SeatKind::Middle,
                SeatKind::Window
            ]
        );
    }

    #[test]
    fn window_and_aisle_are_exclusive() {
        let layout = CabinLayout::new(159, 12);
        for seat in layout.seats() {
            assert!(!(seat.is_window() && seat.is_aisle()));
            if seat.cabin_class == CabinClass::First {
                assert_ne!(seat.kind, SeatKind::Middle);
            }
        }
    }

    #[test]
    fn layout_is_pure() {
        assert_eq!(CabinLayout::new(159, 12), CabinLayout::new(159, 12));
        assert_eq!(CabinLayout::new(7, 3), CabinLayout::new(7, 3));
    }

    #[test]
    fn first_class_count_clamped() {
        let layout = CabinLayout::new(3, 10);
        assert_eq!(layout.first_class_count(), 3);
        assert!(layout.seats_in(CabinClass::Economy).is_empty());
    }

    #[test]
    fn class_slices_stay_in_bounds_when_count_exceeds_seats() {
        let layout = CabinLayout {
            seats: Vec::new(),
            first_class_count: 4,
        };
        assert!(layout.seats_in(CabinClass::First).is_empty());
        assert!(layout.seats_in(CabinClass::Economy).is_empty());
        assert_eq!(layout.class_range(CabinClass::First), 0..0);
    }

    #[test]
    fn neighbors_stay_inside_block() {
        let layout = CabinLayout::new(20, 5);
        // Seat 4 is the only seat of the second first-class row.
        let seat = &layout.seats()[4];
        assert!(layout.block_neighbor(seat, 1).is_none());
        assert_eq!(layout.block_neighbor(seat, -1).map(|s| s.id), Some(3));
        assert!(layout.block_neighbor(&layout.seats()[0], -1).is_none());
        assert!(layout.block_neighbor(&layout.seats()[19], 1).is_none());
    }

    #[test]
    fn occupy_only_once() {
        let mut layout = CabinLayout::new(12, 4);
        assert!(layout.is_free(2));
        assert!(layout.occupy(2));
        assert!(!layout.occupy(2));
        assert!(!layout.is_free(2));
        assert!(!layout.occupy(99));
        assert_eq!(layout.occupied_count(), 1);
    }
}
