//! One seating run end to end: layout, passengers, assignment.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, info_span};

use crate::assignment::{assign_seats, SeatingChart};
use crate::cabin::CabinLayout;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::passengers::PassengerGenerator;

/// Build the run's random stream: seeded when `config.seed` is set,
/// from system entropy otherwise.
pub fn make_rng(config: &SimulationConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run a full simulation with the configured seed.
pub fn run_simulation(config: &SimulationConfig) -> Result<SeatingChart> {
    let mut rng = make_rng(config);
    run_with_rng(config, &mut rng)
}

/// Run a full simulation drawing from `rng`.
pub fn run_with_rng(config: &SimulationConfig, rng: &mut impl Rng) -> Result<SeatingChart> {
    let span = info_span!(
        "seating_run",
        passengers = config.passenger_count,
        seats = config.total_seats,
        seed = ?config.seed
    );
    let _guard = span.enter();

    let generator = PassengerGenerator::new(config)?;
    let layout = CabinLayout::new(config.total_seats, config.first_class_count);
    let passengers = generator.generate(config.passenger_count, rng)?;
    info!(count = passengers.len(), "passengers generated");

    let chart = assign_seats(passengers, layout)?;
    info!(
        occupied = chart.layout().occupied_count(),
        "seat assignment complete"
    );
    Ok(chart)
}
