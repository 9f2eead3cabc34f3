use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seatplan_logic::assignment::assign_seats;
use seatplan_logic::cabin::CabinLayout;
use seatplan_logic::config::SimulationConfig;
use seatplan_logic::passengers::generate_passengers;
use std::hint::black_box;

fn bench_assign(c: &mut Criterion) {
    let config = SimulationConfig::default();
    let mut group = c.benchmark_group("assign_seats");

    for count in [25usize, 100, 159] {
        // Enough first-class draws for a full cabin are not guaranteed, so
        // try seeds until one produces a seatable passenger list.
        let passengers = (0..64)
            .map(|seed| {
                generate_passengers(count, &config, &mut StdRng::seed_from_u64(seed))
                    .expect("count within capacity")
            })
            .find(|ps| {
                assign_seats(
                    ps.clone(),
                    CabinLayout::new(config.total_seats, config.first_class_count),
                )
                .is_ok()
            });
        let Some(passengers) = passengers else {
            continue;
        };

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &passengers, |b, ps| {
            b.iter(|| {
                let layout = CabinLayout::new(config.total_seats, config.first_class_count);
                black_box(assign_seats(black_box(ps.clone()), layout))
            })
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    c.bench_function("cabin_layout_default", |b| {
        b.iter(|| CabinLayout::new(black_box(159), black_box(12)))
    });
}

criterion_group!(benches, bench_assign, bench_layout);
criterion_main!(benches);
