//! Benchmarks for battle resolution and mission checks.
//!
//! These are the operations run after every attack in a session.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use conquest::game::{Mission, Registry, Territory, resolve_battle};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn world(troops: u32) -> Registry {
    let colors = ["Red", "Blue", "Green", "Yellow", "Black"];
    let territories = colors
        .iter()
        .enumerate()
        .map(|(i, color)| Territory::new(&format!("Land {}", i + 1), color, troops))
        .collect();
    Registry::from_territories(territories).unwrap()
}

fn bench_single_battle(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("single_battle", |b| {
        b.iter_batched(
            || world(10),
            |mut registry| {
                let report = resolve_battle(&mut registry, black_box(0), black_box(1), &mut rng);
                black_box(report)
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_mission_checks(c: &mut Criterion) {
    let registry = world(3);
    let missions = [
        Mission::EliminateOwner {
            owner: "Green".to_string(),
        },
        Mission::ConquerTerritory {
            name: "Land 4".to_string(),
        },
        Mission::ConquerCount { required: 2 },
    ];

    c.bench_function("mission_checks", |b| {
        b.iter(|| {
            for mission in &missions {
                black_box(mission.is_satisfied(black_box(&registry)));
            }
        });
    });
}

fn bench_duel_to_the_end(c: &mut Criterion) {
    c.bench_function("duel_100_troops", |b| {
        b.iter(|| {
            let mut registry = world(100);
            let mut rng = ChaCha8Rng::seed_from_u64(black_box(7));
            while resolve_battle(&mut registry, 0, 1, &mut rng).is_ok() {}
            black_box(registry)
        });
    });
}

criterion_group!(
    benches,
    bench_single_battle,
    bench_mission_checks,
    bench_duel_to_the_end
);
criterion_main!(benches);
