//! Benchmarks for the rosary simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use rosary::{Rosary, SimConfig, Surface};

fn bench_step_with_collision(c: &mut Criterion) {
    c.bench_function("rosary_step_collision_60_steps", |b| {
        b.iter(|| {
            let mut rosary: Rosary<f32> =
                Rosary::new(Surface::new(600.0, 640.0), SimConfig::new()).unwrap();
            rosary.toggle_pin(27).unwrap();
            for _ in 0..60 {
                rosary.step(1.0 / 60.0);
            }
            rosary.graph().positions()
        });
    });
}

fn bench_step_without_collision(c: &mut Criterion) {
    c.bench_function("rosary_step_no_collision_60_steps", |b| {
        b.iter(|| {
            let mut rosary: Rosary<f32> = Rosary::new(
                Surface::new(600.0, 640.0),
                SimConfig::new().with_collision(false),
            )
            .unwrap();
            rosary.toggle_pin(27).unwrap();
            for _ in 0..60 {
                rosary.step(1.0 / 60.0);
            }
            rosary.graph().positions()
        });
    });
}

fn bench_rebuild(c: &mut Criterion) {
    c.bench_function("rosary_resize_rebuild", |b| {
        let mut rosary: Rosary<f32> =
            Rosary::new(Surface::new(600.0, 640.0), SimConfig::new()).unwrap();
        let mut wide = false;
        b.iter(|| {
            wide = !wide;
            let size = if wide { Surface::new(300.0, 320.0) } else { Surface::new(600.0, 640.0) };
            rosary.resize(size)
        });
    });
}

criterion_group!(benches, bench_step_with_collision, bench_step_without_collision, bench_rebuild);
criterion_main!(benches);
