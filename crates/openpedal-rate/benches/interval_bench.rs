//! Benchmarks for the intensity-to-interval mapping hot path.

use criterion::{Criterion, criterion_group, criterion_main};
use openpedal_rate::repeat_interval;
use std::hint::black_box;

fn bench_repeat_interval(c: &mut Criterion) {
    c.bench_function("repeat_interval_sweep", |b| {
        b.iter(|| {
            for intensity in 0u8..=100 {
                black_box(repeat_interval(black_box(intensity)));
            }
        });
    });

    c.bench_function("repeat_interval_single", |b| {
        b.iter(|| repeat_interval(black_box(63)));
    });
}

criterion_group!(benches, bench_repeat_interval);
criterion_main!(benches);
