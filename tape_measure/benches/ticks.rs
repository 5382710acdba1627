// Copyright 2025 the Tape Measure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation throughput while scrolling.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tape_measure::{Anchor, AxisConfig, Direction, ValueClip};

fn bench_ticks(c: &mut Criterion) {
    let mut g = c.benchmark_group("ticks");

    let tape = AxisConfig::new((0.0, 1920.0), 60.0, 2.5, 4, Direction::Ascending).unwrap();
    let thermometer = AxisConfig::new((-280.0, 280.0), 100.0, 36.0, 4, Direction::Ascending)
        .unwrap()
        .with_value_clip(ValueClip::between(32.0, 212.0))
        .unwrap()
        .with_value_origin_offset(-4.0);

    g.bench_function("tape_collect", |b| {
        b.iter(|| tape.ticks(black_box(Anchor::new(50.0, 149.9))));
    });

    g.bench_function("tape_scroll_frame", |b| {
        let mut position = 0.0;
        b.iter(|| {
            position += 0.37;
            tape.tick_iter(Anchor::new(50.0, black_box(position)))
                .map(|t| t.position)
                .sum::<f64>()
        });
    });

    g.bench_function("thermometer_clipped", |b| {
        b.iter(|| thermometer.ticks(black_box(Anchor::new(32.0, -280.0))));
    });

    g.finish();
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);
