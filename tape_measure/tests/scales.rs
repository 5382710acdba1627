// Copyright 2025 the Tape Measure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll scenarios for ascending scales, checked at a few anchors each.

use tape_measure::{Anchor, AxisConfig, Direction, Tick, ValueClip};

const ACCURACY: f64 = 0.001;

#[track_caller]
fn assert_tick(tick: &Tick, segment_tick_index: u32, position: f64, value: f64) {
    assert_eq!(tick.segment_tick_index, segment_tick_index, "{tick:?}");
    assert!((tick.position - position).abs() < ACCURACY, "{tick:?}");
    assert!((tick.value - value).abs() < ACCURACY, "{tick:?}");
}

fn scale(bounds: (f64, f64)) -> AxisConfig {
    AxisConfig::new(bounds, 60.0, 2.5, 4, Direction::Ascending).unwrap()
}

#[test]
fn scrolling_a_positive_scale() {
    let config = scale((0.0, 300.0));

    let ticks = config.ticks(Anchor::new(50.0, 150.0));
    assert_eq!(ticks.len(), 21);
    assert_tick(&ticks[0], 2, 0.0, 43.75);
    assert_tick(&ticks[10], 0, 150.0, 50.0);
    assert_tick(ticks.last().unwrap(), 2, 300.0, 56.25);

    let ticks = config.ticks(Anchor::new(50.0, 149.9));
    assert_eq!(ticks.len(), 20);
    assert_tick(&ticks[0], 3, 14.9, 44.375);
    assert_tick(&ticks[9], 0, 149.9, 50.0);
    assert_tick(ticks.last().unwrap(), 2, 299.9, 56.25);

    let ticks = config.ticks(Anchor::new(50.0, 150.1));
    assert_eq!(ticks.len(), 20);
    assert_tick(&ticks[0], 2, 0.1, 43.75);
    assert_tick(&ticks[10], 0, 150.1, 50.0);
    assert_tick(ticks.last().unwrap(), 1, 285.1, 55.625);
}

#[test]
fn scrolling_with_negative_position_bounds() {
    let config = scale((-100.0, 200.0));

    let ticks = config.ticks(Anchor::new(50.0, 150.0));
    assert_eq!(ticks.len(), 20);
    assert_tick(&ticks[0], 0, -90.0, 40.0);
    assert_tick(&ticks[16], 0, 150.0, 50.0);
    assert_tick(ticks.last().unwrap(), 3, 195.0, 51.875);

    let ticks = config.ticks(Anchor::new(50.0, -25.0));
    assert_eq!(ticks.len(), 21);
    assert_tick(&ticks[0], 3, -100.0, 46.875);
    assert_tick(&ticks[5], 0, -25.0, 50.0);
    assert_tick(ticks.last().unwrap(), 3, 200.0, 59.375);
}

#[test]
fn scrolling_across_zero() {
    let config = scale((0.0, 200.0));

    let ticks = config.ticks(Anchor::new(5.0, 180.0));
    assert_eq!(ticks.len(), 14);
    assert_tick(&ticks[0], 0, 0.0, -2.5);
    assert_tick(&ticks[12], 0, 180.0, 5.0);
    assert_tick(ticks.last().unwrap(), 1, 195.0, 5.625);

    let ticks = config.ticks(Anchor::new(5.0, 179.0));
    assert_eq!(ticks.len(), 13);
    assert_tick(&ticks[0], 1, 14.0, -1.875);
    assert_tick(&ticks[11], 0, 179.0, 5.0);
    assert_tick(ticks.last().unwrap(), 1, 194.0, 5.625);

    let ticks = config.ticks(Anchor::new(5.0, 181.0));
    assert_eq!(ticks.len(), 14);
    assert_tick(&ticks[0], 0, 1.0, -2.5);
    assert_tick(&ticks[12], 0, 181.0, 5.0);
    assert_tick(ticks.last().unwrap(), 1, 196.0, 5.625);
}

#[test]
fn scrolling_with_a_lower_value_clip() {
    let config = scale((0.0, 200.0))
        .with_value_clip(ValueClip::at_least(0.0))
        .unwrap();

    for (anchor_position, first_position) in [(180.0, 60.0), (179.0, 59.0), (181.0, 61.0)] {
        let ticks = config.ticks(Anchor::new(5.0, anchor_position));
        assert_eq!(ticks.len(), 10);
        assert_tick(&ticks[0], 0, first_position, 0.0);
        assert_tick(&ticks[8], 0, anchor_position, 5.0);
        assert_tick(ticks.last().unwrap(), 1, first_position + 135.0, 5.625);
    }
}

#[test]
fn reconfiguring_the_value_origin_offset() {
    let mut config = scale((0.0, 300.0)).with_value_origin_offset(0.25);
    let anchor = Anchor::new(5.0, 180.0);

    let ticks = config.ticks(anchor);
    assert_eq!(ticks.len(), 20);
    assert_tick(&ticks[0], 0, 6.0, -2.25);
    assert_tick(&ticks[12], 0, 186.0, 5.25);
    assert_tick(ticks.last().unwrap(), 3, 291.0, 9.625);

    config.set_value_origin_offset(-0.25);
    let ticks = config.ticks(anchor);
    assert_eq!(ticks.len(), 20);
    assert_tick(&ticks[0], 1, 9.0, -2.125);
    assert_tick(&ticks[11], 0, 174.0, 4.75);
    assert_tick(ticks.last().unwrap(), 0, 294.0, 9.75);
}

#[test]
fn ticks_are_ordered_and_within_bounds() {
    let configs = [
        scale((0.0, 300.0)),
        scale((-100.0, 200.0)).with_value_origin_offset(0.3),
        AxisConfig::new((-280.0, 280.0), 100.0, 36.0, 4, Direction::Ascending)
            .unwrap()
            .with_value_origin_offset(-4.0),
        AxisConfig::new((0.0, 300.0), 60.0, 2.5, 3, Direction::Descending).unwrap(),
    ];
    let anchors = [
        Anchor::new(50.0, 150.0),
        Anchor::new(-7.3, 12.345),
        Anchor::new(98.6, -1000.0),
        Anchor::new(0.0, 0.0),
    ];

    for config in &configs {
        let (low, high) = config.position_bounds();
        let n = i64::from(config.ticks_per_segment());
        for &anchor in &anchors {
            let ticks = config.ticks(anchor);
            for tick in &ticks {
                assert!(tick.position >= low && tick.position <= high, "{tick:?}");
            }
            for pair in ticks.windows(2) {
                let delta = pair[1].position - pair[0].position;
                assert!((delta - config.step()).abs() < ACCURACY);
                assert!((pair[1].value - pair[0].value - config.value_per_tick()).abs() < ACCURACY);
                assert_eq!(
                    i64::from(pair[1].segment_tick_index),
                    (i64::from(pair[0].segment_tick_index) + 1) % n
                );
            }
        }
    }
}

#[test]
fn ascending_tick_values_match_their_positions() {
    let config = scale((-100.0, 200.0)).with_value_origin_offset(0.3);
    let anchor = Anchor::new(-7.3, 12.345);
    for tick in config.tick_iter(anchor) {
        let value = config.value_at_position(tick.position, anchor);
        assert!((value - tick.value).abs() < ACCURACY, "{tick:?} maps to {value}");
        let position = config.position_for_value(tick.value, anchor);
        assert!((position - tick.position).abs() < ACCURACY);
    }
}

#[test]
fn thermometer_boundaries_carry_round_values() {
    let config = AxisConfig::new((-280.0, 280.0), 100.0, 36.0, 4, Direction::Ascending)
        .unwrap()
        .with_value_clip(ValueClip::between(32.0, 212.0))
        .unwrap()
        .with_value_origin_offset(-4.0);
    let anchor = Anchor::new(32.0, config.start_position());
    let ticks = config.ticks(anchor);

    assert_eq!(ticks.len(), 21);
    assert_tick(&ticks[0], 0, -280.0, 32.0);
    assert_tick(ticks.last().unwrap(), 0, 220.0, 212.0);
    let labels: Vec<f64> = ticks
        .iter()
        .filter(|t| t.is_segment_boundary())
        .map(|t| t.value)
        .collect();
    assert_eq!(labels.len(), 6);
    for (label, expected) in labels.iter().zip([32.0, 68.0, 104.0, 140.0, 176.0, 212.0]) {
        assert!((label - expected).abs() < ACCURACY);
    }
}
