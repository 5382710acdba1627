// Copyright 2025 the Tape Measure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between the value domain and the position domain.
//!
//! A scale maps value to position linearly: `segment_value` units of value
//! span `segment_length` units of position. The only free parameter is where
//! the value domain currently sits, which callers describe with an [`Anchor`]:
//! "value `v` is drawn at position `p`". The anchor typically changes on every
//! frame of a scroll or zoom interaction, so it is passed per call instead of
//! being stored in the [`AxisConfig`].

use crate::AxisConfig;

/// A known `(value, position)` pair calibrating a scale for one call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor {
    /// Value known to sit at [`Anchor::position`].
    pub value: f64,
    /// Graphical position of [`Anchor::value`].
    pub position: f64,
}

impl Anchor {
    /// Creates an anchor placing `value` at `position`.
    pub fn new(value: f64, position: f64) -> Self {
        Self { value, position }
    }
}

impl AxisConfig {
    fn raw_position(&self, value: f64) -> f64 {
        (value / self.segment_value()) * self.segment_length()
    }

    fn raw_value(&self, position: f64) -> f64 {
        (position / self.segment_length()) * self.segment_value()
    }

    /// Position of the logical origin (value `0.0` shifted by the value origin
    /// offset) for the given anchor.
    pub fn origin_position(&self, anchor: Anchor) -> f64 {
        anchor.position - self.raw_position(anchor.value)
            + self.raw_position(self.value_origin_offset())
    }

    /// Signed distance from the logical origin to `position`.
    pub fn distance_to_origin(&self, position: f64, anchor: Anchor) -> f64 {
        position - self.origin_position(anchor)
    }

    /// Value at `position`.
    ///
    /// The origin itself carries the value origin offset, so the offset is
    /// added back after scaling the distance from the origin. Returning the
    /// scaled distance alone would only invert
    /// [`AxisConfig::position_for_value`] for a zero offset. No clamping is
    /// applied; positions outside the bounds map to values outside the visible
    /// range.
    pub fn value_at_position(&self, position: f64, anchor: Anchor) -> f64 {
        self.raw_value(self.distance_to_origin(position, anchor)) + self.value_origin_offset()
    }

    /// Position of `value`. Inverse of [`AxisConfig::value_at_position`].
    pub fn position_for_value(&self, value: f64, anchor: Anchor) -> f64 {
        let adjusted = value - self.value_origin_offset();
        self.origin_position(anchor) + self.raw_position(adjusted)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::Direction;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    fn config(offset: f64) -> AxisConfig {
        AxisConfig::new((0.0, 300.0), 60.0, 2.5, 4, Direction::Ascending)
            .unwrap()
            .with_value_origin_offset(offset)
    }

    #[test]
    fn origin_accounts_for_value_offset() {
        let anchor = Anchor::new(5.0, 180.0);
        assert_close(config(0.0).origin_position(anchor), 60.0);
        assert_close(config(0.25).origin_position(anchor), 66.0);
        assert_close(config(-0.25).origin_position(anchor), 54.0);
        assert_close(config(0.25).distance_to_origin(0.0, anchor), -66.0);
    }

    #[test]
    fn anchor_maps_onto_itself() {
        for offset in [0.0, 0.25, -4.0, 1.0e3] {
            let config = config(offset);
            for anchor in [
                Anchor::new(98.6, 0.0),
                Anchor::new(-12.5, 321.0),
                Anchor::new(0.0, -40.0),
            ] {
                assert_close(config.position_for_value(anchor.value, anchor), anchor.position);
                assert_close(config.value_at_position(anchor.position, anchor), anchor.value);
            }
        }
    }

    #[test]
    fn conversions_round_trip() {
        let anchor = Anchor::new(50.0, 150.0);
        for offset in [0.0, 0.25, -0.25] {
            let config = config(offset);
            for value in [-1000.0, -2.5, 0.0, 0.1, 43.75, 56.25, 1.0e6] {
                let position = config.position_for_value(value, anchor);
                assert_close(config.value_at_position(position, anchor), value);
            }
        }
    }

    #[test]
    fn value_is_linear_in_position() {
        let config = config(0.0);
        let anchor = Anchor::new(50.0, 150.0);
        assert_close(config.value_at_position(0.0, anchor), 43.75);
        assert_close(config.value_at_position(300.0, anchor), 56.25);
        assert_close(config.value_at_position(210.0, anchor), 52.5);
        assert_close(config.position_for_value(52.5, anchor), 210.0);
    }
}
