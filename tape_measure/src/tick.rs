// Copyright 2025 the Tape Measure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation.
//!
//! Ticks are generated for one anchor at a time, walking from the start of the
//! position bounds towards the end in steps of `tick_distance`. The walk is
//! aligned so every tick sits an integral number of tick distances away from
//! the logical origin, which keeps segment boundaries on
//! `value_origin_offset + k * segment_value` no matter how the scale is
//! scrolled.

use core::fmt;
use core::iter::FusedIterator;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::{Anchor, AxisConfig, Direction};

/// A single generated tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Graphical position of the tick.
    pub position: f64,
    /// Value at the tick.
    pub value: f64,
    /// Subdivision index within the segment, in `0..ticks_per_segment`.
    ///
    /// `0` marks a segment boundary.
    pub segment_tick_index: u32,
}

impl Tick {
    /// Returns `true` if this tick starts a segment.
    pub fn is_segment_boundary(&self) -> bool {
        self.segment_tick_index == 0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = if self.is_segment_boundary() {
            "------------"
        } else {
            "--"
        };
        write!(
            f,
            "[{}] {} {rule} \"{}\"",
            self.segment_tick_index, self.position, self.value
        )
    }
}

/// Lazy iterator over the ticks of a scale for one anchor.
///
/// Created by [`AxisConfig::tick_iter`]. Positions and values are computed from
/// the running tick index, so long walks do not accumulate rounding error.
///
/// [`Iterator::size_hint`] is exact unless the walk is too long to count
/// (more than `u64::MAX` ticks, or more than `usize::MAX` on the target), in
/// which case it reports `(0, None)`.
#[derive(Clone, Debug)]
pub struct Ticks {
    first_position: f64,
    last_position: f64,
    step: f64,
    first_index: i64,
    value_per_tick: f64,
    value_origin_offset: f64,
    ticks_per_segment: i64,
    emitted: u64,
    len: u64,
    counted: bool,
}

impl Ticks {
    fn empty() -> Self {
        Self {
            first_position: 0.0,
            last_position: 0.0,
            step: 0.0,
            first_index: 0,
            value_per_tick: 0.0,
            value_origin_offset: 0.0,
            ticks_per_segment: 1,
            emitted: 0,
            len: 0,
            counted: true,
        }
    }

    fn remaining(&self) -> u64 {
        self.len - self.emitted
    }
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.emitted >= self.len {
            return None;
        }
        let i = self.emitted;
        self.emitted += 1;

        let mut position = self.first_position + self.step * i as f64;
        let overshoot = if self.step > 0.0 {
            position > self.last_position
        } else {
            position < self.last_position
        };
        if overshoot {
            position = self.last_position;
        }

        let index = self
            .first_index
            .saturating_add(i64::try_from(i).unwrap_or(i64::MAX));
        let segment_tick_index = u32::try_from(index.rem_euclid(self.ticks_per_segment))
            .unwrap_or_default();
        Some(Tick {
            position,
            value: index as f64 * self.value_per_tick + self.value_origin_offset,
            segment_tick_index,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) if self.counted => (n, Some(n)),
            _ => (0, None),
        }
    }
}

impl FusedIterator for Ticks {}

impl AxisConfig {
    /// Returns the ticks for `anchor` in generation order.
    ///
    /// See [`AxisConfig::tick_iter`]. Bounds spanning more ticks than can be
    /// counted should be walked lazily with [`AxisConfig::tick_iter`] instead.
    pub fn ticks(&self, anchor: Anchor) -> Vec<Tick> {
        self.tick_iter(anchor).collect()
    }

    /// Returns a lazy iterator over the ticks for `anchor`.
    ///
    /// The first tick is the first tick boundary reached when walking from the
    /// start position (or from the position of the lower value clip, if that
    /// is greater) in the generation direction. The walk then steps by
    /// [`AxisConfig::step`] up to and including the end position, or the
    /// position of the upper value clip if that is smaller. An end point
    /// within the tick alignment epsilon is included.
    ///
    /// Tick values grow by `value_per_tick` per emitted tick in both
    /// directions; only the position step is signed.
    ///
    /// The clip comparisons (`>` against the start, `min` against the end) do
    /// not depend on the direction, so value clipping is only meaningful for
    /// ascending scales.
    ///
    /// An anchor that puts the origin at a non-finite distance yields no ticks.
    pub fn tick_iter(&self, anchor: Anchor) -> Ticks {
        let tick_distance = self.tick_distance();
        let epsilon = self.tick_alignment_epsilon();
        let start = self.start_position();

        let mut first_position = start;
        let mut origin_offset = self.distance_to_origin(start, anchor);

        if let Some(lower) = self.value_clip().and_then(|clip| clip.lower) {
            let lower_position = self.position_for_value(lower, anchor);
            if lower_position > start {
                first_position = lower_position;
                origin_offset = self.distance_to_origin(lower_position, anchor);
            }
        }

        if !origin_offset.is_finite() {
            return Ticks::empty();
        }

        let mut tick_index = truncated_index(origin_offset / tick_distance);
        let mut remainder = origin_offset % tick_distance;

        // Remainders within epsilon of either end of a tick distance are
        // rounding noise. Near the far end, the first tick already sits on the
        // next boundary.
        if remainder.abs() <= epsilon {
            remainder = 0.0;
        } else if tick_distance - remainder.abs() <= epsilon {
            tick_index = if remainder > 0.0 {
                tick_index.saturating_add(1)
            } else {
                tick_index.saturating_sub(1)
            };
            remainder = 0.0;
        }

        // Move the first tick onto the nearest boundary in the walk direction.
        match self.direction() {
            Direction::Ascending => {
                if origin_offset >= 0.0 && remainder > 0.0 {
                    first_position += tick_distance - remainder;
                    tick_index = tick_index.saturating_add(1);
                }
                if origin_offset < 0.0 && remainder < 0.0 {
                    first_position -= remainder;
                }
            }
            Direction::Descending => {
                if origin_offset >= 0.0 && remainder > 0.0 {
                    first_position -= remainder;
                }
                if origin_offset < 0.0 && remainder < 0.0 {
                    first_position -= tick_distance + remainder;
                    tick_index = tick_index.saturating_sub(1);
                }
            }
        }

        let mut last_position = self.end_position();
        if let Some(upper) = self.value_clip().and_then(|clip| clip.upper) {
            last_position = last_position.min(self.position_for_value(upper, anchor));
        }

        log::trace!(
            "ticks for anchor {} @ {}: first {first_position} (index {tick_index}), last {last_position}",
            anchor.value,
            anchor.position
        );

        let step = self.step();
        let (len, counted) = match walk_len(first_position, last_position, step, epsilon) {
            Some(0) => return Ticks::empty(),
            Some(len) => (len, true),
            None => (u64::MAX, false),
        };

        Ticks {
            first_position,
            last_position,
            step,
            first_index: tick_index,
            value_per_tick: self.value_per_tick(),
            value_origin_offset: self.value_origin_offset(),
            ticks_per_segment: i64::from(self.ticks_per_segment()),
            emitted: 0,
            len,
            counted,
        }
    }
}

/// Truncates towards zero, saturating at the `i64` range (NaN maps to 0).
fn truncated_index(ticks: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "truncation towards zero is the tick index definition"
    )]
    {
        ticks as i64
    }
}

/// `2^64`, the first step count a `u64` can no longer hold.
const UNCOUNTABLE_STEPS: f64 = 18_446_744_073_709_551_616.0;

/// Number of stops from `first` through `last` (inclusive within `epsilon`).
///
/// Returns `None` if the walk has more stops than fit in a `u64`.
fn walk_len(first: f64, last: f64, step: f64, epsilon: f64) -> Option<u64> {
    if !first.is_finite() || !last.is_finite() || step == 0.0 {
        return Some(0);
    }
    let steps = ((last - first) / step + epsilon / step.abs()).floor();
    if steps.is_nan() || steps < 0.0 {
        return Some(0);
    }
    if steps >= UNCOUNTABLE_STEPS {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "guarded by the range checks above"
    )]
    let steps = steps as u64;
    Some(steps.saturating_add(1))
}
