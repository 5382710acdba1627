// Copyright 2025 the Tape Measure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis configuration.
//!
//! An [`AxisConfig`] describes the *shape* of a measuring scale: how much
//! graphical distance one segment covers, how much value it represents, how it
//! is subdivided, and which window of positions ticks may be generated in.
//! Where the value domain currently sits is not part of the configuration; it
//! is supplied on every call as an [`Anchor`](crate::Anchor).

use crate::AxisConfigError;

/// Default tolerance used to decide whether the first tick lands exactly on a
/// tick boundary.
pub const DEFAULT_TICK_ALIGNMENT_EPSILON: f64 = 0.001;

/// Which end of the position bounds tick generation starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Start at the low position bound and step towards the high one.
    #[default]
    Ascending,
    /// Start at the high position bound and step towards the low one.
    Descending,
}

/// Value-domain limits outside of which no ticks are generated.
///
/// Either side may be absent. Infinite bounds are accepted and behave like an
/// absent bound.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueClip {
    /// Smallest value that may receive a tick.
    pub lower: Option<f64>,
    /// Largest value that may receive a tick.
    pub upper: Option<f64>,
}

impl ValueClip {
    /// Clips values to the closed range `[lower, upper]`.
    pub fn between(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Clips values below `lower`.
    pub fn at_least(lower: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    /// Clips values above `upper`.
    pub fn at_most(upper: f64) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    /// Returns `true` if `value` lies within the clipping bounds.
    pub fn contains(&self, value: f64) -> bool {
        self.lower.is_none_or(|lo| value >= lo) && self.upper.is_none_or(|hi| value <= hi)
    }

    fn validated(self) -> Result<Self, AxisConfigError> {
        let nan = self.lower.is_some_and(f64::is_nan) || self.upper.is_some_and(f64::is_nan);
        let inverted = matches!((self.lower, self.upper), (Some(lo), Some(hi)) if lo > hi);
        if nan || inverted {
            return Err(rejected(AxisConfigError::InvalidValueClip {
                lower: self.lower,
                upper: self.upper,
            }));
        }
        Ok(self)
    }
}

/// Configuration of a measuring scale.
///
/// Construct with [`AxisConfig::new`] and refine with the `with_*` builders.
/// Fields can be reassigned between calls through the `set_*` methods (e.g. to
/// rescale while zooming). Setters that could break the invariants
/// (`segment_length > 0`, `segment_value > 0`, `ticks_per_segment >= 1`,
/// ordered finite position bounds) validate their input and leave the
/// configuration unchanged on error.
///
/// The configuration holds only plain numbers and is `Copy`. Reading a shared
/// instance from many threads is fine; mutating it requires exclusive access,
/// which the borrow checker enforces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisConfig {
    position_bounds: (f64, f64),
    segment_length: f64,
    segment_value: f64,
    ticks_per_segment: u32,
    direction: Direction,
    value_clip: Option<ValueClip>,
    value_origin_offset: f64,
    tick_alignment_epsilon: f64,
}

impl AxisConfig {
    /// Creates a new configuration.
    ///
    /// `segment_length` and `segment_value` are normalized to their absolute
    /// values. The returned configuration has no value clipping, no value
    /// origin offset and a tick alignment epsilon of
    /// [`DEFAULT_TICK_ALIGNMENT_EPSILON`].
    ///
    /// # Errors
    ///
    /// Fails if either segment span is zero or not finite, if
    /// `ticks_per_segment` is zero, or if `position_bounds` is not an ordered
    /// pair of finite numbers.
    pub fn new(
        position_bounds: (f64, f64),
        segment_length: f64,
        segment_value: f64,
        ticks_per_segment: u32,
        direction: Direction,
    ) -> Result<Self, AxisConfigError> {
        Ok(Self {
            position_bounds: checked_position_bounds(position_bounds)?,
            segment_length: checked_segment_length(segment_length)?,
            segment_value: checked_segment_value(segment_value)?,
            ticks_per_segment: checked_ticks_per_segment(ticks_per_segment)?,
            direction,
            value_clip: None,
            value_origin_offset: 0.0,
            tick_alignment_epsilon: DEFAULT_TICK_ALIGNMENT_EPSILON,
        })
    }

    /// Clips generated ticks by value.
    ///
    /// # Errors
    ///
    /// Fails if the clip is inverted or contains NaN.
    pub fn with_value_clip(mut self, clip: ValueClip) -> Result<Self, AxisConfigError> {
        self.value_clip = Some(clip.validated()?);
        Ok(self)
    }

    /// Removes any value clipping.
    pub fn without_value_clip(mut self) -> Self {
        self.value_clip = None;
        self
    }

    /// Shifts the logical origin away from value `0.0`.
    ///
    /// Segment boundaries land on `value_origin_offset + k * segment_value`.
    pub fn with_value_origin_offset(mut self, value_origin_offset: f64) -> Self {
        self.value_origin_offset = value_origin_offset;
        self
    }

    /// Sets the tolerance used when checking whether ticks are aligned.
    ///
    /// # Errors
    ///
    /// Fails if `epsilon` is not finite and strictly positive.
    pub fn with_tick_alignment_epsilon(mut self, epsilon: f64) -> Result<Self, AxisConfigError> {
        self.tick_alignment_epsilon = checked_epsilon(epsilon)?;
        Ok(self)
    }

    /// Returns the `(low, high)` window in which ticks may be generated.
    pub fn position_bounds(&self) -> (f64, f64) {
        self.position_bounds
    }

    /// Returns the graphical length of one segment.
    pub fn segment_length(&self) -> f64 {
        self.segment_length
    }

    /// Returns the value span of one segment.
    pub fn segment_value(&self) -> f64 {
        self.segment_value
    }

    /// Returns the number of ticks each segment is divided into.
    pub fn ticks_per_segment(&self) -> u32 {
        self.ticks_per_segment
    }

    /// Returns the generation direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the value clipping bounds, if any.
    pub fn value_clip(&self) -> Option<ValueClip> {
        self.value_clip
    }

    /// Returns the value offset of the logical origin.
    pub fn value_origin_offset(&self) -> f64 {
        self.value_origin_offset
    }

    /// Returns the tick alignment tolerance.
    pub fn tick_alignment_epsilon(&self) -> f64 {
        self.tick_alignment_epsilon
    }

    /// Replaces the position bounds.
    ///
    /// # Errors
    ///
    /// Fails if the bounds are inverted or not finite.
    pub fn set_position_bounds(&mut self, bounds: (f64, f64)) -> Result<(), AxisConfigError> {
        self.position_bounds = checked_position_bounds(bounds)?;
        Ok(())
    }

    /// Replaces the segment length (its absolute value is stored).
    ///
    /// # Errors
    ///
    /// Fails if `segment_length` is zero or not finite.
    pub fn set_segment_length(&mut self, segment_length: f64) -> Result<(), AxisConfigError> {
        self.segment_length = checked_segment_length(segment_length)?;
        Ok(())
    }

    /// Replaces the segment value (its absolute value is stored).
    ///
    /// # Errors
    ///
    /// Fails if `segment_value` is zero or not finite.
    pub fn set_segment_value(&mut self, segment_value: f64) -> Result<(), AxisConfigError> {
        self.segment_value = checked_segment_value(segment_value)?;
        Ok(())
    }

    /// Replaces the number of ticks per segment.
    ///
    /// # Errors
    ///
    /// Fails if `ticks_per_segment` is zero.
    pub fn set_ticks_per_segment(&mut self, ticks_per_segment: u32) -> Result<(), AxisConfigError> {
        self.ticks_per_segment = checked_ticks_per_segment(ticks_per_segment)?;
        Ok(())
    }

    /// Replaces the generation direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Replaces (or removes, with `None`) the value clipping bounds.
    ///
    /// # Errors
    ///
    /// Fails if the clip is inverted or contains NaN.
    pub fn set_value_clip(&mut self, clip: Option<ValueClip>) -> Result<(), AxisConfigError> {
        self.value_clip = clip.map(ValueClip::validated).transpose()?;
        Ok(())
    }

    /// Replaces the value offset of the logical origin.
    pub fn set_value_origin_offset(&mut self, value_origin_offset: f64) {
        self.value_origin_offset = value_origin_offset;
    }

    /// Replaces the tick alignment tolerance.
    ///
    /// # Errors
    ///
    /// Fails if `epsilon` is not finite and strictly positive.
    pub fn set_tick_alignment_epsilon(&mut self, epsilon: f64) -> Result<(), AxisConfigError> {
        self.tick_alignment_epsilon = checked_epsilon(epsilon)?;
        Ok(())
    }

    /// Value span between two neighbouring ticks.
    pub fn value_per_tick(&self) -> f64 {
        self.segment_value / f64::from(self.ticks_per_segment)
    }

    /// Graphical distance between two neighbouring ticks.
    pub fn tick_distance(&self) -> f64 {
        self.segment_length / f64::from(self.ticks_per_segment)
    }

    /// Signed position increment between consecutive generated ticks.
    pub fn step(&self) -> f64 {
        match self.direction {
            Direction::Ascending => self.tick_distance(),
            Direction::Descending => -self.tick_distance(),
        }
    }

    /// Position tick generation starts from.
    pub fn start_position(&self) -> f64 {
        match self.direction {
            Direction::Ascending => self.position_bounds.0,
            Direction::Descending => self.position_bounds.1,
        }
    }

    /// Position tick generation walks towards.
    pub fn end_position(&self) -> f64 {
        match self.direction {
            Direction::Ascending => self.position_bounds.1,
            Direction::Descending => self.position_bounds.0,
        }
    }
}

fn rejected(err: AxisConfigError) -> AxisConfigError {
    log::debug!("rejecting axis configuration: {err}");
    err
}

fn checked_position_bounds((low, high): (f64, f64)) -> Result<(f64, f64), AxisConfigError> {
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(rejected(AxisConfigError::InvalidPositionBounds { low, high }));
    }
    Ok((low, high))
}

fn checked_segment_length(segment_length: f64) -> Result<f64, AxisConfigError> {
    if !segment_length.is_finite() {
        return Err(rejected(AxisConfigError::NonFiniteSegmentLength(
            segment_length,
        )));
    }
    if segment_length == 0.0 {
        return Err(rejected(AxisConfigError::ZeroSegmentLength));
    }
    Ok(segment_length.abs())
}

fn checked_segment_value(segment_value: f64) -> Result<f64, AxisConfigError> {
    if !segment_value.is_finite() {
        return Err(rejected(AxisConfigError::NonFiniteSegmentValue(segment_value)));
    }
    if segment_value == 0.0 {
        return Err(rejected(AxisConfigError::ZeroSegmentValue));
    }
    Ok(segment_value.abs())
}

fn checked_ticks_per_segment(ticks_per_segment: u32) -> Result<u32, AxisConfigError> {
    if ticks_per_segment == 0 {
        return Err(rejected(AxisConfigError::ZeroTicksPerSegment));
    }
    Ok(ticks_per_segment)
}

fn checked_epsilon(epsilon: f64) -> Result<f64, AxisConfigError> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(rejected(AxisConfigError::InvalidTickAlignmentEpsilon(
            epsilon,
        )));
    }
    Ok(epsilon)
}
