// Copyright 2025 the Tape Measure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use core::fmt;

/// Errors returned when building or reconfiguring an [`AxisConfig`](crate::AxisConfig).
///
/// Every variant describes a configuration that would make the derived
/// quantities (`value_per_tick`, `tick_distance`) divide by zero or produce
/// non-finite tick positions. Empty tick sequences are never reported as errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisConfigError {
    /// The graphical length of a segment is zero.
    ZeroSegmentLength,
    /// The graphical length of a segment is NaN or infinite.
    NonFiniteSegmentLength(f64),
    /// The value span of a segment is zero.
    ZeroSegmentValue,
    /// The value span of a segment is NaN or infinite.
    NonFiniteSegmentValue(f64),
    /// A segment must be made of at least one tick.
    ZeroTicksPerSegment,
    /// The position bounds are inverted or not finite.
    InvalidPositionBounds {
        /// Requested lower bound.
        low: f64,
        /// Requested upper bound.
        high: f64,
    },
    /// The value clipping bounds are inverted or NaN.
    InvalidValueClip {
        /// Requested lower value bound, if any.
        lower: Option<f64>,
        /// Requested upper value bound, if any.
        upper: Option<f64>,
    },
    /// The tick alignment tolerance must be finite and strictly positive.
    InvalidTickAlignmentEpsilon(f64),
}

impl fmt::Display for AxisConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSegmentLength => write!(f, "segment length must be non-zero"),
            Self::NonFiniteSegmentLength(v) => {
                write!(f, "segment length must be finite, got {v}")
            }
            Self::ZeroSegmentValue => write!(f, "segment value must be non-zero"),
            Self::NonFiniteSegmentValue(v) => write!(f, "segment value must be finite, got {v}"),
            Self::ZeroTicksPerSegment => write!(f, "ticks per segment must be at least 1"),
            Self::InvalidPositionBounds { low, high } => {
                write!(f, "invalid position bounds [{low}, {high}]")
            }
            Self::InvalidValueClip { lower, upper } => {
                write!(f, "invalid value clipping bounds [")?;
                match lower {
                    Some(v) => write!(f, "{v}")?,
                    None => write!(f, "-inf")?,
                }
                write!(f, ", ")?;
                match upper {
                    Some(v) => write!(f, "{v}")?,
                    None => write!(f, "+inf")?,
                }
                write!(f, "]")
            }
            Self::InvalidTickAlignmentEpsilon(v) => {
                write!(f, "tick alignment epsilon must be finite and positive, got {v}")
            }
        }
    }
}

impl core::error::Error for AxisConfigError {}
