// Copyright 2025 the Tape Measure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value/position mapping and tick generation for measuring scales.
//!
//! A tape measure, thermometer or dial maps a linear **value** domain (a
//! temperature, a volume level) onto a **position** domain (graphical
//! coordinates along an axis). This crate provides:
//! - [`AxisConfig`]: the shape of a scale (segment length and value,
//!   subdivisions, viewport bounds, direction, value clipping, origin offset),
//! - conversions between values and positions for a given [`Anchor`], and
//! - [`Tick`] generation for the current viewport.
//!
//! Everything is a pure function of the configuration and the anchor, so ticks
//! can be regenerated on every frame while the scale is scrolled or zoomed.
//! Drawing the ticks is left to the caller.
//!
//! ```
//! use tape_measure::{Anchor, AxisConfig, Direction};
//!
//! let config = AxisConfig::new((0.0, 300.0), 60.0, 2.5, 4, Direction::Ascending)?;
//! let ticks = config.ticks(Anchor::new(50.0, 150.0));
//! assert_eq!(ticks.len(), 21);
//! assert_eq!(ticks[10].value, 50.0);
//! assert!(ticks[10].is_segment_boundary());
//! # Ok::<(), tape_measure::AxisConfigError>(())
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod mapper;
mod tick;

pub use config::{AxisConfig, DEFAULT_TICK_ALIGNMENT_EPSILON, Direction, ValueClip};
pub use error::AxisConfigError;
pub use format::{format_decimal, format_tick_value, round_to_decimal, rounded_to_multiple};
pub use mapper::Anchor;
pub use tick::{Tick, Ticks};
