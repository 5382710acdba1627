// Copyright 2025 the Tape Measure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value rounding and label formatting helpers.

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Most fraction digits [`format_tick_value`] will ever print.
const MAX_FRACTION_DIGITS: u32 = 12;

/// Rounds `value` to `fraction_digits` decimal places.
pub fn round_to_decimal(value: f64, fraction_digits: u32) -> f64 {
    let multiplier = 10_f64.powi(i32::try_from(fraction_digits).unwrap_or(i32::MAX));
    if !multiplier.is_finite() {
        return value;
    }
    (value * multiplier).round() / multiplier
}

/// Rounds `value` to the nearest multiple of `multiple`.
///
/// Returns `value` unchanged if `multiple` is zero or not finite.
pub fn rounded_to_multiple(value: f64, multiple: f64) -> f64 {
    if multiple == 0.0 || !multiple.is_finite() {
        return value;
    }
    (value / multiple).round() * multiple
}

/// Formats `value` with exactly `fraction_digits` decimal places.
pub fn format_decimal(value: f64, fraction_digits: u32) -> String {
    let digits = fraction_digits as usize;
    alloc::format!("{:.*}", digits, round_to_decimal(value, fraction_digits))
}

/// Formats a tick value for a label.
///
/// Uses as many fraction digits as `value_per_tick` needs to be represented
/// exactly (so neighbouring ticks never share a label), with trailing zeros
/// trimmed.
pub fn format_tick_value(value: f64, value_per_tick: f64) -> String {
    if !value.is_finite() {
        return alloc::format!("{value}");
    }

    let digits = fraction_digits_for_step(value_per_tick);
    let rounded = round_to_decimal(value, digits);
    // Avoid printing `-0`.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    let mut out = format_decimal(rounded, digits);
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    out
}

fn fraction_digits_for_step(step: f64) -> u32 {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    let tolerance = 1e-9 * step.max(1.0);
    (0..MAX_FRACTION_DIGITS)
        .find(|&digits| (round_to_decimal(step, digits) - step).abs() <= tolerance)
        .unwrap_or(MAX_FRACTION_DIGITS)
}
