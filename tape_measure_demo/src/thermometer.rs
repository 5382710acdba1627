// Copyright 2025 the Tape Measure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A horizontal Fahrenheit thermometer.

use kurbo::{Point, Rect, RoundedRect};
use peniko::color::palette::css;
use tape_measure::{
    Anchor, AxisConfig, AxisConfigError, Direction, ValueClip, format_tick_value,
};

use crate::svg::SvgScene;

/// Freezing point, the lowest value on the scale.
const FREEZING: f64 = 32.0;
/// Boiling point, the highest value on the scale.
const BOILING: f64 = 212.0;

#[derive(Debug)]
pub(crate) struct Thermometer {
    scale: AxisConfig,
    temperature: f64,
}

impl Thermometer {
    /// A 560pt wide scale with a labelled mark every 36ºF and quarter marks in
    /// between. The -4ºF origin offset puts the labels on 32, 68, ..., 212.
    pub(crate) fn new(temperature: f64) -> Result<Self, AxisConfigError> {
        let scale = AxisConfig::new((-280.0, 280.0), 100.0, 36.0, 4, Direction::Ascending)?
            .with_value_clip(ValueClip::between(FREEZING, BOILING))?
            .with_value_origin_offset(-4.0);
        Ok(Self {
            scale,
            temperature: temperature.clamp(FREEZING, BOILING),
        })
    }

    /// Draws the thermometer centered on `center`, with the scale shifted by
    /// `scroll` points.
    pub(crate) fn draw(&self, scene: &mut SvgScene, center: Point, scroll: f64) {
        let anchor = Anchor::new(FREEZING, self.scale.start_position() + scroll);
        let x = |position: f64| center.x + position;

        let cold = x(self.scale.position_for_value(FREEZING, anchor));
        let hot = x(self.scale.position_for_value(BOILING, anchor));
        let level = x(self.scale.position_for_value(self.temperature, anchor));
        log::info!(
            "thermometer at {}ºF, mercury ends at x = {level:.1}",
            self.temperature
        );

        scene.fill(
            &RoundedRect::new(cold - 100.0, center.y - 6.0, cold, center.y + 6.0, 8.0),
            css::DARK_GRAY,
        );
        scene.fill(
            &RoundedRect::new(cold - 40.0, center.y - 10.0, hot + 40.0, center.y + 10.0, 10.0),
            css::LIGHT_GRAY,
        );
        scene.fill(
            &Rect::new(cold - 20.0, center.y - 6.0, level, center.y + 6.0),
            css::RED,
        );

        let baseline = center.y - 20.0;
        let value_per_tick = self.scale.value_per_tick();
        for tick in self.scale.tick_iter(anchor) {
            log::debug!("{tick}");
            let height = match tick.segment_tick_index {
                0 => 20.0,
                2 => 10.0,
                _ => 5.0,
            };
            let tx = x(tick.position);
            scene.line(
                Point::new(tx, baseline),
                Point::new(tx, baseline - height),
                css::BLACK,
                2.0,
            );
            if tick.is_segment_boundary() {
                let label = format!("{}º", format_tick_value(tick.value, value_per_tick));
                scene.text(Point::new(tx, baseline - height - 4.0), label, 14.0, css::BLACK);
            }
        }
    }
}
