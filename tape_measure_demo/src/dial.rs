// Copyright 2025 the Tape Measure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A row of amplifier knobs that go to eleven.
//!
//! Positions produced by the scale are angles in radians, measured clockwise
//! from twelve o'clock.

use kurbo::{Circle, Point};
use peniko::color::palette::css;
use tape_measure::{
    Anchor, AxisConfig, AxisConfigError, Direction, Tick, ValueClip, format_tick_value,
    round_to_decimal,
};

use crate::svg::SvgScene;

const LABELS: [&str; 4] = ["BASS", "MIDDLE", "TREBLE", "VOLUME I"];
const SETTINGS: [f64; 4] = [7.2, 10.0, 5.1, 10.0];
const DIAL_SPACING: f64 = 200.0;
const DIAL_RADIUS: f64 = 30.0;

/// Value 5.5 (the middle of `0..=11`) points straight up.
const ANCHOR: Anchor = Anchor {
    value: 5.5,
    position: 0.0,
};

#[derive(Debug)]
pub(crate) struct AmpPanel {
    scale: AxisConfig,
}

impl AmpPanel {
    /// One tick per unit, 0.45 rad apart, clipped to `0..=11`.
    pub(crate) fn new() -> Result<Self, AxisConfigError> {
        let scale = AxisConfig::new((-3.0, 3.0), 0.45, 1.0, 1, Direction::Ascending)?
            .with_value_clip(ValueClip::between(0.0, 11.0))?;
        Ok(Self { scale })
    }

    pub(crate) fn draw(&self, scene: &mut SvgScene, center: Point) {
        let ticks = self.scale.ticks(ANCHOR);
        log::info!("dial scale has {} ticks", ticks.len());

        for (i, (label, setting)) in LABELS.iter().zip(SETTINGS).enumerate() {
            let c = Point::new(center.x + (i as f64 - 1.5) * DIAL_SPACING, center.y);
            scene.text(Point::new(c.x, c.y - 90.0), *label, 18.0, css::BLACK);
            scene.fill_and_stroke(&Circle::new(c, DIAL_RADIUS), css::LIGHT_GRAY, css::BLACK, 3.0);

            let angle = self.scale.position_for_value(setting, ANCHOR);
            log::debug!("{label} set to {setting} at {angle:.3} rad");
            scene.line(c, on_circle(c, angle, DIAL_RADIUS), css::BLACK, 5.0);

            for tick in &ticks {
                if has_label(tick) {
                    let text = format_tick_value(tick.value, self.scale.value_per_tick());
                    let anchor = on_circle(c, tick.position, 58.0);
                    scene.text(Point::new(anchor.x, anchor.y + 6.0), text, 18.0, css::BLACK);
                } else {
                    scene.line(
                        on_circle(c, tick.position, 48.0),
                        on_circle(c, tick.position, 64.0),
                        css::BLACK,
                        2.0,
                    );
                }
            }
        }
    }
}

/// Even values and the famous eleven get a number, the rest a mark.
fn has_label(tick: &Tick) -> bool {
    let value = round_to_decimal(tick.value, 6);
    value % 2.0 == 0.0 || value == 11.0
}

fn on_circle(center: Point, angle: f64, radius: f64) -> Point {
    Point::new(
        center.x + angle.sin() * radius,
        center.y - angle.cos() * radius,
    )
}
