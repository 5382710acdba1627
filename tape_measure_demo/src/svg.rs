// Copyright 2025 the Tape Measure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `tape_measure_demo`.

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Color;

#[derive(Debug)]
enum Element {
    Path {
        path: BezPath,
        fill: Option<Color>,
        stroke: Option<(Color, f64)>,
    },
    Text {
        pos: Point,
        text: String,
        font_size: f64,
        fill: Color,
    },
}

/// Painter's-order list of shapes and labels.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    elements: Vec<Element>,
}

impl SvgScene {
    pub(crate) fn fill(&mut self, shape: &impl Shape, fill: Color) {
        self.elements.push(Element::Path {
            path: shape.to_path(0.1),
            fill: Some(fill),
            stroke: None,
        });
    }

    pub(crate) fn fill_and_stroke(
        &mut self,
        shape: &impl Shape,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    ) {
        self.elements.push(Element::Path {
            path: shape.to_path(0.1),
            fill: Some(fill),
            stroke: Some((stroke, stroke_width)),
        });
    }

    pub(crate) fn line(&mut self, from: Point, to: Point, stroke: Color, stroke_width: f64) {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        self.elements.push(Element::Path {
            path,
            fill: None,
            stroke: Some((stroke, stroke_width)),
        });
    }

    /// Adds a label centered horizontally on `pos`, with `pos.y` as baseline.
    pub(crate) fn text(&mut self, pos: Point, text: impl Into<String>, font_size: f64, fill: Color) {
        self.elements.push(Element::Text {
            pos,
            text: text.into(),
            font_size,
            fill,
        });
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box()
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        for element in &self.elements {
            match element {
                Element::Path { path, fill, stroke } => {
                    out.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
                    match fill {
                        Some(color) => write_paint_attr(&mut out, "fill", *color),
                        None => out.push_str(r#" fill="none""#),
                    }
                    if let Some((color, width)) = stroke {
                        write_paint_attr(&mut out, "stroke", *color);
                        out.push_str(&format!(r#" stroke-width="{width}""#));
                    }
                    out.push_str("/>\n");
                }
                Element::Text {
                    pos,
                    text,
                    font_size,
                    fill,
                } => {
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle""#,
                        pos.x, pos.y, font_size
                    ));
                    write_paint_attr(&mut out, "fill", *fill);
                    out.push('>');
                    out.push_str(&escape_xml(text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }

    fn view_box(&self) -> Option<Rect> {
        let bounds = self.elements.iter().map(|element| match element {
            Element::Path { path, stroke, .. } => {
                let half_width = stroke.map_or(0.0, |(_, w)| w / 2.0);
                path.bounding_box().inflate(half_width, half_width)
            }
            Element::Text {
                pos,
                text,
                font_size,
                ..
            } => estimate_text_bounds(*pos, *font_size, text),
        });
        bounds
            .reduce(|a, b| a.union(b))
            .map(|r| r.inflate(10.0, 10.0))
    }
}

fn estimate_text_bounds(pos: Point, font_size: f64, text: &str) -> Rect {
    // Very rough heuristic: assume ~0.6em average glyph width, alphabetic baseline.
    let width = 0.6 * font_size * text.chars().count() as f64;
    Rect::new(
        pos.x - width / 2.0,
        pos.y - 0.8 * font_size,
        pos.x + width / 2.0,
        pos.y + 0.2 * font_size,
    )
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    out.push_str(&format!(
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    ));
    if rgba.a != 255 {
        let opacity = f64::from(rgba.a) / 255.0;
        out.push_str(&format!(r#" {name}-opacity="{opacity}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
