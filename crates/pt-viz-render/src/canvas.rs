use std::fmt::Write as FmtWrite;

use crate::color::Color;
use crate::primitives::*;
use crate::text::{TextMetrics, measure_styled};

/// Immediate-mode SVG canvas. Coordinates in points (1pt = 1/72").
///
/// Elements are written straight into the body buffer; `finish_svg`
/// wraps them with the document header and a white background.
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    body: String,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, body: String::with_capacity(16 * 1024) }
    }

    // --- Drawing primitives ---

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style) {
        write!(self.body, r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}""#)
            .unwrap();
        self.write_style_attrs(style);
        self.body.push_str(" />\n");
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        write!(self.body, r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}""#)
            .unwrap();
        self.write_line_attrs(style);
        self.body.push_str(" />\n");
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, style: &Style) {
        write!(self.body, r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}""#).unwrap();
        self.write_style_attrs(style);
        self.body.push_str(" />\n");
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        write!(self.body, r#"<text x="{x:.2}" y="{y:.2}""#).unwrap();
        write!(self.body, r#" font-family="Inter, sans-serif" font-size="{:.1}""#, style.size)
            .unwrap();
        write!(self.body, r#" fill="{}""#, style.color.to_svg_fill()).unwrap();
        write!(self.body, r#" text-anchor="{}""#, style.anchor.as_str()).unwrap();
        write!(self.body, r#" dominant-baseline="{}""#, style.baseline.as_str()).unwrap();
        if style.weight == FontWeight::Bold {
            self.body.push_str(r#" font-weight="bold""#);
        }
        self.body.push('>');
        for ch in content.chars() {
            match ch {
                '<' => self.body.push_str("&lt;"),
                '>' => self.body.push_str("&gt;"),
                '&' => self.body.push_str("&amp;"),
                '"' => self.body.push_str("&quot;"),
                _ => self.body.push(ch),
            }
        }
        self.body.push_str("</text>\n");
    }

    /// Horizontal error bar: line from `x_lo` to `x_hi` at `y`, with
    /// vertical caps.
    pub fn error_bar_h(&mut self, x_lo: f64, x_hi: f64, y: f64, cap_height: f64, style: &LineStyle) {
        self.line(x_lo, y, x_hi, y, style);
        if cap_height > 0.0 {
            let half = cap_height / 2.0;
            self.line(x_lo, y - half, x_lo, y + half, style);
            self.line(x_hi, y - half, x_hi, y + half, style);
        }
    }

    /// Data marker (filled or open circle).
    pub fn marker(&mut self, x: f64, y: f64, marker: &MarkerStyle) {
        let style = if marker.fill {
            Style {
                fill: Some(marker.color),
                stroke: Some(marker.color),
                stroke_width: 0.5,
                opacity: 1.0,
            }
        } else {
            Style {
                fill: Some(Color::rgb(255, 255, 255)),
                stroke: Some(marker.color),
                stroke_width: 1.0,
                opacity: 1.0,
            }
        };
        self.circle(x, y, marker.size, &style);
    }

    // --- Text measurement ---

    pub fn measure_text(&self, content: &str, style: &TextStyle) -> TextMetrics {
        measure_styled(content, style)
    }

    // --- SVG output ---

    pub fn finish_svg(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 512);
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )
        .unwrap();
        writeln!(out, r#"<rect width="{}" height="{}" fill="white" />"#, self.width, self.height)
            .unwrap();
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn write_style_attrs(&mut self, style: &Style) {
        if let Some(fill) = &style.fill {
            write!(self.body, r#" fill="{}""#, fill.to_svg_fill()).unwrap();
        } else {
            self.body.push_str(r#" fill="none""#);
        }
        if let Some(stroke) = &style.stroke {
            write!(self.body, r#" stroke="{}""#, stroke.to_svg_fill()).unwrap();
            write!(self.body, r#" stroke-width="{:.2}""#, style.stroke_width).unwrap();
        }
        if (style.opacity - 1.0).abs() > 1e-4 {
            write!(self.body, r#" opacity="{:.3}""#, style.opacity).unwrap();
        }
    }

    fn write_line_attrs(&mut self, style: &LineStyle) {
        write!(self.body, r#" stroke="{}""#, style.color.to_svg_fill()).unwrap();
        write!(self.body, r#" stroke-width="{:.2}""#, style.width).unwrap();
        if let Some(dash) = &style.dash {
            write!(self.body, r#" stroke-dasharray="{dash}""#).unwrap();
        }
    }
}
