//! Approximate text metrics.
//!
//! No fonts are embedded; widths are estimated from a per-glyph-class
//! advance table calibrated against a common sans face. Rendered SVG
//! resolves to the viewer's sans-serif, so measurements only need to be
//! good enough for margin and label-column sizing.

use crate::primitives::{FontWeight, TextStyle};

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

/// Advance width of one glyph in em units.
fn char_advance(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | '\'' | '|' | '.' | ',' | ':' | ';' | '!' => 0.28,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' | ' ' => 0.36,
        'm' | 'w' | 'M' | 'W' | '%' | '@' => 0.88,
        'A'..='Z' | '0'..='9' | '_' | '+' | '=' | '<' | '>' => 0.62,
        _ => 0.52,
    }
}

/// Estimate text width and height in points.
pub fn measure_text(text: &str, size_pt: f64) -> TextMetrics {
    let em: f64 = text.chars().map(char_advance).sum();
    TextMetrics { width: em * size_pt, height: size_pt * 1.2, ascent: size_pt * 0.75 }
}

/// Measure with a [`TextStyle`]; bold text runs a little wider.
pub fn measure_styled(text: &str, style: &TextStyle) -> TextMetrics {
    let m = measure_text(text, style.size);
    match style.weight {
        FontWeight::Bold => TextMetrics { width: m.width * 1.05, ..m },
        FontWeight::Regular => m,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_hello() {
        let m = measure_text("Hello", 12.0);
        assert!(m.width > 20.0);
        assert!(m.height > 8.0);
        assert!(m.ascent > 0.0);
    }

    #[test]
    fn wider_text_measures_wider() {
        let narrow = measure_text("ill", 10.0);
        let wide = measure_text("WWW", 10.0);
        assert!(wide.width > narrow.width);
    }

    #[test]
    fn bold_wider_than_regular() {
        let style = TextStyle { weight: FontWeight::Bold, ..Default::default() };
        let r = measure_text("Test", 10.0);
        let b = measure_styled("Test", &style);
        assert!(b.width > r.width);
    }

    #[test]
    fn scales_with_size() {
        let small = measure_text("abc", 8.0);
        let large = measure_text("abc", 16.0);
        assert!((large.width - 2.0 * small.width).abs() < 1e-9);
    }
}
