//! Strich-Stil einer Kurve: Farbe, Breite, Linienende.

use serde::{Deserialize, Serialize};

/// RGBA-Farbe, Komponenten in 0.0..=1.0
pub type Color = [f32; 4];

/// Schwarz, deckend.
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
/// Weiß, deckend.
pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

/// Standard-Strichbreite neuer Kurven.
pub const DEFAULT_STROKE_WIDTH: f32 = 5.0;
/// Kleinste erlaubte Strichbreite.
pub const MIN_STROKE_WIDTH: f32 = 0.1;
/// Größte erlaubte Strichbreite.
pub const MAX_STROKE_WIDTH: f32 = 200.0;

/// Form der Linienenden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeCap {
    /// Bündig am Endpunkt
    #[default]
    Butt,
    /// Halbkreis über den Endpunkt hinaus
    Round,
    /// Quadrat über den Endpunkt hinaus
    Square,
}

impl StrokeCap {
    /// Name wie in SVG/Canvas (`butt`, `round`, `square`).
    pub fn as_str(self) -> &'static str {
        match self {
            StrokeCap::Butt => "butt",
            StrokeCap::Round => "round",
            StrokeCap::Square => "square",
        }
    }
}

/// Strich-Stil einer Kurve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Strichfarbe
    pub color: Color,
    /// Strichbreite in Canvas-Einheiten
    pub width: f32,
    /// Linienende
    pub cap: StrokeCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: DEFAULT_STROKE_WIDTH,
            cap: StrokeCap::Butt,
        }
    }
}

/// Begrenzt eine Strichbreite auf den erlaubten Bereich.
pub fn clamp_stroke_width(width: f32) -> f32 {
    if width.is_nan() {
        return DEFAULT_STROKE_WIDTH;
    }
    width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
}

/// Parst `#rrggbb` oder `#rrggbbaa` (Groß-/Kleinschreibung egal).
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#')?;
    if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
        return None;
    }

    let channel = |i: usize| -> Option<f32> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };

    let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
    Some([channel(0)?, channel(2)?, channel(4)?, alpha])
}

/// Formatiert als `#rrggbb`, bei nicht-deckender Farbe als `#rrggbbaa`.
pub fn color_to_hex(color: Color) -> String {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    let [r, g, b, a] = color.map(byte);
    if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        assert_eq!(parse_hex_color("#000000"), Some(BLACK));
        assert_eq!(parse_hex_color("#FFFFFF"), Some(WHITE));
        assert_eq!(color_to_hex(WHITE), "#ffffff");
        assert_eq!(color_to_hex([1.0, 0.0, 0.0, 0.5]), "#ff000080");

        let parsed = parse_hex_color("#ff000080").unwrap();
        assert_eq!(color_to_hex(parsed), "#ff000080");
    }

    #[test]
    fn invalid_hex_is_rejected() {
        for bad in ["", "000000", "#12345", "#zzzzzz", "#1234567", "#ääää"] {
            assert_eq!(parse_hex_color(bad), None, "{bad}");
        }
    }

    #[test]
    fn stroke_width_is_clamped() {
        assert_eq!(clamp_stroke_width(0.0), MIN_STROKE_WIDTH);
        assert_eq!(clamp_stroke_width(500.0), MAX_STROKE_WIDTH);
        assert_eq!(clamp_stroke_width(7.5), 7.5);
        assert_eq!(clamp_stroke_width(f32::NAN), DEFAULT_STROKE_WIDTH);
    }
}
