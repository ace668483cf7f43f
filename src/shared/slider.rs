//! Quadratische Slider-Abbildung des Eigenschaften-Panels.
//!
//! Slider-Position 0..=100 → `min + (p/100)² · (max − min)`. Feine Werte am
//! unteren Ende bekommen so mehr Slider-Weg.

use serde::{Deserialize, Serialize};

/// Obere Grenze der Slider-Position.
pub const SLIDER_MAX_POSITION: f32 = 100.0;

/// Wertebereich eines Sliders
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    /// Wert bei Position 0
    pub min: f32,
    /// Wert bei Position 100
    pub max: f32,
}

impl SliderRange {
    /// Erstellt einen Bereich.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Slider-Position → Wert. Positionen außerhalb 0..=100 werden begrenzt.
    pub fn value_at(&self, position: f32) -> f32 {
        let p = (position / SLIDER_MAX_POSITION).clamp(0.0, 1.0);
        self.min + p * p * (self.max - self.min)
    }

    /// Wert → Slider-Position (Umkehrung von [`value_at`](Self::value_at)).
    pub fn position_of(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        let normalized = ((value - self.min) / span).clamp(0.0, 1.0);
        normalized.sqrt() * SLIDER_MAX_POSITION
    }
}

/// Strichbreite (0.1..200).
pub const LINE_WIDTH_SLIDER: SliderRange = SliderRange::new(0.1, 200.0);
/// Anzahl Parallelen (0..200, gerundet).
pub const PARALLEL_COUNT_SLIDER: SliderRange = SliderRange::new(0.0, 200.0);
/// Abstand der Parallelen (2..100).
pub const PARALLEL_SPACING_SLIDER: SliderRange = SliderRange::new(2.0, 100.0);

/// Slider-Position → ganzzahlige Anzahl Parallelen.
pub fn parallel_count_at(range: &SliderRange, position: f32) -> u32 {
    range.value_at(position).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_map_to_range_limits() {
        assert_relative_eq!(LINE_WIDTH_SLIDER.value_at(0.0), 0.1);
        assert_relative_eq!(LINE_WIDTH_SLIDER.value_at(100.0), 200.0);
        assert_relative_eq!(PARALLEL_SPACING_SLIDER.value_at(50.0), 2.0 + 0.25 * 98.0);
    }

    #[test]
    fn inverse_mapping_recovers_position() {
        let range = PARALLEL_SPACING_SLIDER;
        for position in [0.0, 12.5, 50.0, 77.0, 100.0] {
            let value = range.value_at(position);
            assert_relative_eq!(range.position_of(value), position, epsilon = 1e-3);
        }
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_relative_eq!(LINE_WIDTH_SLIDER.value_at(150.0), 200.0);
        assert_relative_eq!(LINE_WIDTH_SLIDER.position_of(-5.0), 0.0);
        assert_relative_eq!(SliderRange::new(3.0, 3.0).position_of(3.0), 0.0);
    }

    #[test]
    fn parallel_count_is_rounded() {
        assert_eq!(parallel_count_at(&PARALLEL_COUNT_SLIDER, 0.0), 0);
        assert_eq!(parallel_count_at(&PARALLEL_COUNT_SLIDER, 10.0), 2);
        assert_eq!(parallel_count_at(&PARALLEL_COUNT_SLIDER, 100.0), 200);
    }
}
