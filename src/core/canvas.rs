//! Abbildung von Element-Pixeln auf den festen Canvas-Koordinatenraum.

use glam::Vec2;

/// Fester Zeichenraum, in dem alle Kurven leben
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasView {
    /// Canvas-Größe in Canvas-Einheiten [Breite, Höhe]
    pub size: Vec2,
}

impl CanvasView {
    /// Standard-Canvas-Größe.
    pub const DEFAULT_SIZE: [f32; 2] = [1080.0, 1080.0];

    /// Erstellt einen Canvas der gegebenen Größe.
    pub fn new(size: [f32; 2]) -> Self {
        Self {
            size: Vec2::from_array(size),
        }
    }

    /// Konvertiert elementlokale Pixel in Canvas-Koordinaten.
    ///
    /// Skaliert proportional (`x · canvas_width / element_width`). Bei
    /// degenerierter Elementgröße bleibt die Position unverändert.
    pub fn screen_to_canvas(&self, screen_pos: Vec2, element_size: Vec2) -> Vec2 {
        if element_size.x <= 0.0 || element_size.y <= 0.0 {
            return screen_pos;
        }
        screen_pos * (self.size / element_size)
    }
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
