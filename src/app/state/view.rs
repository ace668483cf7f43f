use crate::core::CanvasView;
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Abbildung Element-Pixel → Canvas
    pub canvas: CanvasView,
    /// Aktuelle Größe des Canvas-Elements in Pixeln
    pub viewport_size: [f32; 2],
    /// Eine Mutation hat ein Neuzeichnen angefordert
    pub redraw_requested: bool,
}

impl ViewState {
    /// Erstellt den View-Zustand; das Element hat anfangs Canvas-Größe.
    pub fn new(canvas_size: [f32; 2]) -> Self {
        Self {
            canvas: CanvasView::new(canvas_size),
            viewport_size: canvas_size,
            redraw_requested: true,
        }
    }

    /// Rechnet eine elementlokale Zeigerposition in Canvas-Koordinaten um.
    pub fn screen_to_canvas(&self, screen_pos: Vec2) -> Vec2 {
        self.canvas
            .screen_to_canvas(screen_pos, Vec2::from_array(self.viewport_size))
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(CanvasView::DEFAULT_SIZE)
    }
}
