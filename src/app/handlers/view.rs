//! Handler für View-Operationen.

use crate::app::AppState;

/// Setzt die Größe des Canvas-Elements in Pixeln.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
    state.request_redraw();
}
