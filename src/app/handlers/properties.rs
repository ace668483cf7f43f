//! Handler für die Eigenschaften der aktuellen Kurve.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Color, ParallelMode, StrokeCap};

/// Setzt die Strichfarbe.
pub fn set_stroke_color(state: &mut AppState, color: Color) {
    use_cases::properties::set_stroke_color(state, color);
    state.request_redraw();
}

/// Setzt die Strichbreite.
pub fn set_line_width(state: &mut AppState, width: f32) {
    use_cases::properties::set_line_width(state, width);
    state.request_redraw();
}

/// Setzt das Linienende.
pub fn set_line_cap(state: &mut AppState, cap: StrokeCap) {
    use_cases::properties::set_line_cap(state, cap);
    state.request_redraw();
}

/// Setzt die Anzahl der Parallelen.
pub fn set_parallel_count(state: &mut AppState, count: u32) {
    use_cases::properties::set_parallel_count(state, count);
    state.request_redraw();
}

/// Setzt den Abstand der Parallelen.
pub fn set_parallel_spacing(state: &mut AppState, spacing: f32) {
    use_cases::properties::set_parallel_spacing(state, spacing);
    state.request_redraw();
}

/// Setzt das Konstruktionsverfahren.
pub fn set_parallel_mode(state: &mut AppState, mode: ParallelMode) {
    use_cases::properties::set_parallel_mode(state, mode);
    state.request_redraw();
}
