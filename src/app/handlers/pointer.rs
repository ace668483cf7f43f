//! Handler für Zeiger-Gesten auf dem Canvas.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktiviert die per Klick getroffene Kurve.
pub fn select_curve(state: &mut AppState, index: usize) {
    use_cases::pointer::switch_curve(state, index);
    state.request_redraw();
}

/// Löscht einen Kontrollpunkt der aktuellen Kurve.
pub fn delete_point(state: &mut AppState, index: usize) {
    use_cases::pointer::delete_point(state, index);
    state.refresh_panel();
    state.request_redraw();
}

/// Beginnt den Drag eines bestehenden Punkts.
pub fn begin_drag(state: &mut AppState, index: usize) {
    use_cases::pointer::begin_drag_point(state, index);
    state.request_redraw();
}

/// Fügt einen Punkt ein und beginnt dessen Drag.
pub fn insert_point(state: &mut AppState, position: glam::Vec2, at_front: bool) {
    use_cases::pointer::insert_point(state, position, at_front);
    state.request_redraw();
}

/// Verschiebt den gezogenen Punkt.
pub fn drag_to(state: &mut AppState, position: glam::Vec2) {
    use_cases::pointer::drag_point_to(state, position);
    state.request_redraw();
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::pointer::end_drag(state);
    state.request_redraw();
}

/// Merkt sich einen primären Druck für die Doppel-Tap-Erkennung.
pub fn record_tap(state: &mut AppState, position: glam::Vec2, timestamp: f64) {
    state.gesture.record_tap(position, timestamp);
}
