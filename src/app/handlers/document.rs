//! Handler für Kurvenliste und Dokument-Einstellungen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Color;

/// Hängt eine neue Kurve an.
pub fn add_curve(state: &mut AppState) {
    use_cases::document::add_curve(state);
    state.request_redraw();
}

/// Löscht die aktuelle Kurve.
pub fn delete_current_curve(state: &mut AppState) {
    use_cases::document::delete_current_curve(state);
    state.request_redraw();
}

/// Benennt eine Kurve um.
pub fn rename_curve(state: &mut AppState, index: usize, name: &str) {
    use_cases::document::rename_curve(state, index, name);
}

/// Schaltet den Bearbeitungsmodus.
pub fn set_edit_mode(state: &mut AppState, enabled: bool) {
    use_cases::document::set_edit_mode(state, enabled);
    state.request_redraw();
}

/// Setzt die Hintergrundfarbe.
pub fn set_background_color(state: &mut AppState, color: Color) {
    use_cases::document::set_background_color(state, color);
    state.request_redraw();
}
