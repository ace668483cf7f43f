//! Use-Case-Funktionen für die Kurvenliste des Dokuments.

use crate::core::Color;
use crate::AppState;

/// Hängt eine neue leere Kurve an und macht sie aktuell.
pub fn add_curve(state: &mut AppState) {
    state.document.current_entry_mut().curve.clear_selection();
    let index = state.document.add_curve();
    state.gesture.reset();
    state.refresh_panel();
    log::info!(
        "Neue Kurve {} angelegt ({} Kurven)",
        index,
        state.document.len()
    );
}

/// Entfernt die aktuelle Kurve; eine leere Liste wird sofort wieder befüllt.
pub fn delete_current_curve(state: &mut AppState) {
    let removed = state.document.delete_current_curve();
    state.gesture.reset();
    state.refresh_panel();
    log::info!(
        "Kurve '{}' gelöscht, aktuell: {} ({} Kurven)",
        removed.name,
        state.document.current_index(),
        state.document.len()
    );
}

/// Benennt eine Kurve um.
pub fn rename_curve(state: &mut AppState, index: usize, name: &str) {
    if !state.document.rename_curve(index, name) {
        log::warn!("Umbenennen von Kurve {} abgelehnt: '{}'", index, name);
        return;
    }
    state.refresh_panel();
}

/// Schaltet den Bearbeitungsmodus; beim Ausschalten endet jede Geste.
pub fn set_edit_mode(state: &mut AppState, enabled: bool) {
    if !enabled {
        state.document.current_entry_mut().curve.end_drag();
        state.gesture.end_drag();
    }
    state.document.edit_mode = enabled;
    state.refresh_panel();
    log::info!(
        "Bearbeitungsmodus {}",
        if enabled { "an" } else { "aus" }
    );
}

/// Setzt die Hintergrundfarbe.
pub fn set_background_color(state: &mut AppState, color: Color) {
    state.document.background_color = color;
    state.refresh_panel();
}
