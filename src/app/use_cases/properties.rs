//! Use-Case-Funktionen für die Eigenschaften der aktuellen Kurve.
//!
//! Jede Änderung läuft durch die Kurven-Setter, die abgeleitete Geometrie
//! sofort neu berechnen; danach wird der Panel-Spiegel aktualisiert.

use crate::core::style::clamp_stroke_width;
use crate::core::{Color, ParallelMode, StrokeCap, MAX_PARALLEL_COUNT};
use crate::AppState;

/// Setzt die Strichfarbe.
pub fn set_stroke_color(state: &mut AppState, color: Color) {
    state.document.current_entry_mut().style.color = color;
    state.refresh_panel();
}

/// Setzt die Strichbreite (begrenzt auf den erlaubten Bereich).
pub fn set_line_width(state: &mut AppState, width: f32) {
    let clamped = clamp_stroke_width(width);
    if clamped != width {
        log::warn!("Strichbreite {} auf {} begrenzt", width, clamped);
    }
    state.document.current_entry_mut().style.width = clamped;
    state.refresh_panel();
}

/// Setzt das Linienende.
pub fn set_line_cap(state: &mut AppState, cap: StrokeCap) {
    state.document.current_entry_mut().style.cap = cap;
    state.refresh_panel();
}

/// Setzt die Anzahl der Parallelen (begrenzt auf 0..=200).
pub fn set_parallel_count(state: &mut AppState, count: u32) {
    let clamped = count.min(MAX_PARALLEL_COUNT);
    state
        .document
        .current_entry_mut()
        .curve
        .set_parallel_count(clamped);
    state.refresh_panel();
}

/// Setzt den Abstand der Parallelen (negative Werte → 0).
pub fn set_parallel_spacing(state: &mut AppState, spacing: f32) {
    if spacing.is_nan() {
        log::warn!("Ungültiger Abstand ignoriert");
        return;
    }
    state
        .document
        .current_entry_mut()
        .curve
        .set_parallel_spacing(spacing);
    state.refresh_panel();
}

/// Wählt das Konstruktionsverfahren der Parallelen.
pub fn set_parallel_mode(state: &mut AppState, mode: ParallelMode) {
    state
        .document
        .current_entry_mut()
        .curve
        .set_parallel_mode(mode);
    state.refresh_panel();
}
