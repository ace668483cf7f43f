//! Use-Case: Zeiger-Gesten auf dem Canvas (Kurve wählen, Punkte einfügen,
//! ziehen, löschen).

use crate::app::events::PointerButton;
use crate::core::geometry::distance_to_polyline;
use crate::core::Point;
use crate::AppState;
use glam::Vec2;

/// Ergebnis der Ziel-Auflösung eines Zeiger-Drucks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressTarget {
    /// Nicht-aktuelle Kurve getroffen: nur wechseln, keine Punkt-Mutation
    SwitchCurve(usize),
    /// Kontrollpunkt per Sekundärtaste oder Doppel-Tap löschen
    DeletePoint(usize),
    /// Kontrollpunkt selektieren und ziehen
    DragPoint(usize),
    /// Nichts getroffen: neuen Punkt einfügen
    InsertPoint {
        /// Position in Canvas-Einheiten
        position: Vec2,
        /// Vor dem ersten Punkt einfügen
        at_front: bool,
    },
}

/// Sucht die Kurve, deren gezeichneter Pfad `pos` am nächsten liegt.
///
/// Nur Kurven mit mindestens zwei Punkten kommen in Frage; der Abstand muss
/// strikt unter `curve_pick_radius` liegen.
pub fn pick_curve(state: &AppState, pos: Vec2) -> Option<usize> {
    let threshold = state.options.curve_pick_radius;
    let samples = state.options.curve_sample_count;

    state
        .document
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.curve.len() >= 2)
        .filter_map(|(index, entry)| {
            entry
                .curve
                .visible_paths(samples)
                .iter()
                .filter_map(|path| distance_to_polyline(pos, path))
                .min_by(f32::total_cmp)
                .map(|distance| (index, distance))
        })
        .filter(|&(_, distance)| distance < threshold)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

/// Löst das Ziel eines Zeiger-Drucks an `pos` (Canvas-Koordinaten) auf.
pub fn resolve_press(
    state: &AppState,
    pos: Vec2,
    button: PointerButton,
    timestamp: f64,
) -> PressTarget {
    let current = state.document.current_index();
    if let Some(index) = pick_curve(state, pos) {
        if index != current {
            return PressTarget::SwitchCurve(index);
        }
    }

    let curve = &state.document.current_entry().curve;
    if let Some(index) = curve.hit_test_points(pos, state.point_hit_radius()) {
        let double_tap = button == PointerButton::Primary
            && state.gesture.is_double_tap(
                pos,
                timestamp,
                state.options.double_tap_window_secs,
                state.options.double_tap_max_distance,
            );
        if button == PointerButton::Secondary || double_tap {
            return PressTarget::DeletePoint(index);
        }
        return PressTarget::DragPoint(index);
    }

    PressTarget::InsertPoint {
        position: pos,
        at_front: state.gesture.extend_from_front,
    }
}

/// Aktiviert eine andere Kurve; laufende Gesten der alten Kurve werden verworfen.
pub fn switch_curve(state: &mut AppState, index: usize) {
    state.document.current_entry_mut().curve.clear_selection();
    if !state.document.select_curve(index) {
        log::warn!("Kurve {} existiert nicht", index);
        return;
    }
    state.gesture.reset();
    state.refresh_panel();
    log::info!("Aktuelle Kurve: {}", index);
}

/// Selektiert den Punkt an `index` exklusiv und beginnt den Drag.
pub fn begin_drag_point(state: &mut AppState, index: usize) {
    let curve = &mut state.document.current_entry_mut().curve;
    if !curve.begin_drag(index) {
        log::warn!("Punkt {} existiert nicht", index);
        return;
    }
    let len = curve.len();
    state.gesture.begin_drag(index, len);
    log::debug!("Drag beginnt an Punkt {}", index);
}

/// Fügt einen neuen Kontrollpunkt ein, selektiert ihn und beginnt den Drag.
pub fn insert_point(state: &mut AppState, position: Vec2, at_front: bool) {
    let curve = &mut state.document.current_entry_mut().curve;
    let index = curve.add_point(Point::new(position), at_front);
    log::debug!(
        "Punkt {} eingefügt bei ({:.1}, {:.1})",
        index,
        position.x,
        position.y
    );
    begin_drag_point(state, index);
}

/// Verschiebt den gezogenen Punkt. Ohne laufenden Drag passiert nichts.
pub fn drag_point_to(state: &mut AppState, position: Vec2) {
    let Some(index) = state.gesture.dragging_index() else {
        return;
    };
    let curve = &mut state.document.current_entry_mut().curve;
    if !curve.move_point(index, position) {
        log::warn!("Gezogener Punkt {} existiert nicht mehr", index);
        state.gesture.end_drag();
    }
}

/// Beendet den Drag; die Selektion bleibt erhalten.
pub fn end_drag(state: &mut AppState) {
    state.document.current_entry_mut().curve.end_drag();
    state.gesture.end_drag();
    log::debug!("Drag beendet");
}

/// Entfernt den Kontrollpunkt an `index` der aktuellen Kurve.
pub fn delete_point(state: &mut AppState, index: usize) {
    let curve = &mut state.document.current_entry_mut().curve;
    if curve.remove_point(index).is_none() {
        log::warn!("Punkt {} existiert nicht", index);
        return;
    }
    state.gesture.end_drag();
    state.gesture.last_tap = None;
    state.gesture.extend_from_front = false;
    log::info!("Punkt {} gelöscht", index);
}
