//! Zustandsautomat einer Zeiger-Geste (Maus oder Touch).
//!
//! `Idle` → Druck → `Dragging` → Loslassen → `Idle`. Die Auflösung des
//! Druckziels (Kurvenwechsel, Punkt löschen, ziehen, einfügen) passiert in
//! `use_cases::pointer`; hier liegt nur der Gesten-Zustand.

use glam::Vec2;

/// Phase der laufenden Geste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Ein Kontrollpunkt der aktuellen Kurve wird gezogen
    Dragging {
        /// Index des gezogenen Punkts
        point_index: usize,
    },
}

/// Letzter primärer Druck (für Doppel-Tap-Erkennung)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapRecord {
    /// Position in Canvas-Einheiten
    pub position: Vec2,
    /// Zeitstempel in Sekunden
    pub timestamp: f64,
}

/// Gesten-Zustand des Interaktions-Controllers
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Aktuelle Phase
    pub phase: GesturePhase,
    /// Letzter primärer Druck
    pub last_tap: Option<TapRecord>,
    /// Die letzte Interaktion war ein Drag am ersten Punkt: neue Punkte vorne
    /// einfügen. Jedes Löschen setzt das zurück.
    pub extend_from_front: bool,
}

impl GestureState {
    /// Erstellt einen leeren Gesten-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, solange ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// Index des gezogenen Punkts.
    pub fn dragging_index(&self) -> Option<usize> {
        match self.phase {
            GesturePhase::Dragging { point_index } => Some(point_index),
            GesturePhase::Idle => None,
        }
    }

    /// Wechselt nach `Dragging`. Ein Drag am ersten Punkt einer Kurve mit
    /// mehreren Punkten lässt folgende Einfügungen vorne landen.
    pub fn begin_drag(&mut self, point_index: usize, curve_len: usize) {
        self.phase = GesturePhase::Dragging { point_index };
        self.extend_from_front = point_index == 0 && curve_len > 1;
    }

    /// Wechselt nach `Idle`.
    pub fn end_drag(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// Verwirft Geste, Tap-Historie und Einfüge-Richtung (z.B. nach Kurvenwechsel).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Merkt sich einen primären Druck.
    pub fn record_tap(&mut self, position: Vec2, timestamp: f64) {
        self.last_tap = Some(TapRecord {
            position,
            timestamp,
        });
    }

    /// Prüft, ob ein Druck mit dem vorherigen einen Doppel-Tap bildet.
    pub fn is_double_tap(
        &self,
        position: Vec2,
        timestamp: f64,
        window_secs: f64,
        max_distance: f32,
    ) -> bool {
        let Some(last) = self.last_tap else {
            return false;
        };
        let elapsed = timestamp - last.timestamp;
        (0.0..=window_secs).contains(&elapsed) && last.position.distance(position) <= max_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_tap_requires_time_and_distance_window() {
        let mut gesture = GestureState::new();
        assert!(!gesture.is_double_tap(Vec2::ZERO, 0.0, 0.3, 20.0));

        gesture.record_tap(Vec2::new(100.0, 100.0), 1.0);
        assert!(gesture.is_double_tap(Vec2::new(105.0, 100.0), 1.2, 0.3, 20.0));
        assert!(!gesture.is_double_tap(Vec2::new(105.0, 100.0), 1.5, 0.3, 20.0));
        assert!(!gesture.is_double_tap(Vec2::new(150.0, 100.0), 1.1, 0.3, 20.0));
        // Zeitstempel aus der Vergangenheit zählen nicht
        assert!(!gesture.is_double_tap(Vec2::new(100.0, 100.0), 0.9, 0.3, 20.0));
    }

    #[test]
    fn dragging_first_point_extends_from_front() {
        let mut gesture = GestureState::new();
        gesture.begin_drag(0, 3);
        assert!(gesture.extend_from_front);
        assert_eq!(gesture.dragging_index(), Some(0));

        gesture.end_drag();
        assert!(!gesture.is_dragging());
        assert!(gesture.extend_from_front);

        gesture.begin_drag(2, 3);
        assert!(!gesture.extend_from_front);

        // Einzelpunkt: vorne und hinten sind gleichwertig
        gesture.begin_drag(0, 1);
        assert!(!gesture.extend_from_front);
    }
}
