//! Punkt einer Kurve: Kontrollpunkt oder abgeleiteter Mittelpunkt.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Art eines Punkts innerhalb einer Kurve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    /// Vom Benutzer gesetzter Kontrollpunkt
    #[default]
    Control,
    /// Abgeleiteter Mittelpunkt zweier Kontrollpunkte (nicht editierbar)
    Midpoint,
}

/// Darstellungsrolle eines Punkt-Markers (Lookup-Schlüssel für die Style-Tabelle)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRole {
    /// Normaler Kontrollpunkt
    Ordinary,
    /// Abgeleiteter Mittelpunkt
    Midpoint,
    /// Selektierter Kontrollpunkt
    Selected,
}

/// Ein Punkt im festen Canvas-Koordinatensystem
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Position in Canvas-Einheiten
    pub position: Vec2,
    /// Kontrollpunkt oder Mittelpunkt
    pub kind: PointKind,
    /// Punkt ist aktuell selektiert
    pub is_selected: bool,
    /// Punkt wird aktuell gezogen
    pub is_dragging: bool,
}

impl Point {
    /// Erstellt einen neuen Kontrollpunkt.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            kind: PointKind::Control,
            is_selected: false,
            is_dragging: false,
        }
    }

    /// Erstellt einen abgeleiteten Mittelpunkt.
    pub fn midpoint(position: Vec2) -> Self {
        Self {
            kind: PointKind::Midpoint,
            ..Self::new(position)
        }
    }

    /// Gibt `true` zurück, wenn der Punkt vom Benutzer verschoben werden darf.
    pub fn is_editable(&self) -> bool {
        self.kind == PointKind::Control
    }

    /// Trefferprüfung: liegt `pos` strikt innerhalb von `radius` um den Punkt?
    pub fn hit_test(&self, pos: Vec2, radius: f32) -> bool {
        self.position.distance(pos) < radius
    }

    /// Rolle für die Darstellung (Selektion hat Vorrang vor der Art).
    pub fn role(&self) -> PointRole {
        match self.kind {
            PointKind::Midpoint => PointRole::Midpoint,
            PointKind::Control if self.is_selected => PointRole::Selected,
            PointKind::Control => PointRole::Ordinary,
        }
    }
}
