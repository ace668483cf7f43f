//! Style-Tabelle für Punkt-Marker, indiziert über `PointRole`.

use crate::core::style::{Color, WHITE};
use crate::core::PointRole;
use serde::{Deserialize, Serialize};

/// Darstellung eines einzelnen Punkt-Markers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    /// Füllfarbe
    pub fill: Color,
    /// Umrandungsfarbe
    pub stroke: Color,
    /// Umrandungsbreite
    pub stroke_width: f32,
    /// Radius in Canvas-Einheiten
    pub radius: f32,
}

/// Style je Punkt-Rolle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyleTable {
    /// Normaler Kontrollpunkt
    pub ordinary: PointStyle,
    /// Abgeleiteter Mittelpunkt
    pub midpoint: PointStyle,
    /// Selektierter Kontrollpunkt
    pub selected: PointStyle,
}

impl PointStyleTable {
    /// Liefert den Style für eine Rolle.
    pub fn style_for(&self, role: PointRole) -> PointStyle {
        match role {
            PointRole::Ordinary => self.ordinary,
            PointRole::Midpoint => self.midpoint,
            PointRole::Selected => self.selected,
        }
    }
}

impl Default for PointStyleTable {
    fn default() -> Self {
        Self {
            ordinary: PointStyle {
                fill: [0.0, 0.0, 0.0, 1.0],
                stroke: WHITE,
                stroke_width: 2.0,
                radius: 5.0,
            },
            midpoint: PointStyle {
                fill: [0.4, 0.4, 0.4, 1.0],
                stroke: WHITE,
                stroke_width: 2.0,
                radius: 4.0,
            },
            selected: PointStyle {
                fill: [1.0, 0.0, 0.0, 1.0],
                stroke: WHITE,
                stroke_width: 2.0,
                radius: 6.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_points_are_largest() {
        let table = PointStyleTable::default();
        let selected = table.style_for(PointRole::Selected);
        assert!(selected.radius > table.style_for(PointRole::Ordinary).radius);
        assert!(selected.radius > table.style_for(PointRole::Midpoint).radius);
        assert_eq!(selected.fill, [1.0, 0.0, 0.0, 1.0]);
    }
}
