//! Serialisierbare Snapshots von Kurve und Dokument.

use crate::core::style::{
    clamp_stroke_width, color_to_hex, parse_hex_color, DEFAULT_STROKE_WIDTH, WHITE,
};
use crate::core::{
    Curve, CurveEntry, Document, ParallelMode, Point, PointKind, StrokeCap, StrokeStyle,
    MAX_PARALLEL_COUNT,
};
use anyhow::{anyhow, Context, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ein Kontrollpunkt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSnapshot {
    /// X-Koordinate in Canvas-Einheiten
    pub x: f32,
    /// Y-Koordinate in Canvas-Einheiten
    pub y: f32,
    /// Punktart; fehlt sie, gilt der Eintrag als Kontrollpunkt
    #[serde(default)]
    pub kind: PointKind,
}

impl From<&Point> for PointSnapshot {
    fn from(point: &Point) -> Self {
        Self {
            x: point.position.x,
            y: point.position.y,
            kind: point.kind,
        }
    }
}

/// Kontrollpolygon plus Parallelen-Parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSnapshot {
    /// Kontrollpunkte in Reihenfolge
    pub points: Vec<PointSnapshot>,
    /// Anzahl Parallelen (unter zwei: keine)
    #[serde(default)]
    pub parallel_count: u32,
    /// Abstand benachbarter Parallelen
    #[serde(default)]
    pub parallel_spacing: f32,
    /// Konstruktionsverfahren der Parallelen
    #[serde(default)]
    pub parallel_mode: ParallelMode,
}

impl CurveSnapshot {
    /// Erfasst den Zustand einer Kurve.
    pub fn from_curve(curve: &Curve) -> Self {
        Self {
            points: curve.points().iter().map(PointSnapshot::from).collect(),
            parallel_count: curve.parallel_count(),
            parallel_spacing: curve.parallel_spacing(),
            parallel_mode: curve.parallel_mode(),
        }
    }

    /// Baut die Kurve samt abgeleiteter Geometrie wieder auf.
    ///
    /// Als Mittelpunkt markierte Einträge werden übersprungen, die Anzahl
    /// Parallelen wird auf `MAX_PARALLEL_COUNT` begrenzt.
    pub fn into_curve(self) -> Curve {
        let mut curve = Curve::from_positions(
            self.points
                .iter()
                .filter(|p| p.kind == PointKind::Control)
                .map(|p| Vec2::new(p.x, p.y)),
        );
        curve.set_parallel_mode(self.parallel_mode);
        curve.set_parallel_spacing(self.parallel_spacing);
        let count = self.parallel_count.min(MAX_PARALLEL_COUNT);
        if count != self.parallel_count {
            log::warn!(
                "Anzahl Parallelen {} auf {} begrenzt",
                self.parallel_count,
                count
            );
        }
        curve.set_parallel_count(count);
        curve
    }
}

/// Benannte, gestylte Kurve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveEntrySnapshot {
    /// Anzeigename
    pub name: String,
    /// Geometrie und Parallelen-Parameter
    pub curve: CurveSnapshot,
    /// Hex-Farbe `#rrggbb` oder `#rrggbbaa`
    pub color: String,
    /// Strichbreite, beim Laden auf den erlaubten Bereich begrenzt
    #[serde(default = "default_width")]
    pub width: f32,
    /// Linienende
    #[serde(default)]
    pub cap: StrokeCap,
}

fn default_width() -> f32 {
    DEFAULT_STROKE_WIDTH
}

impl CurveEntrySnapshot {
    /// Erfasst einen Dokument-Eintrag.
    pub fn from_entry(entry: &CurveEntry) -> Self {
        Self {
            name: entry.name.clone(),
            curve: CurveSnapshot::from_curve(&entry.curve),
            color: color_to_hex(entry.style.color),
            width: entry.style.width,
            cap: entry.style.cap,
        }
    }

    /// Baut den Eintrag wieder auf; ungültige Farben sind ein Fehler.
    pub fn into_entry(self) -> Result<CurveEntry> {
        let color = parse_hex_color(&self.color)
            .ok_or_else(|| anyhow!("Ungültige Farbe '{}' in Kurve '{}'", self.color, self.name))?;
        let style = StrokeStyle {
            color,
            width: clamp_stroke_width(self.width),
            cap: self.cap,
        };
        Ok(CurveEntry::with_curve(self.name, self.curve.into_curve(), style))
    }
}

/// Vollständiges Dokument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Alle Kurven in Reihenfolge
    pub curves: Vec<CurveEntrySnapshot>,
    /// Index der aktuellen Kurve (wird beim Laden repariert)
    #[serde(default)]
    pub current: usize,
    /// Bearbeitungsmodus
    #[serde(default = "default_edit_mode")]
    pub edit_mode: bool,
    /// Hintergrundfarbe als Hex-String
    #[serde(default = "default_background_color")]
    pub background_color: String,
}

fn default_edit_mode() -> bool {
    true
}

fn default_background_color() -> String {
    color_to_hex(WHITE)
}

impl DocumentSnapshot {
    /// Erfasst ein Dokument.
    pub fn from_document(document: &Document) -> Self {
        Self {
            curves: document
                .entries()
                .iter()
                .map(CurveEntrySnapshot::from_entry)
                .collect(),
            current: document.current_index(),
            edit_mode: document.edit_mode,
            background_color: color_to_hex(document.background_color),
        }
    }

    /// Baut das Dokument wieder auf. Leere Listen und ungültige Indizes
    /// werden repariert, ungültige Farben sind ein Fehler.
    pub fn into_document(self) -> Result<Document> {
        let background_color = parse_hex_color(&self.background_color)
            .ok_or_else(|| anyhow!("Ungültige Hintergrundfarbe '{}'", self.background_color))?;
        let entries = self
            .curves
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .into_entry()
                    .with_context(|| format!("Kurve {} nicht lesbar", index))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut document = Document::from_entries(entries, self.current);
        document.edit_mode = self.edit_mode;
        document.background_color = background_color;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_snapshot_restores_parallels() {
        let mut curve = Curve::from_positions([Vec2::ZERO, Vec2::new(100.0, 0.0)]);
        curve.set_parallel_spacing(4.0);
        curve.set_parallel_count(3);

        let restored = CurveSnapshot::from_curve(&curve).into_curve();
        assert_eq!(restored.positions(), curve.positions());
        assert_eq!(restored.parallels(), curve.parallels());
        assert_eq!(restored.midpoints().len(), 1);
    }

    #[test]
    fn midpoint_entries_are_not_control_points() {
        let snapshot = CurveSnapshot {
            points: vec![
                PointSnapshot { x: 0.0, y: 0.0, kind: PointKind::Control },
                PointSnapshot { x: 5.0, y: 0.0, kind: PointKind::Midpoint },
                PointSnapshot { x: 10.0, y: 0.0, kind: PointKind::Control },
            ],
            parallel_count: 0,
            parallel_spacing: 0.0,
            parallel_mode: ParallelMode::default(),
        };
        assert_eq!(snapshot.into_curve().len(), 2);
    }

    #[test]
    fn invalid_color_is_an_error() {
        let snapshot = CurveEntrySnapshot {
            name: "kaputt".into(),
            curve: CurveSnapshot::from_curve(&Curve::new()),
            color: "rot".into(),
            width: 5.0,
            cap: StrokeCap::Butt,
        };
        assert!(snapshot.into_entry().is_err());
    }

    #[test]
    fn document_roundtrip_keeps_state() {
        let mut doc = Document::seeded();
        doc.select_curve(1);
        doc.edit_mode = false;
        doc.background_color = [0.0, 0.0, 1.0, 1.0];

        let restored = DocumentSnapshot::from_document(&doc)
            .into_document()
            .unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.current_index(), 1);
        assert!(!restored.edit_mode);
        assert_eq!(restored.background_color, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(restored.entries()[0].name, "Curve 0");
    }
}
