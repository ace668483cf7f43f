//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Der Kern zeichnet keine Pixel: er liefert Geometrie plus Stil, ein
//! externer Renderer (Canvas, SVG-Writer, GPU) setzt sie um.

use crate::core::{Color, PointRole, StrokeCap, StrokeStyle};
use glam::Vec2;

use super::point_style::PointStyle;

/// Eine zu zeichnende Polylinie
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    /// Stützpunkte in Canvas-Einheiten
    pub points: Vec<Vec2>,
    /// Strichfarbe
    pub color: Color,
    /// Strichbreite
    pub width: f32,
    /// Linienende
    pub cap: StrokeCap,
    /// Strichmuster [Strich, Lücke]; `None` = durchgezogen
    pub dash: Option<[f32; 2]>,
}

impl StrokedPath {
    /// Durchgezogene Polylinie im gegebenen Stil.
    pub fn solid(points: Vec<Vec2>, style: &StrokeStyle) -> Self {
        Self {
            points,
            color: style.color,
            width: style.width,
            cap: style.cap,
            dash: None,
        }
    }
}

/// Zeichenauftrag für eine Kurve des Dokuments
#[derive(Debug, Clone, PartialEq)]
pub struct CurveDrawRequest {
    /// Index im Dokument
    pub index: usize,
    /// Anzeigename
    pub name: String,
    /// Abgetastete Mittellinie (leer, wenn Parallelen gezeichnet werden)
    pub centerline: Vec<Vec2>,
    /// Abgetastete Parallelkurven
    pub parallels: Vec<Vec<Vec2>>,
    /// Strich-Stil
    pub style: StrokeStyle,
    /// Hilfslinien und Punkte für diese Kurve zeichnen
    pub show_overlays: bool,
}

impl CurveDrawRequest {
    /// Alle Pfade, die für diese Kurve gestrichen werden.
    pub fn visible_paths(&self) -> impl Iterator<Item = &[Vec2]> {
        std::iter::once(self.centerline.as_slice())
            .chain(self.parallels.iter().map(Vec::as_slice))
            .filter(|path| !path.is_empty())
    }
}

/// Ein Punkt-Marker mit aufgelöstem Style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMarkerDraw {
    /// Position in Canvas-Einheiten
    pub position: Vec2,
    /// Rolle (Ordinary/Midpoint/Selected)
    pub role: PointRole,
    /// Style aus der Tabelle
    pub style: PointStyle,
}

/// Bearbeitungs-Overlay der aktuellen Kurve
#[derive(Debug, Clone, PartialEq)]
pub struct EditOverlay {
    /// Index der aktuellen Kurve
    pub curve_index: usize,
    /// Weißer Halo unter der Mittellinie
    pub halo: Option<StrokedPath>,
    /// Nachgezeichnete Mittellinie über dem Halo
    pub highlight: Option<StrokedPath>,
    /// Gestricheltes Kontrollpolygon
    pub guides: Option<StrokedPath>,
    /// Punkt-Marker: erst Mittelpunkte, dann Kontrollpunkte
    pub markers: Vec<PointMarkerDraw>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Canvas-Größe [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Hintergrundfarbe
    pub background_color: Color,
    /// Alle Kurven in Dokument-Reihenfolge
    pub curves: Vec<CurveDrawRequest>,
    /// Overlay der aktuellen Kurve (nur im Bearbeitungsmodus, nicht beim Export)
    pub overlay: Option<EditOverlay>,
    /// Export-Modus: Overlays unterdrückt
    pub flatten: bool,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt Kurvengeometrie vorhanden ist.
    pub fn has_geometry(&self) -> bool {
        self.curves
            .iter()
            .any(|curve| curve.visible_paths().next().is_some())
    }
}
