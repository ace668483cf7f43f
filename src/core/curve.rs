//! Kurve: geordnete Kontrollpunkte plus abgeleitete Mittelpunkte und Parallelen.
//!
//! Jede Mutation über die öffentliche API berechnet die abgeleiteten Daten
//! sofort neu, sodass Rendering und Hit-Tests nie veraltete Geometrie sehen.

use super::geometry::{
    compute_midpoints, offset_polyline_bisector, offset_polyline_segments, parallel_distances,
    sample_bezier,
};
use super::point::{Point, PointKind, PointRole};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Größte erlaubte Anzahl Parallelen je Kurve.
pub const MAX_PARALLEL_COUNT: u32 = 200;

/// Verfahren zur Konstruktion der Parallelkurven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallelMode {
    /// Jedes Sehnen-Segment wird entlang seiner Normale verschoben
    #[default]
    SegmentNormal,
    /// Jeder Knoten wird entlang der Winkelhalbierenden verschoben
    VertexBisector,
}

/// Punkt-Marker für Overlay-Darstellung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMarker {
    /// Position in Canvas-Einheiten
    pub position: Vec2,
    /// Darstellungsrolle
    pub role: PointRole,
}

/// Eine editierbare Bézier-Kurve mit optionalen Parallelkurven
#[derive(Debug, Clone, Default)]
pub struct Curve {
    points: Vec<Point>,
    midpoints: Vec<Point>,
    parallel_count: u32,
    parallel_spacing: f32,
    parallel_mode: ParallelMode,
    parallels: Vec<Vec<Vec2>>,
    parallels_valid: bool,
}

impl Curve {
    /// Mindestanzahl Parallelen, ab der Versatzpfade existieren.
    pub const MIN_PARALLELS: u32 = 2;

    /// Erstellt eine leere Kurve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Kurve aus Positionen (alle als Kontrollpunkte).
    pub fn from_positions(positions: impl IntoIterator<Item = Vec2>) -> Self {
        let mut curve = Self {
            points: positions.into_iter().map(Point::new).collect(),
            ..Self::default()
        };
        curve.refresh_derived();
        curve
    }

    // ── Lesender Zugriff ────────────────────────────────────────────

    /// Kontrollpunkte in Pfad-Reihenfolge.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Positionen der Kontrollpunkte.
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Abgeleitete Mittelpunkte (`len − 1` Einträge).
    pub fn midpoints(&self) -> &[Point] {
        &self.midpoints
    }

    /// Versatzpfade (leer bei weniger als zwei Parallelen).
    pub fn parallels(&self) -> &[Vec<Vec2>] {
        &self.parallels
    }

    /// Anzahl Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true`, wenn die Kurve keine Kontrollpunkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Konfigurierte Anzahl Parallelen.
    pub fn parallel_count(&self) -> u32 {
        self.parallel_count
    }

    /// Konfigurierter Abstand zwischen Parallelen.
    pub fn parallel_spacing(&self) -> f32 {
        self.parallel_spacing
    }

    /// Konstruktionsverfahren der Parallelen.
    pub fn parallel_mode(&self) -> ParallelMode {
        self.parallel_mode
    }

    /// `true`, wenn Parallelen statt der Mittellinie gezeichnet werden.
    pub fn has_parallels(&self) -> bool {
        self.parallel_count >= Self::MIN_PARALLELS
    }

    /// Index des selektierten Kontrollpunkts.
    pub fn selected_index(&self) -> Option<usize> {
        self.points.iter().position(|p| p.is_selected)
    }

    /// Index des gezogenen Kontrollpunkts.
    pub fn dragging_index(&self) -> Option<usize> {
        self.points.iter().position(|p| p.is_dragging)
    }

    // ── Parameter ───────────────────────────────────────────────────

    /// Setzt die Anzahl der Parallelen; unter zwei werden sie sofort verworfen.
    pub fn set_parallel_count(&mut self, count: u32) {
        self.parallel_count = count;
        self.invalidate_parallels();
    }

    /// Setzt den Abstand zwischen Parallelen (negative Werte werden auf 0 begrenzt).
    pub fn set_parallel_spacing(&mut self, spacing: f32) {
        self.parallel_spacing = spacing.max(0.0);
        self.invalidate_parallels();
    }

    /// Wählt das Konstruktionsverfahren der Parallelen.
    pub fn set_parallel_mode(&mut self, mode: ParallelMode) {
        self.parallel_mode = mode;
        self.invalidate_parallels();
    }

    /// Berechnet die Versatzpfade neu.
    ///
    /// Unter zwei Parallelen wird die Sammlung geleert. Ohne `force` wird nur
    /// neu berechnet, wenn eine Mutation die Pfade invalidiert hat.
    pub fn recompute_parallels(&mut self, force: bool) {
        if !self.has_parallels() {
            self.parallels.clear();
            self.parallels_valid = true;
            return;
        }
        if self.parallels_valid && !force {
            return;
        }

        let positions = self.positions();
        let offset: fn(&[Vec2], f32) -> Vec<Vec2> = match self.parallel_mode {
            ParallelMode::SegmentNormal => offset_polyline_segments,
            ParallelMode::VertexBisector => offset_polyline_bisector,
        };
        self.parallels = parallel_distances(self.parallel_count, self.parallel_spacing)
            .into_iter()
            .map(|distance| offset(&positions, distance))
            .filter(|path| !path.is_empty())
            .collect();
        self.parallels_valid = true;
    }

    /// Berechnet die Mittelpunkte neu.
    pub fn recompute_midpoints(&mut self) {
        self.midpoints = compute_midpoints(&self.points);
    }

    fn invalidate_parallels(&mut self) {
        self.parallels_valid = false;
        self.recompute_parallels(false);
    }

    fn refresh_derived(&mut self) {
        self.recompute_midpoints();
        self.invalidate_parallels();
    }

    // ── Punkt-Mutation ──────────────────────────────────────────────

    /// Fügt einen Kontrollpunkt am Ende oder (mit `insert_before_first`) am Anfang ein.
    ///
    /// Der Punkt wird immer als Kontrollpunkt übernommen. Gibt den Index zurück.
    pub fn add_point(&mut self, mut point: Point, insert_before_first: bool) -> usize {
        point.kind = PointKind::Control;
        let index = if insert_before_first {
            self.points.insert(0, point);
            0
        } else {
            self.points.push(point);
            self.points.len() - 1
        };
        self.refresh_derived();
        index
    }

    /// Entfernt den Kontrollpunkt an `index`.
    pub fn remove_point(&mut self, index: usize) -> Option<Point> {
        if index >= self.points.len() {
            return None;
        }
        let removed = self.points.remove(index);
        self.refresh_derived();
        Some(removed)
    }

    /// Verschiebt den Kontrollpunkt an `index`.
    pub fn move_point(&mut self, index: usize, position: Vec2) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        if point.position == position {
            return true;
        }
        point.position = position;
        self.refresh_derived();
        true
    }

    // ── Selektion & Drag ────────────────────────────────────────────

    /// Markiert den Punkt an `index` als selektiert und gezogen; alle anderen werden abgewählt.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if index >= self.points.len() {
            return false;
        }
        for (i, point) in self.points.iter_mut().enumerate() {
            point.is_selected = i == index;
            point.is_dragging = i == index;
        }
        true
    }

    /// Beendet jeden laufenden Drag (Selektion bleibt erhalten).
    pub fn end_drag(&mut self) {
        for point in &mut self.points {
            point.is_dragging = false;
        }
    }

    /// Hebt Selektion und Drag aller Punkte auf.
    pub fn clear_selection(&mut self) {
        for point in &mut self.points {
            point.is_selected = false;
            point.is_dragging = false;
        }
    }

    /// Erster Kontrollpunkt, der `pos` innerhalb von `radius` trifft.
    pub fn hit_test_points(&self, pos: Vec2, radius: f32) -> Option<usize> {
        self.points
            .iter()
            .position(|p| p.is_editable() && p.hit_test(pos, radius))
    }

    // ── Zeichen-Geometrie ───────────────────────────────────────────

    /// Abgetastete Mittellinie (leer unter zwei Punkten).
    pub fn draw_curve(&self, samples: usize) -> Vec<Vec2> {
        if self.points.len() < 2 {
            return Vec::new();
        }
        sample_bezier(&self.positions(), samples)
    }

    /// Abgetastete Parallelkurven, je Versatzpfad eine Polylinie.
    pub fn draw_parallels(&self, samples: usize) -> Vec<Vec<Vec2>> {
        if self.points.len() < 2 {
            return Vec::new();
        }
        self.parallels
            .iter()
            .map(|path| sample_bezier(path, samples))
            .collect()
    }

    /// Das Kontrollpolygon als gerade Hilfslinie (leer unter zwei Punkten).
    pub fn draw_guides(&self) -> Vec<Vec2> {
        if self.points.len() < 2 {
            return Vec::new();
        }
        self.positions()
    }

    /// Punkt-Marker: erst die Mittelpunkte, darüber die Kontrollpunkte.
    pub fn draw_all_points(&self) -> Vec<PointMarker> {
        self.midpoints
            .iter()
            .chain(&self.points)
            .map(|p| PointMarker {
                position: p.position,
                role: p.role(),
            })
            .collect()
    }

    /// Tatsächlich gezeichnete Pfade: Parallelen, sonst die Mittellinie.
    pub fn visible_paths(&self, samples: usize) -> Vec<Vec<Vec2>> {
        if self.has_parallels() {
            self.draw_parallels(samples)
        } else {
            let centerline = self.draw_curve(samples);
            if centerline.is_empty() {
                Vec::new()
            } else {
                vec![centerline]
            }
        }
    }
}
