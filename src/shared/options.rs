//! Zentrale Konfiguration für den Curvita-Kurveneditor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::point_style::PointStyleTable;
use super::slider::{
    SliderRange, LINE_WIDTH_SLIDER, PARALLEL_COUNT_SLIDER, PARALLEL_SPACING_SLIDER,
};
use crate::core::style::{Color, StrokeCap, StrokeStyle, BLACK, DEFAULT_STROKE_WIDTH, WHITE};
use crate::core::CanvasView;
use serde::{Deserialize, Serialize};

// ── Hit-Tests ───────────────────────────────────────────────────────

/// Minimaler Trefferradius für Kontrollpunkte.
pub const POINT_HIT_RADIUS_MIN: f32 = 20.0;
/// Trefferradius als Vielfaches der Strichbreite.
pub const POINT_HIT_WIDTH_FACTOR: f32 = 2.0;
/// Abstandsschwelle für die Kurvenwahl per Klick.
pub const CURVE_PICK_RADIUS: f32 = 20.0;

// ── Abtastung ───────────────────────────────────────────────────────

/// Stützstellen pro gezeichnetem Bézier-Pfad.
pub const CURVE_SAMPLE_COUNT: usize = 101;

// ── Doppel-Tap ──────────────────────────────────────────────────────

/// Zeitfenster für Doppel-Tap/Doppelklick in Sekunden.
pub const DOUBLE_TAP_WINDOW_SECS: f64 = 0.3;
/// Maximaler Abstand zweier Taps eines Doppel-Taps.
pub const DOUBLE_TAP_MAX_DISTANCE: f32 = 20.0;

// ── Overlay ─────────────────────────────────────────────────────────

/// Farbe der Hilfslinie (Kontrollpolygon).
pub const GUIDE_COLOR: Color = [0.8, 0.8, 0.8, 1.0];
/// Breite der Hilfslinie.
pub const GUIDE_WIDTH: f32 = 1.0;
/// Strichmuster der Hilfslinie [Strich, Lücke].
pub const GUIDE_DASH: [f32; 2] = [5.0, 5.0];
/// Halo-Breite = Strichbreite × Faktor + Zuschlag.
pub const HALO_WIDTH_FACTOR: f32 = 3.0;
/// Zuschlag auf die Halo-Breite.
pub const HALO_WIDTH_EXTRA: f32 = 10.0;
/// Breitenfaktor für das Nachzeichnen der aktuellen Kurve.
pub const HIGHLIGHT_WIDTH_FACTOR: f32 = 1.1;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curvita.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Canvas-Größe [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Hintergrundfarbe neuer Dokumente
    pub background_color: Color,

    // ── Neue Kurven ─────────────────────────────────────────────
    /// Strichfarbe neuer Kurven
    pub default_stroke_color: Color,
    /// Strichbreite neuer Kurven
    pub default_stroke_width: f32,
    /// Linienende neuer Kurven
    #[serde(default)]
    pub default_stroke_cap: StrokeCap,

    // ── Interaktion ─────────────────────────────────────────────
    /// Minimaler Trefferradius für Kontrollpunkte
    pub point_hit_radius_min: f32,
    /// Trefferradius als Vielfaches der Strichbreite
    pub point_hit_width_factor: f32,
    /// Abstandsschwelle für die Kurvenwahl
    pub curve_pick_radius: f32,
    /// Stützstellen pro Bézier-Pfad
    pub curve_sample_count: usize,
    /// Doppel-Tap-Zeitfenster in Sekunden
    pub double_tap_window_secs: f64,
    /// Doppel-Tap-Maximalabstand
    pub double_tap_max_distance: f32,

    // ── Overlay ─────────────────────────────────────────────────
    /// Farbe der Hilfslinie
    pub guide_color: Color,
    /// Breite der Hilfslinie
    pub guide_width: f32,
    /// Strichmuster der Hilfslinie
    pub guide_dash: [f32; 2],
    /// Halo-Faktor
    pub halo_width_factor: f32,
    /// Halo-Zuschlag
    pub halo_width_extra: f32,
    /// Faktor für das Nachzeichnen
    pub highlight_width_factor: f32,
    /// Punkt-Styles je Rolle
    #[serde(default)]
    pub point_styles: PointStyleTable,

    // ── Panel-Slider ────────────────────────────────────────────
    /// Slider-Bereich Strichbreite
    #[serde(default = "default_line_width_slider")]
    pub line_width_slider: SliderRange,
    /// Slider-Bereich Anzahl Parallelen
    #[serde(default = "default_parallel_count_slider")]
    pub parallel_count_slider: SliderRange,
    /// Slider-Bereich Abstand der Parallelen
    #[serde(default = "default_parallel_spacing_slider")]
    pub parallel_spacing_slider: SliderRange,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_size: CanvasView::DEFAULT_SIZE,
            background_color: WHITE,

            default_stroke_color: BLACK,
            default_stroke_width: DEFAULT_STROKE_WIDTH,
            default_stroke_cap: StrokeCap::Butt,

            point_hit_radius_min: POINT_HIT_RADIUS_MIN,
            point_hit_width_factor: POINT_HIT_WIDTH_FACTOR,
            curve_pick_radius: CURVE_PICK_RADIUS,
            curve_sample_count: CURVE_SAMPLE_COUNT,
            double_tap_window_secs: DOUBLE_TAP_WINDOW_SECS,
            double_tap_max_distance: DOUBLE_TAP_MAX_DISTANCE,

            guide_color: GUIDE_COLOR,
            guide_width: GUIDE_WIDTH,
            guide_dash: GUIDE_DASH,
            halo_width_factor: HALO_WIDTH_FACTOR,
            halo_width_extra: HALO_WIDTH_EXTRA,
            highlight_width_factor: HIGHLIGHT_WIDTH_FACTOR,
            point_styles: PointStyleTable::default(),

            line_width_slider: LINE_WIDTH_SLIDER,
            parallel_count_slider: PARALLEL_COUNT_SLIDER,
            parallel_spacing_slider: PARALLEL_SPACING_SLIDER,
        }
    }
}

/// Serde-Default für `line_width_slider` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_line_width_slider() -> SliderRange {
    LINE_WIDTH_SLIDER
}

fn default_parallel_count_slider() -> SliderRange {
    PARALLEL_COUNT_SLIDER
}

fn default_parallel_spacing_slider() -> SliderRange {
    PARALLEL_SPACING_SLIDER
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curvita"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curvita.toml")
    }

    /// Strich-Stil für neu angelegte Kurven.
    pub fn default_stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.default_stroke_color,
            width: self.default_stroke_width,
            cap: self.default_stroke_cap,
        }
    }

    /// Trefferradius für Kontrollpunkte bei gegebener Strichbreite.
    ///
    /// `max(point_hit_radius_min, point_hit_width_factor · width)`
    pub fn point_hit_radius(&self, stroke_width: f32) -> f32 {
        self.point_hit_radius_min
            .max(self.point_hit_width_factor * stroke_width)
    }
}
