use crate::core::{Color, ParallelMode, StrokeCap};
use std::path::PathBuf;

/// Maustaste bzw. Geste eines Zeiger-Drucks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Linke Maustaste / einfacher Touch
    #[default]
    Primary,
    /// Rechte Maustaste (löscht einen getroffenen Punkt)
    Secondary,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Zeigerpositionen sind elementlokale Pixel; der Controller rechnet sie in
/// Canvas-Koordinaten um. Zeitstempel sind Sekunden (monoton).
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Zeiger & Touch ──────────────────────────────────────────
    /// Maustaste gedrückt
    PointerPressed {
        screen_pos: glam::Vec2,
        button: PointerButton,
        timestamp: f64,
    },
    /// Zeiger bewegt
    PointerMoved { screen_pos: glam::Vec2 },
    /// Maustaste losgelassen
    PointerReleased,
    /// Touch begonnen (wie primärer Druck)
    TouchStarted { screen_pos: glam::Vec2, timestamp: f64 },
    /// Touch bewegt
    TouchMoved { screen_pos: glam::Vec2 },
    /// Touch beendet
    TouchEnded,
    /// Canvas-Element hat eine neue Größe
    ViewportResized { size: [f32; 2] },

    // ── Dokument ────────────────────────────────────────────────
    /// Bearbeitungsmodus umgeschaltet
    EditModeToggled { enabled: bool },
    /// Hintergrundfarbe geändert
    BackgroundColorChanged { color: Color },
    /// Kurve im Panel ausgewählt
    CurveSelected { index: usize },
    /// Kurve umbenannt
    CurveRenamed { index: usize, name: String },
    /// Neue Kurve anlegen
    AddCurveRequested,
    /// Aktuelle Kurve löschen
    DeleteCurrentCurveRequested,

    // ── Eigenschaften der aktuellen Kurve ───────────────────────
    /// Strichfarbe geändert
    StrokeColorChanged { color: Color },
    /// Strichbreite direkt gesetzt
    LineWidthChanged { width: f32 },
    /// Strichbreiten-Slider bewegt (Position 0..=100)
    LineWidthSliderMoved { position: f32 },
    /// Linienende geändert
    LineCapChanged { cap: StrokeCap },
    /// Anzahl Parallelen direkt gesetzt
    ParallelCountChanged { count: u32 },
    /// Parallelen-Slider bewegt (Position 0..=100)
    ParallelCountSliderMoved { position: f32 },
    /// Abstand der Parallelen direkt gesetzt
    ParallelSpacingChanged { spacing: f32 },
    /// Abstands-Slider bewegt (Position 0..=100)
    ParallelSpacingSliderMoved { position: f32 },
    /// Konstruktionsverfahren der Parallelen geändert
    ParallelModeChanged { mode: ParallelMode },

    // ── Datei ───────────────────────────────────────────────────
    /// Dokument als JSON speichern
    SaveDocumentRequested { path: PathBuf },
    /// Dokument aus JSON laden
    LoadDocumentRequested { path: PathBuf },
    /// Bild als SVG exportieren (ohne Overlays)
    ExportSvgRequested { path: PathBuf },
}
