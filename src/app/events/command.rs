use crate::core::{Color, ParallelMode, StrokeCap};
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
///
/// Positionen sind bereits Canvas-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Zeiger-Geste ────────────────────────────────────────────
    /// Andere Kurve per Klick auf ihren Pfad aktivieren
    SelectCurve { index: usize },
    /// Kontrollpunkt der aktuellen Kurve löschen
    DeletePoint { index: usize },
    /// Kontrollpunkt selektieren und ziehen
    BeginDragPoint { index: usize },
    /// Neuen Kontrollpunkt einfügen, selektieren und ziehen
    InsertPoint { position: glam::Vec2, at_front: bool },
    /// Gezogenen Punkt verschieben
    DragPointTo { position: glam::Vec2 },
    /// Drag beenden
    EndDrag,
    /// Primären Druck für Doppel-Tap-Erkennung merken
    RecordTap { position: glam::Vec2, timestamp: f64 },

    // ── Dokument ────────────────────────────────────────────────
    /// Neue leere Kurve anhängen
    AddCurve,
    /// Aktuelle Kurve entfernen
    DeleteCurrentCurve,
    /// Kurve umbenennen
    RenameCurve { index: usize, name: String },
    /// Bearbeitungsmodus setzen
    SetEditMode { enabled: bool },
    /// Hintergrundfarbe setzen
    SetBackgroundColor { color: Color },

    // ── Eigenschaften der aktuellen Kurve ───────────────────────
    /// Strichfarbe setzen
    SetStrokeColor { color: Color },
    /// Strichbreite setzen (wird begrenzt)
    SetLineWidth { width: f32 },
    /// Linienende setzen
    SetLineCap { cap: StrokeCap },
    /// Anzahl Parallelen setzen
    SetParallelCount { count: u32 },
    /// Abstand der Parallelen setzen
    SetParallelSpacing { spacing: f32 },
    /// Konstruktionsverfahren setzen
    SetParallelMode { mode: ParallelMode },

    // ── View ────────────────────────────────────────────────────
    /// Größe des Canvas-Elements setzen
    SetViewportSize { size: [f32; 2] },

    // ── Datei ───────────────────────────────────────────────────
    /// Dokument als JSON speichern
    SaveDocument { path: PathBuf },
    /// Dokument aus JSON laden
    LoadDocument { path: PathBuf },
    /// Szene als SVG exportieren
    ExportSvg { path: PathBuf, flatten: bool },
}
