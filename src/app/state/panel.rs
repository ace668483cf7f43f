use crate::core::{Color, Document, ParallelMode, StrokeCap};

/// Spiegel der aktuellen Kurve für die Bindungen des Eigenschaften-Panels.
///
/// Wird bei jedem Kurvenwechsel, Hinzufügen, Löschen und jeder
/// Eigenschaftsänderung neu aufgebaut.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    /// Index der aktuellen Kurve
    pub current_index: usize,
    /// Anzahl Kurven im Dokument
    pub curve_count: usize,
    /// Name der aktuellen Kurve
    pub name: String,
    /// Strichfarbe
    pub color: Color,
    /// Strichbreite
    pub width: f32,
    /// Linienende
    pub cap: StrokeCap,
    /// Anzahl Parallelen
    pub parallel_count: u32,
    /// Abstand der Parallelen
    pub parallel_spacing: f32,
    /// Konstruktionsverfahren der Parallelen
    pub parallel_mode: ParallelMode,
    /// Bearbeitungsmodus
    pub edit_mode: bool,
    /// Hintergrundfarbe
    pub background_color: Color,
}

impl PanelState {
    /// Liest die Werte aus dem Dokument.
    pub fn from_document(document: &Document) -> Self {
        let entry = document.current_entry();
        Self {
            current_index: document.current_index(),
            curve_count: document.len(),
            name: entry.name.clone(),
            color: entry.style.color,
            width: entry.style.width,
            cap: entry.style.cap,
            parallel_count: entry.curve.parallel_count(),
            parallel_spacing: entry.curve.parallel_spacing(),
            parallel_mode: entry.curve.parallel_mode(),
            edit_mode: document.edit_mode,
            background_color: document.background_color,
        }
    }

    /// Ordnerüberschrift wie im Panel: `aktuell/letzter Index`.
    pub fn title(&self) -> String {
        format!(
            "Edit Mode: {}/{}",
            self.current_index,
            self.curve_count.saturating_sub(1)
        )
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::from_document(&Document::new())
    }
}
