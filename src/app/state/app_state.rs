use crate::app::gesture::GestureState;
use crate::app::CommandLog;
use crate::core::{CurveEntry, Document};
use crate::shared::EditorOptions;

use super::{PanelState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das bearbeitete Dokument (Kurvenliste, aktueller Index, Modus)
    pub document: Document,
    /// Gespiegelte Werte der aktuellen Kurve für das Eigenschaften-Panel
    pub panel: PanelState,
    /// Zustand der laufenden Zeiger-Geste
    pub gesture: GestureState,
    /// View-State (Canvas-Abbildung, Viewport, Redraw-Anforderung)
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radien, Farben, Slider-Bereiche)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen App-State mit einer leeren Kurve.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit einer leeren Kurve und gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut document = Document::with_default_style(options.default_stroke_style());
        document.background_color = options.background_color;
        Self::from_document(document, options)
    }

    /// Erstellt einen App-State mit den beiden Beispielkurven.
    pub fn seeded() -> Self {
        let options = EditorOptions::default();
        let mut document = Document::seeded();
        document.default_style = options.default_stroke_style();
        document.background_color = options.background_color;
        Self::from_document(document, options)
    }

    fn from_document(document: Document, options: EditorOptions) -> Self {
        let mut state = Self {
            panel: PanelState::default(),
            gesture: GestureState::new(),
            view: ViewState::new(options.canvas_size),
            command_log: CommandLog::new(),
            document,
            options,
        };
        state.refresh_panel();
        state
    }

    /// Aktuell bearbeiteter Eintrag.
    pub fn current_entry(&self) -> &CurveEntry {
        self.document.current_entry()
    }

    /// Anzahl der Kurven (für UI-Anzeige)
    pub fn curve_count(&self) -> usize {
        self.document.len()
    }

    /// Trefferradius für Punkte der aktuellen Kurve.
    pub fn point_hit_radius(&self) -> f32 {
        self.options
            .point_hit_radius(self.document.current_entry().style.width)
    }

    /// Aktualisiert den Panel-Spiegel aus der aktuellen Kurve.
    pub fn refresh_panel(&mut self) {
        self.panel = PanelState::from_document(&self.document);
    }

    /// Fordert ein Neuzeichnen an (relevant bei ausgeschaltetem Bearbeitungsmodus).
    pub fn request_redraw(&mut self) {
        self.view.redraw_requested = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
