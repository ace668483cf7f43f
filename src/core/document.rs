//! Dokument: geordnete Liste benannter, gestylter Kurven mit aktuellem Index.
//!
//! Invarianten: die Liste ist nie leer und `current` ist immer ein gültiger Index.

use super::curve::Curve;
use super::style::{Color, StrokeStyle, WHITE};
use glam::Vec2;

/// Eine Kurve mit Anzeigename und Strich-Stil
#[derive(Debug, Clone)]
pub struct CurveEntry {
    /// Anzeigename (nicht eindeutig)
    pub name: String,
    /// Die Kurve selbst
    pub curve: Curve,
    /// Farbe, Breite und Linienende
    pub style: StrokeStyle,
}

impl CurveEntry {
    /// Erstellt einen Eintrag mit leerer Kurve.
    pub fn new(name: impl Into<String>, style: StrokeStyle) -> Self {
        Self::with_curve(name, Curve::new(), style)
    }

    /// Erstellt einen Eintrag für eine bestehende Kurve.
    pub fn with_curve(name: impl Into<String>, curve: Curve, style: StrokeStyle) -> Self {
        Self {
            name: name.into(),
            curve,
            style,
        }
    }

    /// Standard-Name für den Eintrag an `index`.
    pub fn default_name(index: usize) -> String {
        format!("Curve {index}")
    }
}

/// Das bearbeitete Dokument
#[derive(Debug, Clone)]
pub struct Document {
    entries: Vec<CurveEntry>,
    current: usize,
    /// Bearbeitungsmodus (aus = reine Anzeige)
    pub edit_mode: bool,
    /// Hintergrundfarbe des Canvas
    pub background_color: Color,
    /// Stil für neu angelegte Kurven
    pub default_style: StrokeStyle,
}

impl Document {
    /// Erstellt ein Dokument mit einer leeren Kurve.
    pub fn new() -> Self {
        Self::with_default_style(StrokeStyle::default())
    }

    /// Erstellt ein Dokument mit einer leeren Kurve im gegebenen Stil.
    pub fn with_default_style(default_style: StrokeStyle) -> Self {
        Self {
            entries: vec![CurveEntry::new(CurveEntry::default_name(0), default_style)],
            current: 0,
            edit_mode: true,
            background_color: WHITE,
            default_style,
        }
    }

    /// Startdokument mit zwei Beispielkurven.
    pub fn seeded() -> Self {
        let style = StrokeStyle::default();
        let first = Curve::from_positions([
            Vec2::new(0.0, 0.0),
            Vec2::new(540.0, 540.0),
            Vec2::new(900.0, 540.0),
        ]);
        let second = Curve::from_positions([
            Vec2::new(50.0, 80.0),
            Vec2::new(600.0, 400.0),
            Vec2::new(300.0, 800.0),
        ]);

        let mut doc = Self::new();
        doc.entries = vec![
            CurveEntry::with_curve(CurveEntry::default_name(0), first, style),
            CurveEntry::with_curve(CurveEntry::default_name(1), second, style),
        ];
        doc
    }

    /// Baut ein Dokument aus Einträgen auf; leere Listen und ungültige
    /// Indizes werden repariert.
    pub fn from_entries(entries: Vec<CurveEntry>, current: usize) -> Self {
        let mut doc = Self::new();
        if !entries.is_empty() {
            doc.current = current.min(entries.len() - 1);
            doc.entries = entries;
        }
        doc
    }

    // ── Lesender Zugriff ────────────────────────────────────────────

    /// Alle Einträge in Reihenfolge.
    pub fn entries(&self) -> &[CurveEntry] {
        &self.entries
    }

    /// Anzahl Einträge (immer ≥ 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Ein Dokument ist nie leer.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index des aktuell bearbeiteten Eintrags.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Aktuell bearbeiteter Eintrag.
    pub fn current_entry(&self) -> &CurveEntry {
        &self.entries[self.current]
    }

    /// Aktuell bearbeiteter Eintrag (mutierbar).
    pub fn current_entry_mut(&mut self) -> &mut CurveEntry {
        &mut self.entries[self.current]
    }

    /// Eintrag an `index`.
    pub fn entry(&self, index: usize) -> Option<&CurveEntry> {
        self.entries.get(index)
    }

    /// Eintrag an `index` (mutierbar).
    pub fn entry_mut(&mut self, index: usize) -> Option<&mut CurveEntry> {
        self.entries.get_mut(index)
    }

    // ── Mutation ────────────────────────────────────────────────────

    /// Verwirft leere Kurven, hängt eine neue leere Kurve an und macht sie aktuell.
    ///
    /// Gibt den Index der neuen Kurve zurück.
    pub fn add_curve(&mut self) -> usize {
        self.entries.retain(|entry| !entry.curve.is_empty());
        let index = self.entries.len();
        self.entries.push(CurveEntry::new(
            CurveEntry::default_name(index),
            self.default_style,
        ));
        self.current = index;
        index
    }

    /// Entfernt die aktuelle Kurve; der Index rückt auf `max(0, idx − 1)`.
    ///
    /// Wird die Liste leer, entsteht sofort eine frische leere Kurve.
    pub fn delete_current_curve(&mut self) -> CurveEntry {
        let removed = self.entries.remove(self.current);
        self.current = self.current.saturating_sub(1);
        if self.entries.is_empty() {
            self.entries
                .push(CurveEntry::new(CurveEntry::default_name(0), self.default_style));
            self.current = 0;
        }
        removed
    }

    /// Wechselt die aktuelle Kurve; ungültige Indizes werden abgelehnt.
    pub fn select_curve(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.current = index;
        true
    }

    /// Benennt eine Kurve um; der Name wird getrimmt, leere Namen werden abgelehnt.
    pub fn rename_curve(&mut self, index: usize, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        entry.name = trimmed.to_string();
        true
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
