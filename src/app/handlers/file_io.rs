//! Handler für Datei-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use std::path::Path;

/// Speichert das Dokument als JSON.
pub fn save(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::file_io::save_document(state, path)
}

/// Lädt ein Dokument aus JSON.
pub fn load(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::file_io::load_document(state, path)
}

/// Exportiert die Szene als SVG.
pub fn export_svg(state: &mut AppState, path: &Path, flatten: bool) -> anyhow::Result<()> {
    use_cases::file_io::export_svg(state, path, flatten)
}
