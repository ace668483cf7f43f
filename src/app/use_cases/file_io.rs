//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::render_scene;
use crate::io;
use crate::AppState;
use std::path::Path;

/// Speichert das Dokument als JSON.
pub fn save_document(state: &AppState, path: &Path) -> anyhow::Result<()> {
    io::save_document(&state.document, path)?;
    log::info!(
        "Dokument gespeichert: {} ({} Kurven)",
        path.display(),
        state.document.len()
    );
    Ok(())
}

/// Lädt ein Dokument und ersetzt das aktuelle.
///
/// Bei Fehlern bleibt das bisherige Dokument unverändert.
pub fn load_document(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let mut document = io::load_document(path)?;
    document.default_style = state.options.default_stroke_style();

    state.document = document;
    state.gesture.reset();
    state.refresh_panel();
    state.request_redraw();

    log::info!(
        "Dokument geladen: {} ({} Kurven, aktuell {})",
        path.display(),
        state.document.len(),
        state.document.current_index()
    );
    Ok(())
}

/// Exportiert die aktuelle Szene als SVG.
pub fn export_svg(state: &AppState, path: &Path, flatten: bool) -> anyhow::Result<()> {
    let scene = render_scene::build(state, flatten);
    io::export_svg(&scene, path)?;
    log::info!("SVG exportiert: {}", path.display());
    Ok(())
}
