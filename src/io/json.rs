//! JSON-Laden und -Speichern von Dokumenten.

use super::snapshot::DocumentSnapshot;
use crate::core::Document;
use anyhow::{Context, Result};
use std::path::Path;

/// Parst ein Dokument aus JSON.
pub fn parse_document(content: &str) -> Result<Document> {
    let snapshot: DocumentSnapshot =
        serde_json::from_str(content).context("Dokument-JSON fehlerhaft")?;
    snapshot.into_document()
}

/// Serialisiert ein Dokument als eingerücktes JSON.
pub fn write_document(document: &Document) -> Result<String> {
    let snapshot = DocumentSnapshot::from_document(document);
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Lädt ein Dokument aus einer Datei.
pub fn load_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
    parse_document(&content).with_context(|| format!("Ungültiges Dokument: {}", path.display()))
}

/// Speichert ein Dokument in eine Datei.
pub fn save_document(document: &Document, path: &Path) -> Result<()> {
    let content = write_document(document)?;
    std::fs::write(path, content)
        .with_context(|| format!("Datei nicht schreibbar: {}", path.display()))?;
    Ok(())
}
