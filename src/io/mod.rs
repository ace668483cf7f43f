//! Persistenz und Export: JSON-Snapshots des Dokuments und SVG-Export.
//!
//! Snapshots enthalten nur Kontrollpunkte und Parameter; Mittelpunkte und
//! Parallelen werden beim Laden neu berechnet.

pub mod json;
pub mod snapshot;
pub mod svg;

pub use json::{load_document, parse_document, save_document, write_document};
pub use snapshot::{CurveEntrySnapshot, CurveSnapshot, DocumentSnapshot, PointSnapshot};
pub use svg::{export_svg, write_svg};
