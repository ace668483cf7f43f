//! Core-Domänentypen: Punkte, Kurven, Dokument, Canvas und Geometrie-Kernel.

pub mod canvas;
/// Zustandslose Geometrie-Funktionen (De Casteljau, Offsets, Schnitte)
pub mod geometry;
pub mod curve;
pub mod document;
pub mod point;
pub mod style;

pub use canvas::CanvasView;
pub use curve::{Curve, ParallelMode, PointMarker, MAX_PARALLEL_COUNT};
pub use document::{CurveEntry, Document};
pub use point::{Point, PointKind, PointRole};
pub use style::{Color, StrokeCap, StrokeStyle};
