//! Curvita: interaktiver 2D-Bézier-Kurveneditor.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod io;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, GestureState, PanelState, PointerButton,
    ViewState,
};
pub use core::{
    CanvasView, Curve, CurveEntry, Document, ParallelMode, Point, PointKind, PointRole,
    StrokeCap, StrokeStyle,
};
pub use io::{load_document, parse_document, save_document, write_document};
pub use shared::{EditorOptions, RenderScene};
