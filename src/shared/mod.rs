//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und externen Kollaborateuren
//! (Renderer, Panel, Export) geteilt werden.

pub mod options;
pub mod point_style;
mod render_scene;
pub mod slider;

pub use options::EditorOptions;
pub use point_style::{PointStyle, PointStyleTable};
pub use render_scene::{CurveDrawRequest, EditOverlay, PointMarkerDraw, RenderScene, StrokedPath};
pub use slider::SliderRange;
