//! Application State — zentrale Datenhaltung.

mod app_state;
mod panel;
mod view;

pub use app_state::AppState;
pub use panel::PanelState;
pub use view::ViewState;
