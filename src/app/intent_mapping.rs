//! Mapping von UI-Intents auf mutierende App-Commands.

use super::events::PointerButton;
use super::use_cases::pointer::{resolve_press, PressTarget};
use super::{AppCommand, AppIntent, AppState};
use crate::shared::slider::parallel_count_at;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            screen_pos,
            button,
            timestamp,
        } => map_press(state, screen_pos, button, timestamp),
        AppIntent::TouchStarted {
            screen_pos,
            timestamp,
        } => map_press(state, screen_pos, PointerButton::Primary, timestamp),
        AppIntent::PointerMoved { screen_pos } | AppIntent::TouchMoved { screen_pos } => {
            if state.gesture.is_dragging() {
                vec![AppCommand::DragPointTo {
                    position: state.view.screen_to_canvas(screen_pos),
                }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased | AppIntent::TouchEnded => {
            if state.gesture.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::EditModeToggled { enabled } => vec![AppCommand::SetEditMode { enabled }],
        AppIntent::BackgroundColorChanged { color } => {
            vec![AppCommand::SetBackgroundColor { color }]
        }
        AppIntent::CurveSelected { index } => vec![AppCommand::SelectCurve { index }],
        AppIntent::CurveRenamed { index, name } => vec![AppCommand::RenameCurve { index, name }],
        AppIntent::AddCurveRequested => vec![AppCommand::AddCurve],
        AppIntent::DeleteCurrentCurveRequested => vec![AppCommand::DeleteCurrentCurve],

        AppIntent::StrokeColorChanged { color } => vec![AppCommand::SetStrokeColor { color }],
        AppIntent::LineWidthChanged { width } => vec![AppCommand::SetLineWidth { width }],
        AppIntent::LineWidthSliderMoved { position } => vec![AppCommand::SetLineWidth {
            width: state.options.line_width_slider.value_at(position),
        }],
        AppIntent::LineCapChanged { cap } => vec![AppCommand::SetLineCap { cap }],
        AppIntent::ParallelCountChanged { count } => {
            vec![AppCommand::SetParallelCount { count }]
        }
        AppIntent::ParallelCountSliderMoved { position } => vec![AppCommand::SetParallelCount {
            count: parallel_count_at(&state.options.parallel_count_slider, position),
        }],
        AppIntent::ParallelSpacingChanged { spacing } => {
            vec![AppCommand::SetParallelSpacing { spacing }]
        }
        AppIntent::ParallelSpacingSliderMoved { position } => {
            vec![AppCommand::SetParallelSpacing {
                spacing: state.options.parallel_spacing_slider.value_at(position),
            }]
        }
        AppIntent::ParallelModeChanged { mode } => vec![AppCommand::SetParallelMode { mode }],

        AppIntent::SaveDocumentRequested { path } => vec![AppCommand::SaveDocument { path }],
        AppIntent::LoadDocumentRequested { path } => vec![AppCommand::LoadDocument { path }],
        AppIntent::ExportSvgRequested { path } => vec![AppCommand::ExportSvg {
            path,
            flatten: true,
        }],
    }
}

/// Zeiger-Druck: nur im Bearbeitungsmodus, Ziel über Hit-Tests auflösen.
fn map_press(
    state: &AppState,
    screen_pos: glam::Vec2,
    button: PointerButton,
    timestamp: f64,
) -> Vec<AppCommand> {
    if !state.document.edit_mode {
        return vec![];
    }

    let position = state.view.screen_to_canvas(screen_pos);
    let record_tap = AppCommand::RecordTap {
        position,
        timestamp,
    };

    match (resolve_press(state, position, button, timestamp), button) {
        (PressTarget::SwitchCurve(index), _) => vec![AppCommand::SelectCurve { index }],
        (PressTarget::DeletePoint(index), _) => vec![AppCommand::DeletePoint { index }],
        (PressTarget::DragPoint(index), PointerButton::Primary) => {
            vec![AppCommand::BeginDragPoint { index }, record_tap]
        }
        (PressTarget::InsertPoint { position, at_front }, PointerButton::Primary) => {
            vec![AppCommand::InsertPoint { position, at_front }, record_tap]
        }
        // Sekundärtaste löscht nur; ins Leere passiert nichts
        (_, PointerButton::Secondary) => vec![],
    }
}
