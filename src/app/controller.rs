//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Zeiger-Geste ===
            AppCommand::SelectCurve { index } => handlers::pointer::select_curve(state, index),
            AppCommand::DeletePoint { index } => handlers::pointer::delete_point(state, index),
            AppCommand::BeginDragPoint { index } => handlers::pointer::begin_drag(state, index),
            AppCommand::InsertPoint { position, at_front } => {
                handlers::pointer::insert_point(state, position, at_front)
            }
            AppCommand::DragPointTo { position } => handlers::pointer::drag_to(state, position),
            AppCommand::EndDrag => handlers::pointer::end_drag(state),
            AppCommand::RecordTap {
                position,
                timestamp,
            } => handlers::pointer::record_tap(state, position, timestamp),

            // === Dokument ===
            AppCommand::AddCurve => handlers::document::add_curve(state),
            AppCommand::DeleteCurrentCurve => handlers::document::delete_current_curve(state),
            AppCommand::RenameCurve { index, name } => {
                handlers::document::rename_curve(state, index, &name)
            }
            AppCommand::SetEditMode { enabled } => {
                handlers::document::set_edit_mode(state, enabled)
            }
            AppCommand::SetBackgroundColor { color } => {
                handlers::document::set_background_color(state, color)
            }

            // === Eigenschaften ===
            AppCommand::SetStrokeColor { color } => {
                handlers::properties::set_stroke_color(state, color)
            }
            AppCommand::SetLineWidth { width } => handlers::properties::set_line_width(state, width),
            AppCommand::SetLineCap { cap } => handlers::properties::set_line_cap(state, cap),
            AppCommand::SetParallelCount { count } => {
                handlers::properties::set_parallel_count(state, count)
            }
            AppCommand::SetParallelSpacing { spacing } => {
                handlers::properties::set_parallel_spacing(state, spacing)
            }
            AppCommand::SetParallelMode { mode } => {
                handlers::properties::set_parallel_mode(state, mode)
            }

            // === View ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Datei-I/O ===
            AppCommand::SaveDocument { path } => handlers::file_io::save(state, &path)?,
            AppCommand::LoadDocument { path } => handlers::file_io::load(state, &path)?,
            AppCommand::ExportSvg { path, flatten } => {
                handlers::file_io::export_svg(state, &path, flatten)?
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, flatten: bool) -> RenderScene {
        render_scene::build(state, flatten)
    }

    /// Entscheidet, ob der nächste Frame gezeichnet werden soll.
    ///
    /// Im Bearbeitungsmodus läuft die Redraw-Schleife durchgehend, sonst wird
    /// nur nach einer Mutation einmal gezeichnet. Setzt die Anforderung zurück.
    pub fn poll_redraw(&self, state: &mut AppState) -> bool {
        let pending = std::mem::take(&mut state.view.redraw_requested);
        state.document.edit_mode || pending
    }
}
