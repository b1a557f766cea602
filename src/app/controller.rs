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
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::NewProject => handlers::file_io::new_project(state),
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Modus & Selektion ===
            AppCommand::SetDrawingMode { mode } => handlers::drawing::set_mode(state, mode),
            AppCommand::SelectAt {
                world_pos,
                tolerance,
            } => handlers::selection::select_at(state, world_pos, tolerance),
            AppCommand::SelectEntity { entity } => {
                handlers::selection::select_entity(state, entity)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::BeginDrag {
                world_pos,
                tolerance,
            } => handlers::selection::begin_drag(state, world_pos, tolerance),
            AppCommand::UpdateDrag { world_pos } => {
                handlers::selection::update_drag(state, world_pos)
            }
            AppCommand::EndDrag => handlers::selection::end_drag(state),

            // === Editing ===
            AppCommand::PlaceComponent {
                type_name,
                world_pos,
            } => handlers::editing::place_component(state, &type_name, world_pos),
            AppCommand::WireClick { world_pos } => handlers::drawing::click(state, world_pos),
            AppCommand::UpdateWirePreview { world_pos } => {
                handlers::drawing::preview(state, world_pos)
            }
            AppCommand::FinishWire => handlers::drawing::finish(state),
            AppCommand::CancelWire => handlers::drawing::cancel(state),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),
            AppCommand::RotateSelected => handlers::editing::rotate_selected(state),
            AppCommand::SetComponentValue {
                component_id,
                value,
            } => handlers::editing::set_value(state, component_id, value),
            AppCommand::SetComponentRotation {
                component_id,
                rotation,
            } => handlers::editing::set_rotation(state, component_id, rotation),

            // === Viewport ===
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetZoom => handlers::view::reset_zoom(state),
            AppCommand::ZoomBy {
                delta_percent,
                focus_screen,
            } => handlers::view::zoom_by(state, delta_percent, focus_screen),
            AppCommand::Pan { delta_logical } => handlers::view::pan(state, delta_logical),
            AppCommand::ToggleGrid => handlers::view::toggle_grid(state),
            AppCommand::ToggleSnap => handlers::view::toggle_snap(state),
            AppCommand::SetSurfaceSize {
                size,
                pixels_per_point,
            } => handlers::view::set_surface_size(state, size, pixels_per_point),

            // === Optionen ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
