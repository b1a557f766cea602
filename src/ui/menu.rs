//! Top-Menü (File, Edit, View).

use crate::app::{AppIntent, AppState};
use crate::core::EntityRef;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New (Ctrl+N)").clicked() {
                    events.push(AppIntent::NewProjectRequested);
                    ui.close();
                }

                if ui.button("Open... (Ctrl+O)").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Save (Ctrl+S)").clicked() {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui.button("Save As... (Ctrl+Shift+S)").clicked() {
                    events.push(AppIntent::SaveAsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(state.can_redo(), egui::Button::new("Redo (Ctrl+Y)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                let has_selection = state.selection.selected.is_some();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Delete (Del)"))
                    .clicked()
                {
                    events.push(AppIntent::DeleteSelectedRequested);
                    ui.close();
                }

                let component_selected =
                    matches!(state.selection.selected, Some(EntityRef::Component(_)));
                if ui
                    .add_enabled(component_selected, egui::Button::new("Rotate (R)"))
                    .clicked()
                {
                    events.push(AppIntent::RotateSelectedRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Options...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                if ui.button("Reset Zoom").clicked() {
                    events.push(AppIntent::ZoomResetRequested);
                    ui.close();
                }

                ui.separator();

                let mut show_grid = state.options.show_grid;
                if ui.checkbox(&mut show_grid, "Show Grid (G)").changed() {
                    events.push(AppIntent::ToggleGridRequested);
                }

                let mut snap = state.options.snap_to_grid;
                if ui.checkbox(&mut snap, "Snap to Grid").changed() {
                    events.push(AppIntent::ToggleSnapRequested);
                }
            });
        });
    });

    events
}
