//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(state.ui.project_name.as_str());

            ui.separator();

            ui.label(format!(
                "Components: {} | Wires: {}",
                state.component_count(),
                state.wire_count()
            ));

            ui.separator();

            ui.label(format!("Zoom: {:.0}%", state.view.viewport.zoom_percent));

            ui.separator();

            ui.label(format!("Mode: {}", state.editor.mode.label()));

            let errors = state.error_count();
            if errors > 0 {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{} error(s)", errors))
                        .color(egui::Color32::from_rgb(0xef, 0x44, 0x44)),
                );
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }
        });
    });
}
