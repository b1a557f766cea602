//! Diagnose-Liste: Klick auf einen Eintrag selektiert die betroffene Entität.

use crate::app::{AppIntent, AppState};
use crate::core::Severity;

fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Error => egui::Color32::from_rgb(0xef, 0x44, 0x44),
        Severity::Warning => egui::Color32::from_rgb(0xf5, 0x9e, 0x0b),
        Severity::Suggestion => egui::Color32::from_rgb(0x60, 0xa5, 0xfa),
    }
}

/// Rendert das Diagnose-Panel am unteren Rand und gibt erzeugte Events zurück.
pub fn render_diagnostics_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("diagnostics_panel")
        .resizable(true)
        .default_height(110.0)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(format!("Diagnostics ({})", state.diagnostics.len())).strong());
            ui.separator();

            if state.diagnostics.is_empty() {
                ui.label("No issues found");
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for diagnostic in &state.diagnostics {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(diagnostic.severity.as_str())
                                .color(severity_color(diagnostic.severity))
                                .monospace(),
                        );
                        let entity = diagnostic.entity();
                        let is_selected = entity.is_some() && entity == state.selection.selected;
                        let response = ui.selectable_label(is_selected, diagnostic.message.as_str());
                        if let (true, Some(entity)) = (response.clicked(), entity) {
                            events.push(AppIntent::SelectEntityRequested { entity });
                        }
                    });
                }
            });
        });

    events
}
