//! Toolbar für Modusauswahl und Bauteil-Palette.

use crate::app::{AppIntent, AppState, DrawingMode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = &state.editor.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.label("Mode:");
            ui.separator();

            if ui
                .add(egui::Button::new("Select").selected(*active == DrawingMode::Select))
                .clicked()
            {
                events.push(AppIntent::DrawingModeRequested {
                    mode: DrawingMode::Select,
                });
            }

            if ui
                .add(egui::Button::new("Wire").selected(*active == DrawingMode::DrawWire))
                .clicked()
            {
                events.push(AppIntent::DrawingModeRequested {
                    mode: DrawingMode::DrawWire,
                });
            }

            if state.editor.wire_tool.is_drawing() {
                let ready = state.editor.wire_tool.points().len() >= 2;
                if ui
                    .add_enabled(ready, egui::Button::new("Finish Wire (Enter)"))
                    .clicked()
                {
                    events.push(AppIntent::FinishWireRequested);
                }
                if ui.button("Cancel (Esc)").clicked() {
                    events.push(AppIntent::CancelRequested);
                }
            }

            ui.separator();
            ui.label("Components:");

            for component_type in state.library.iter() {
                let is_active = matches!(
                    active,
                    DrawingMode::PlaceComponent(name) if *name == component_type.name
                );
                let button = egui::Button::new(format!(
                    "{} {}",
                    component_type.symbol, component_type.name
                ))
                .selected(is_active);
                if ui.add(button).on_hover_text(component_type.label.as_str()).clicked() {
                    events.push(AppIntent::DrawingModeRequested {
                        mode: DrawingMode::PlaceComponent(component_type.name.clone()),
                    });
                }
            }
        });
    });

    events
}
