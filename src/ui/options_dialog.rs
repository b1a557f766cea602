//! Optionen-Dialog für Grid, Interaktion und Farben.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Options")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    // ── Grid ────────────────────────────────────────
                    ui.collapsing("Grid", |ui| {
                        changed |= drag_value(ui, "Grid size:", &mut opts.grid_size, 1.0..=100.0, 1.0);
                        changed |= ui.checkbox(&mut opts.snap_to_grid, "Snap to grid").changed();
                        changed |= ui.checkbox(&mut opts.show_grid, "Show grid").changed();
                        changed |= color_edit(ui, "Grid color:", &mut opts.grid_color);
                    });

                    // ── Interaktion ─────────────────────────────────
                    ui.collapsing("Interaction", |ui| {
                        changed |= drag_value(
                            ui,
                            "Hit tolerance (px):",
                            &mut opts.hit_tolerance_px,
                            1.0..=30.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Pin snap radius:",
                            &mut opts.pin_snap_radius,
                            0.0..=40.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Zoom step (%):",
                            &mut opts.zoom_step_percent,
                            1.0..=50.0,
                            1.0,
                        );
                        ui.horizontal(|ui| {
                            ui.label("Undo depth:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.history_depth).range(0..=10_000))
                                .on_hover_text("0 = unlimited")
                                .changed();
                        });
                    });

                    // ── Darstellung ─────────────────────────────────
                    ui.collapsing("Appearance", |ui| {
                        changed |= drag_value(ui, "Wire width:", &mut opts.wire_width, 0.5..=8.0, 0.1);
                        changed |= drag_value(
                            ui,
                            "Pin marker radius:",
                            &mut opts.pin_marker_radius,
                            1.0..=10.0,
                            0.1,
                        );
                        changed |= color_edit(ui, "Background:", &mut opts.background_color);
                        changed |= color_edit(ui, "Wires:", &mut opts.wire_color);
                        changed |= color_edit(ui, "Selection:", &mut opts.selection_color);
                        changed |= color_edit(ui, "Wire preview:", &mut opts.preview_color);
                        changed |= color_edit(ui, "Component fill:", &mut opts.component_fill_color);
                        changed |= color_edit(ui, "Errors:", &mut opts.error_color);
                    });
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Reset to defaults").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Close").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [u8; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = c.to_srgba_unmultiplied();
            changed = true;
        }
    });
    changed
}
