//! Properties-Panel (rechte Seitenleiste) für die selektierte Entität.

use crate::app::{AppIntent, AppState};
use crate::core::{Component, EntityRef, PinRef, Rotation, Wire};

const ROTATIONS: [Rotation; 4] = [
    Rotation::Deg0,
    Rotation::Deg90,
    Rotation::Deg180,
    Rotation::Deg270,
];

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Properties");
            ui.separator();

            match state.selection.selected {
                Some(EntityRef::Component(id)) => {
                    if let Some(component) = state.schematic.component(id).cloned() {
                        render_component(ui, state, &component, &mut events);
                    }
                }
                Some(EntityRef::Wire(id)) => {
                    if let Some(wire) = state.schematic.wire(id) {
                        render_wire(ui, wire);
                    }
                    state.ui.value_draft = None;
                }
                None => {
                    ui.label("Nothing selected");
                    state.ui.value_draft = None;
                }
            }
        });

    events
}

fn render_component(
    ui: &mut egui::Ui,
    state: &mut AppState,
    component: &Component,
    events: &mut Vec<AppIntent>,
) {
    let label = state
        .library
        .get(&component.type_name)
        .map(|t| t.label.clone())
        .unwrap_or_else(|| component.type_name.clone());

    ui.label(egui::RichText::new(label).strong());
    ui.label(format!("ID: {}", component.id));
    ui.label(format!(
        "Position: ({:.0}, {:.0})",
        component.position.x, component.position.y
    ));
    ui.add_space(6.0);

    // Bearbeitungspuffer an das aktuelle Bauteil binden
    if !matches!(&state.ui.value_draft, Some((id, _)) if *id == component.id) {
        state.ui.value_draft = Some((component.id, component.value.clone()));
    }
    let Some((_, draft)) = state.ui.value_draft.as_mut() else {
        return;
    };

    ui.horizontal(|ui| {
        ui.label("Value:");
        let response = ui.text_edit_singleline(draft);
        if response.lost_focus() && *draft != component.value {
            events.push(AppIntent::SetComponentValueRequested {
                component_id: component.id,
                value: draft.clone(),
            });
        } else if !response.has_focus() && *draft != component.value {
            // Undo/Redo ändert den Wert außerhalb des Panels
            *draft = component.value.clone();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Rotation:");
        let mut rotation = component.rotation;
        egui::ComboBox::from_id_salt("component_rotation")
            .selected_text(format!("{}°", rotation.degrees()))
            .show_ui(ui, |ui| {
                for option in ROTATIONS {
                    ui.selectable_value(&mut rotation, option, format!("{}°", option.degrees()));
                }
            });
        if rotation != component.rotation {
            events.push(AppIntent::SetComponentRotationRequested {
                component_id: component.id,
                rotation,
            });
        }
    });

    if let Some(component_type) = state.library.get(&component.type_name) {
        ui.add_space(6.0);
        ui.collapsing("Pins", |ui| {
            for pin in component.pins(component_type) {
                ui.label(format!(
                    "{} ({:?}) at ({:.0}, {:.0})",
                    pin.template.display_name(),
                    pin.role(),
                    pin.position.x,
                    pin.position.y
                ));
            }
        });
    }
}

fn render_wire(ui: &mut egui::Ui, wire: &Wire) {
    ui.label(egui::RichText::new("Wire").strong());
    ui.label(format!("ID: {}", wire.id));
    ui.label(format!("Points: {}", wire.points.len()));
    ui.label(format!("Start: {}", describe_ref(wire.start_ref.as_ref())));
    ui.label(format!("End: {}", describe_ref(wire.end_ref.as_ref())));
}

fn describe_ref(pin: Option<&PinRef>) -> String {
    match pin {
        Some(pin) => format!("{}.{}", pin.component_id, pin.pin_id),
        None => "unconnected".to_string(),
    }
}
