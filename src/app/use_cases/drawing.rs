//! Use-Case-Funktionen für Modus-Wechsel und das Leitungswerkzeug.

use crate::app::state::DrawingMode;
use crate::app::tools::{snap_to_pin, WireAction};
use crate::app::AppState;
use crate::core::EntityRef;
use std::sync::Arc;

/// Toleranz, mit der Leitungsenden beim Commit auf Pins aufgelöst werden.
const PIN_COINCIDENCE_TOLERANCE: f32 = 1e-3;

/// Wechselt den Interaktionsmodus. Eine Leitung in Arbeit wird verworfen.
pub fn set_drawing_mode(state: &mut AppState, mode: DrawingMode) {
    if let DrawingMode::PlaceComponent(type_name) = &mode {
        if !state.library.contains(type_name) {
            log::warn!("Unbekannter Bauteil-Typ '{}', Modus bleibt", type_name);
            return;
        }
    }

    if state.editor.wire_tool.cancel() {
        log::debug!("Leitung in Arbeit durch Moduswechsel verworfen");
    }
    state.editor.drag = None;
    log::info!("Modus: {}", mode.label());
    state.editor.mode = mode;
    state.view.request_redraw();
}

/// Registriert einen Klick im Leitungsmodus (Pin-Snap vor Grid-Snap).
pub fn wire_click(state: &mut AppState, world_pos: glam::Vec2) {
    let anchor = snap_to_pin(world_pos, &state.schematic, &state.library, &state.options);
    match state.editor.wire_tool.on_click(anchor.position()) {
        WireAction::Started => log::debug!("Leitung begonnen bei {:?}", anchor),
        WireAction::BendAdded => log::debug!("Knickpunkt {:?}", anchor),
        WireAction::Ignored => return,
    }
    state.view.request_redraw();
}

/// Aktualisiert den Vorschau-Endpunkt der Leitung in Arbeit.
pub fn update_wire_preview(state: &mut AppState, world_pos: glam::Vec2) {
    let anchor = snap_to_pin(world_pos, &state.schematic, &state.library, &state.options);
    if state.editor.wire_tool.on_pointer_moved(anchor.position()) {
        state.view.request_redraw();
    }
}

/// Schließt die Leitung in Arbeit ab.
///
/// Bei weniger als 2 Punkten wird still verworfen (`None`). Start- und
/// End-Verweis werden über Pin-Koinzidenz am ersten/letzten Punkt bestimmt.
pub fn finish_wire(state: &mut AppState) -> Option<u64> {
    let Some(points) = state.editor.wire_tool.finish() else {
        log::debug!("Leitung mit weniger als 2 Punkten verworfen");
        state.view.request_redraw();
        return None;
    };

    let library = state.library.clone();
    let resolve = |point: Option<&glam::Vec2>| {
        point.and_then(|p| {
            state
                .schematic
                .pin_at(*p, PIN_COINCIDENCE_TOLERANCE, &library)
                .map(|(pin, _)| pin)
        })
    };
    let start_ref = resolve(points.first());
    let end_ref = resolve(points.last());

    let point_count = points.len();
    let id = Arc::make_mut(&mut state.schematic).add_wire(points, start_ref, end_ref)?;

    state.selection.set(Some(EntityRef::Wire(id)));
    state.ui.set_status(format!("Wire {} added", id));
    state.commit_mutation("Leitung hinzugefügt");
    log::info!("Leitung {} mit {} Punkten hinzugefügt", id, point_count);
    Some(id)
}

/// Verwirft die Leitung in Arbeit unabhängig von der Punktanzahl.
pub fn cancel_wire(state: &mut AppState) {
    if state.editor.wire_tool.cancel() {
        log::debug!("Leitung verworfen");
        state.view.request_redraw();
    }
}
