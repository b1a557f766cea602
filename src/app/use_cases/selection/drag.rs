//! Use-Case: Bauteil per Drag verschieben.
//!
//! Während des Drags wird das Modell direkt verändert; der History-Eintrag
//! entsteht erst beim Drag-Ende und nur bei tatsächlicher Verschiebung.

use crate::app::state::DragState;
use crate::app::AppState;
use crate::core::{hit_test, EntityRef};
use std::sync::Arc;

/// Beginnt einen Drag: selektiert die getroffene Entität, Bauteile werden gegriffen.
pub fn begin_drag(state: &mut AppState, world_pos: glam::Vec2, tolerance: f32) {
    let hit = hit_test(&state.schematic, world_pos, tolerance);
    state.selection.set(hit);
    state.editor.drag = match hit {
        Some(EntityRef::Component(id)) => state.schematic.component(id).map(|c| DragState {
            component_id: id,
            grab_offset: world_pos - c.position,
            start_position: c.position,
        }),
        _ => None,
    };
    state.view.request_redraw();
}

/// Führt das gezogene Bauteil gerastert nach (Greifpunkt bleibt erhalten).
pub fn update_drag(state: &mut AppState, world_pos: glam::Vec2) {
    let Some(drag) = state.editor.drag else {
        return;
    };
    let target = state.options.snap(world_pos - drag.grab_offset);
    match state.schematic.component(drag.component_id) {
        Some(component) if component.position != target => {}
        _ => return,
    }

    let library = state.library.clone();
    Arc::make_mut(&mut state.schematic).move_component(drag.component_id, target, &library);
    state.view.request_redraw();
}

/// Beendet den Drag und legt genau einen History-Eintrag an, falls verschoben.
pub fn end_drag(state: &mut AppState) {
    let Some(drag) = state.editor.drag.take() else {
        return;
    };
    let Some(component) = state.schematic.component(drag.component_id) else {
        return;
    };
    let end_position = component.position;

    if end_position == drag.start_position {
        log::debug!("Drag ohne Verschiebung beendet");
        return;
    }

    state.commit_mutation("Bauteil verschoben");
    log::info!(
        "Bauteil {} nach ({:.1}, {:.1}) verschoben",
        drag.component_id,
        end_position.x,
        end_position.y
    );
}
