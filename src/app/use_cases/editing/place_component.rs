//! Use-Case: Bauteil an einer Weltposition platzieren.

use crate::app::state::DrawingMode;
use crate::app::AppState;
use crate::core::EntityRef;
use std::sync::Arc;

/// Platziert ein Bauteil des Typs an `snap(world_pos)`.
///
/// Das neue Bauteil wird selektiert, der Editor kehrt in den Select-Modus
/// zurück. Unbekannte Typen sind ein No-op (`None`).
pub fn place_component(state: &mut AppState, type_name: &str, world_pos: glam::Vec2) -> Option<u64> {
    let library = state.library.clone();
    let Some(component_type) = library.get(type_name) else {
        log::warn!("Unbekannter Bauteil-Typ '{}', nichts platziert", type_name);
        return None;
    };

    let position = state.options.snap(world_pos);
    let Some(id) = Arc::make_mut(&mut state.schematic).place_component(component_type, position)
    else {
        log::error!("Keine freie Bauteil-ID mehr, nichts platziert");
        state.ui.set_status("No free component id left");
        return None;
    };

    state.selection.set(Some(EntityRef::Component(id)));
    state.editor.mode = DrawingMode::Select;
    state
        .ui
        .set_status(format!("Placed {}", component_type.label));
    state.commit_mutation("Bauteil platziert");

    log::info!(
        "Bauteil {} ({}) an Position ({:.1}, {:.1}) platziert",
        id,
        type_name,
        position.x,
        position.y
    );
    Some(id)
}
