//! Use-Case: Entität per Klick oder direkt selektieren.

use crate::app::AppState;
use crate::core::{hit_test, EntityRef};

/// Selektiert die oberste Entität am Weltpunkt; ein Fehlklick hebt die Selektion auf.
pub fn select_at(state: &mut AppState, world_pos: glam::Vec2, tolerance: f32) {
    let hit = hit_test(&state.schematic, world_pos, tolerance);
    if state.selection.selected != hit {
        state.selection.set(hit);
        state.view.request_redraw();
    }
    log::debug!(
        "Selektion an ({:.1}, {:.1}): {:?}",
        world_pos.x,
        world_pos.y,
        hit
    );
}

/// Selektiert eine Entität direkt (z.B. aus einer Diagnose).
pub fn select_entity(state: &mut AppState, entity: EntityRef) {
    if !state.schematic.contains(entity) {
        log::debug!("Selektion: {:?} existiert nicht", entity);
        return;
    }
    state.selection.set(Some(entity));
    state.view.request_redraw();
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    if state.selection.selected.take().is_some() {
        state.view.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::sync::Arc;

    #[test]
    fn miss_clears_and_hit_selects() {
        let mut state = AppState::new();
        let library = state.library.clone();
        let id = Arc::make_mut(&mut state.schematic)
            .place_component(library.get("NOT").expect("NOT vorhanden"), Vec2::ZERO)
            .expect("ID frei");

        select_at(&mut state, Vec2::new(30.0, 20.0), 5.0);
        assert_eq!(state.selection.selected, Some(EntityRef::Component(id)));

        select_at(&mut state, Vec2::new(300.0, 300.0), 5.0);
        assert!(state.selection.selected.is_none());
    }

    #[test]
    fn select_entity_ignores_unknown_ids() {
        let mut state = AppState::new();
        select_entity(&mut state, EntityRef::Wire(4));
        assert!(state.selection.selected.is_none());
    }
}
