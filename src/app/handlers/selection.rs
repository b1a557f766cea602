//! Handler für Selektion und Drag.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::EntityRef;

/// Oberste Entität am Punkt selektieren.
pub fn select_at(state: &mut AppState, world_pos: glam::Vec2, tolerance: f32) {
    use_cases::selection::select_at(state, world_pos, tolerance);
}

/// Entität direkt selektieren.
pub fn select_entity(state: &mut AppState, entity: EntityRef) {
    use_cases::selection::select_entity(state, entity);
}

/// Selektion aufheben.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Drag beginnen.
pub fn begin_drag(state: &mut AppState, world_pos: glam::Vec2, tolerance: f32) {
    use_cases::selection::begin_drag(state, world_pos, tolerance);
}

/// Drag nachführen.
pub fn update_drag(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::selection::update_drag(state, world_pos);
}

/// Drag beenden.
pub fn end_drag(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}
