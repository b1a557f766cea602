//! Handler für Bauteil- und Leitungs-Editing.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Rotation;

/// Bauteil platzieren.
pub fn place_component(state: &mut AppState, type_name: &str, world_pos: glam::Vec2) {
    use_cases::editing::place_component(state, type_name, world_pos);
}

/// Selektierte Entität löschen.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}

/// Selektiertes Bauteil drehen.
pub fn rotate_selected(state: &mut AppState) {
    use_cases::editing::rotate_selected(state);
}

/// Beschriftung setzen.
pub fn set_value(state: &mut AppState, component_id: u64, value: String) {
    use_cases::editing::set_component_value(state, component_id, value);
}

/// Rotation setzen.
pub fn set_rotation(state: &mut AppState, component_id: u64, rotation: Rotation) {
    use_cases::editing::set_component_rotation(state, component_id, rotation);
}
