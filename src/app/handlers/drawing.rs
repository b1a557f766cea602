//! Handler für Modus-Wechsel und Leitungswerkzeug.

use crate::app::state::DrawingMode;
use crate::app::use_cases;
use crate::app::AppState;

/// Wechselt den Interaktionsmodus.
pub fn set_mode(state: &mut AppState, mode: DrawingMode) {
    use_cases::drawing::set_drawing_mode(state, mode);
}

/// Klick im Leitungsmodus.
pub fn click(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::drawing::wire_click(state, world_pos);
}

/// Vorschau-Endpunkt nachführen.
pub fn preview(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::drawing::update_wire_preview(state, world_pos);
}

/// Leitung abschließen.
pub fn finish(state: &mut AppState) {
    use_cases::drawing::finish_wire(state);
}

/// Leitung verwerfen.
pub fn cancel(state: &mut AppState) {
    use_cases::drawing::cancel_wire(state);
}
