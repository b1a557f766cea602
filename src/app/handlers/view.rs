//! Handler für Viewport und Darstellung.

use crate::app::use_cases;
use crate::app::AppState;

/// Zoom auf 100 % zurücksetzen.
pub fn reset_zoom(state: &mut AppState) {
    use_cases::viewport::reset_zoom(state);
}

/// Stufenweise hineinzoomen.
pub fn zoom_in(state: &mut AppState) {
    use_cases::viewport::zoom_in(state);
}

/// Stufenweise herauszoomen.
pub fn zoom_out(state: &mut AppState) {
    use_cases::viewport::zoom_out(state);
}

/// Zoom um Prozentpunkte, optional zum Fokuspunkt.
pub fn zoom_by(state: &mut AppState, delta_percent: f32, focus_screen: Option<glam::Vec2>) {
    use_cases::viewport::zoom_by(state, delta_percent, focus_screen);
}

/// Ansicht verschieben.
pub fn pan(state: &mut AppState, delta_logical: glam::Vec2) {
    use_cases::viewport::pan(state, delta_logical);
}

/// Grid ein-/ausblenden.
pub fn toggle_grid(state: &mut AppState) {
    use_cases::viewport::toggle_grid(state);
}

/// Snapping umschalten.
pub fn toggle_snap(state: &mut AppState) {
    use_cases::viewport::toggle_snap(state);
}

/// Größe der Zeichenfläche setzen.
pub fn set_surface_size(state: &mut AppState, size: [f32; 2], pixels_per_point: f32) {
    use_cases::viewport::resize(state, size, pixels_per_point);
}
