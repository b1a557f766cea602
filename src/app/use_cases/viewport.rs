//! Use-Case-Funktionen für Viewport-Zustand (Zoom, Scroll, Grid).

use crate::app::AppState;
use glam::Vec2;

/// Aktualisiert Größe und Pixeldichte der Zeichenfläche.
pub fn resize(state: &mut AppState, size: [f32; 2], pixels_per_point: f32) {
    let ratio = if pixels_per_point.is_finite() && pixels_per_point > 0.0 {
        pixels_per_point
    } else {
        1.0
    };
    if state.view.surface_size == size && state.view.viewport.device_pixel_ratio == ratio {
        return;
    }
    state.view.surface_size = size;
    state.view.viewport.device_pixel_ratio = ratio;
    state.view.request_redraw();
}

/// Zoomt um `delta_percent` Prozentpunkte, optional zum Fokuspunkt (physische Pixel).
pub fn zoom_by(state: &mut AppState, delta_percent: f32, focus_screen: Option<Vec2>) {
    let before = state.view.viewport.zoom_percent;
    state.view.viewport.zoom_towards(delta_percent, focus_screen);
    if state.view.viewport.zoom_percent != before {
        log::debug!("Zoom: {:.0}%", state.view.viewport.zoom_percent);
        state.view.request_redraw();
    }
}

/// Zoomt einen Schritt hinein (Fokus: Mitte der Zeichenfläche).
pub fn zoom_in(state: &mut AppState) {
    let step = state.options.zoom_step_percent;
    zoom_by(state, step, surface_center(state));
}

/// Zoomt einen Schritt heraus (Fokus: Mitte der Zeichenfläche).
pub fn zoom_out(state: &mut AppState) {
    let step = state.options.zoom_step_percent;
    zoom_by(state, -step, surface_center(state));
}

/// Setzt Zoom auf 100 % und den Scroll-Offset auf 0.
pub fn reset_zoom(state: &mut AppState) {
    state.view.viewport.reset();
    state.view.request_redraw();
}

/// Verschiebt die Ansicht um ein Delta in logischen Pixeln.
pub fn pan(state: &mut AppState, delta_logical: Vec2) {
    if delta_logical == Vec2::ZERO {
        return;
    }
    state.view.viewport.pan(delta_logical);
    state.view.request_redraw();
}

/// Blendet das Grid ein oder aus.
pub fn toggle_grid(state: &mut AppState) {
    state.options.show_grid = !state.options.show_grid;
    state.ui.set_status(if state.options.show_grid {
        "Grid shown"
    } else {
        "Grid hidden"
    });
    state.view.request_redraw();
}

/// Schaltet das Grid-Snapping um.
pub fn toggle_snap(state: &mut AppState) {
    state.options.snap_to_grid = !state.options.snap_to_grid;
    state.ui.set_status(if state.options.snap_to_grid {
        "Snap to grid on"
    } else {
        "Snap to grid off"
    });
}

fn surface_center(state: &AppState) -> Option<Vec2> {
    let [w, h] = state.view.surface_size;
    let dpr = state.view.viewport.device_pixel_ratio;
    (w > 0.0 && h > 0.0).then(|| Vec2::new(w, h) * 0.5 * dpr)
}
