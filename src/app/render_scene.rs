//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::Severity;
use crate::shared::RenderScene;
use std::collections::HashSet;
use std::sync::Arc;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Bauteile und Pins mit Error-Diagnosen werden für die Hervorhebung gesammelt.
pub fn build(state: &AppState) -> RenderScene {
    let errors = state
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error);

    let mut flagged_components = HashSet::new();
    let mut flagged_pins = HashSet::new();
    for diagnostic in errors {
        if let Some(component_id) = diagnostic.refs.component_id {
            flagged_components.insert(component_id);
        }
        if let Some(pin) = diagnostic.pin() {
            flagged_pins.insert(pin);
        }
    }

    RenderScene {
        schematic: state.schematic.clone(),
        library: state.library.clone(),
        viewport: state.view.viewport.clone(),
        surface_size: state.view.surface_size,
        selection: state.selection.selected,
        wire_preview: state.editor.wire_tool.preview(),
        flagged_components: Arc::new(flagged_components),
        flagged_pins: Arc::new(flagged_pins),
        options: state.options.clone(),
    }
}
