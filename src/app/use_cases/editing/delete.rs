//! Use-Case: Selektierte Entität löschen.

use crate::app::AppState;
use crate::core::EntityRef;
use std::sync::Arc;

/// Löscht die selektierte Entität. Bauteile nehmen ihre Leitungen mit.
///
/// Gibt `true` zurück, wenn das Modell verändert wurde. Eine Selektion, die
/// auf eine nicht mehr existierende Entität zeigt, wird still verworfen.
pub fn delete_selected(state: &mut AppState) -> bool {
    let Some(entity) = state.selection.selected else {
        log::debug!("Nichts zum Löschen selektiert");
        return false;
    };

    if !state.schematic.contains(entity) {
        log::debug!("Löschen: {:?} existiert nicht mehr", entity);
        state.selection.clear();
        return false;
    }

    let schematic = Arc::make_mut(&mut state.schematic);
    let message = match entity {
        EntityRef::Component(id) => match schematic.delete_component(id) {
            Some((component, wires)) => {
                log::info!(
                    "Bauteil {} ({}) gelöscht, {} Leitung(en) kaskadiert",
                    id,
                    component.type_name,
                    wires.len()
                );
                format!("Deleted component {} and {} wire(s)", id, wires.len())
            }
            None => return false,
        },
        EntityRef::Wire(id) => match schematic.delete_wire(id) {
            Some(_) => {
                log::info!("Leitung {} gelöscht", id);
                format!("Deleted wire {}", id)
            }
            None => return false,
        },
    };

    state.selection.clear();
    state.ui.set_status(message);
    state.commit_mutation("Entität gelöscht");
    true
}
