//! Use-Case: Eigenschaften eines Bauteils ändern (Beschriftung, Rotation).

use crate::app::AppState;
use crate::core::{EntityRef, Rotation};
use std::sync::Arc;

/// Dreht das selektierte Bauteil um 90° im Uhrzeigersinn.
pub fn rotate_selected(state: &mut AppState) -> bool {
    let Some(EntityRef::Component(id)) = state.selection.selected else {
        log::debug!("Drehen: kein Bauteil selektiert");
        return false;
    };
    let Some(component) = state.schematic.component(id) else {
        return false;
    };
    let rotation = component.rotation.rotated_cw();
    set_component_rotation(state, id, rotation)
}

/// Setzt die Rotation eines Bauteils; angeschlossene Leitungsenden folgen.
pub fn set_component_rotation(state: &mut AppState, component_id: u64, rotation: Rotation) -> bool {
    match state.schematic.component(component_id) {
        Some(component) if component.rotation != rotation => {}
        Some(_) => {
            log::debug!("Rotation von Bauteil {} unverändert", component_id);
            return false;
        }
        None => {
            log::debug!("Rotation: Bauteil {} existiert nicht", component_id);
            return false;
        }
    }

    let library = state.library.clone();
    Arc::make_mut(&mut state.schematic).set_component_rotation(component_id, rotation, &library);
    state.commit_mutation("Rotation geändert");
    log::info!(
        "Bauteil {} auf {}° gedreht",
        component_id,
        rotation.degrees()
    );
    true
}

/// Setzt die Beschriftung eines Bauteils.
pub fn set_component_value(state: &mut AppState, component_id: u64, value: String) -> bool {
    match state.schematic.component(component_id) {
        Some(component) if component.value != value => {}
        _ => {
            log::debug!("Beschriftung von Bauteil {} unverändert", component_id);
            return false;
        }
    }

    Arc::make_mut(&mut state.schematic).set_component_value(component_id, value);
    state.commit_mutation("Beschriftung geändert");
    log::info!("Beschriftung von Bauteil {} geändert", component_id);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn state_with_resistor() -> (AppState, u64) {
        let mut state = AppState::new();
        let library = state.library.clone();
        let id = Arc::make_mut(&mut state.schematic)
            .place_component(library.get("RESISTOR").expect("RESISTOR vorhanden"), Vec2::ZERO)
            .expect("ID frei");
        state.commit_mutation("Testaufbau");
        (state, id)
    }

    #[test]
    fn rotate_selected_cycles_quarter_turns() {
        let (mut state, id) = state_with_resistor();
        state.selection.set(Some(EntityRef::Component(id)));

        for expected in [Rotation::Deg90, Rotation::Deg180, Rotation::Deg270, Rotation::Deg0] {
            assert!(rotate_selected(&mut state));
            let component = state.schematic.component(id).expect("Bauteil vorhanden");
            assert_eq!(component.rotation, expected);
        }
        assert_eq!(state.history.len(), 6);
    }

    #[test]
    fn unchanged_value_records_no_history() {
        let (mut state, id) = state_with_resistor();
        let before = state.history.len();

        assert!(!set_component_value(&mut state, id, "1k".to_string()));
        assert_eq!(state.history.len(), before);

        assert!(set_component_value(&mut state, id, "4k7".to_string()));
        assert_eq!(state.history.len(), before + 1);
        let component = state.schematic.component(id).expect("Bauteil vorhanden");
        assert_eq!(component.value, "4k7");
    }
}
