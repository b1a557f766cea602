use crate::core::{EntityRef, Schematic};

/// Auswahlbezogener Anwendungszustand: höchstens eine Entität.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Aktuell selektierte Entität
    pub selected: Option<EntityRef>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Selektiert eine Entität (oder hebt die Selektion mit `None` auf).
    pub fn set(&mut self, entity: Option<EntityRef>) {
        self.selected = entity;
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// ID des selektierten Bauteils.
    pub fn component_id(&self) -> Option<u64> {
        match self.selected {
            Some(EntityRef::Component(id)) => Some(id),
            _ => None,
        }
    }

    /// ID der selektierten Leitung.
    pub fn wire_id(&self) -> Option<u64> {
        match self.selected {
            Some(EntityRef::Wire(id)) => Some(id),
            _ => None,
        }
    }

    /// Verwirft die Selektion, falls die Entität nicht mehr existiert.
    ///
    /// Gibt `true` zurück, wenn die Selektion aufgehoben wurde.
    pub fn retain_existing(&mut self, schematic: &Schematic) -> bool {
        match self.selected {
            Some(entity) if !schematic.contains(entity) => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}
