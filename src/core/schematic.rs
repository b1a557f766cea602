//! Das Schaltplan-Modell: Bauteile und Leitungen mit definierter Mutations-API.

use super::component::{Component, Rotation};
use super::library::{ComponentLibrary, ComponentType};
use super::pin::{Pin, PinRef, PinRole};
use super::project::MalformedProjectError;
use super::wire::Wire;
use glam::Vec2;
use indexmap::IndexMap;

/// Verweis auf eine Entität des Modells (Selektion, Hit-Test, Diagnosen)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    /// Bauteil mit ID
    Component(u64),
    /// Leitung mit ID
    Wire(u64),
}

/// Container für alle Bauteile und Leitungen eines Projekts.
///
/// Die Einfügereihenfolge der Bauteile ist die Z-Reihenfolge (zuletzt
/// hinzugefügt = oben). Pin-Positionen werden nie gespeichert, sondern immer
/// aus Bauteil-Position und -Rotation abgeleitet.
#[derive(Debug, Clone)]
pub struct Schematic {
    components: IndexMap<u64, Component>,
    wires: IndexMap<u64, Wire>,
    next_component_id: u64,
    next_wire_id: u64,
}

impl Default for Schematic {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Schematic {
    fn eq(&self, other: &Self) -> bool {
        // ID-Zähler gehören nicht zur Struktur
        self.components == other.components && self.wires == other.wires
    }
}

impl Schematic {
    /// Erstellt ein leeres Modell.
    pub fn new() -> Self {
        Self {
            components: IndexMap::new(),
            wires: IndexMap::new(),
            next_component_id: 1,
            next_wire_id: 1,
        }
    }

    /// Baut ein Modell aus bereits validierten Teilen auf.
    ///
    /// Die ID-Zähler werden auf `max(id) + 1` gesetzt. Ist keine weitere ID
    /// mehr darstellbar, wird das Modell abgelehnt.
    pub(crate) fn from_parts(
        components: Vec<Component>,
        wires: Vec<Wire>,
    ) -> Result<Self, MalformedProjectError> {
        let next_component_id = next_id_after(components.iter().map(|c| c.id), "component")?;
        let next_wire_id = next_id_after(wires.iter().map(|w| w.id), "wire")?;
        Ok(Self {
            components: components.into_iter().map(|c| (c.id, c)).collect(),
            wires: wires.into_iter().map(|w| (w.id, w)).collect(),
            next_component_id,
            next_wire_id,
        })
    }

    /// Anzahl der Bauteile.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Anzahl der Leitungen.
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Gibt `true` zurück, wenn weder Bauteile noch Leitungen existieren.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.wires.is_empty()
    }

    /// Bauteile in Z-Reihenfolge (unten nach oben).
    pub fn components(&self) -> impl DoubleEndedIterator<Item = &Component> {
        self.components.values()
    }

    /// Leitungen in Einfügereihenfolge.
    pub fn wires(&self) -> impl DoubleEndedIterator<Item = &Wire> {
        self.wires.values()
    }

    /// Sucht ein Bauteil per ID.
    pub fn component(&self, id: u64) -> Option<&Component> {
        self.components.get(&id)
    }

    /// Sucht eine Leitung per ID.
    pub fn wire(&self, id: u64) -> Option<&Wire> {
        self.wires.get(&id)
    }

    /// Prüft, ob die referenzierte Entität existiert.
    pub fn contains(&self, entity: EntityRef) -> bool {
        match entity {
            EntityRef::Component(id) => self.components.contains_key(&id),
            EntityRef::Wire(id) => self.wires.contains_key(&id),
        }
    }

    // ── Mutationen ──────────────────────────────────────────────────

    /// Platziert ein neues Bauteil und gibt dessen ID zurück.
    ///
    /// `None`, wenn der ID-Raum erschöpft ist; das Modell bleibt dann unverändert.
    pub fn place_component(
        &mut self,
        component_type: &ComponentType,
        position: Vec2,
    ) -> Option<u64> {
        let id = self.next_component_id;
        self.next_component_id = id.checked_add(1)?;
        self.components
            .insert(id, Component::from_type(id, component_type, position));
        Some(id)
    }

    /// Fügt eine Leitung hinzu. Weniger als 2 Punkte oder ein erschöpfter
    /// ID-Raum ergeben `None`, das Modell bleibt unverändert.
    pub fn add_wire(
        &mut self,
        points: Vec<Vec2>,
        start_ref: Option<PinRef>,
        end_ref: Option<PinRef>,
    ) -> Option<u64> {
        let id = self.next_wire_id;
        let next_id = id.checked_add(1)?;
        let wire = Wire::new(id, points, start_ref, end_ref)?;
        self.next_wire_id = next_id;
        self.wires.insert(id, wire);
        Some(id)
    }

    /// Verschiebt ein Bauteil und zieht angeschlossene Leitungsenden nach.
    pub fn move_component(&mut self, id: u64, position: Vec2, library: &ComponentLibrary) -> bool {
        let Some(component) = self.components.get_mut(&id) else {
            return false;
        };
        component.position = position;
        self.reroute_wires_of(id, library);
        true
    }

    /// Setzt die Rotation eines Bauteils und zieht angeschlossene Leitungsenden nach.
    pub fn set_component_rotation(
        &mut self,
        id: u64,
        rotation: Rotation,
        library: &ComponentLibrary,
    ) -> bool {
        let Some(component) = self.components.get_mut(&id) else {
            return false;
        };
        component.rotation = rotation;
        self.reroute_wires_of(id, library);
        true
    }

    /// Setzt die Beschriftung eines Bauteils.
    pub fn set_component_value(&mut self, id: u64, value: impl Into<String>) -> bool {
        let Some(component) = self.components.get_mut(&id) else {
            return false;
        };
        component.value = value.into();
        true
    }

    /// Löscht ein Bauteil samt aller Leitungen, die es per Start- oder End-Verweis nennen.
    ///
    /// Unbekannte IDs sind ein No-op (`None`).
    pub fn delete_component(&mut self, id: u64) -> Option<(Component, Vec<Wire>)> {
        let component = self.components.shift_remove(&id)?;
        let cascaded: Vec<u64> = self
            .wires
            .values()
            .filter(|w| w.references_component(id))
            .map(|w| w.id)
            .collect();
        let removed_wires = cascaded
            .into_iter()
            .filter_map(|wire_id| self.wires.shift_remove(&wire_id))
            .collect();
        Some((component, removed_wires))
    }

    /// Löscht eine Leitung. Unbekannte IDs sind ein No-op (`None`).
    pub fn delete_wire(&mut self, id: u64) -> Option<Wire> {
        self.wires.shift_remove(&id)
    }

    /// Löscht die referenzierte Entität; gibt `true` zurück, wenn etwas entfernt wurde.
    pub fn delete_entity(&mut self, entity: EntityRef) -> bool {
        match entity {
            EntityRef::Component(id) => self.delete_component(id).is_some(),
            EntityRef::Wire(id) => self.delete_wire(id).is_some(),
        }
    }

    // ── Pins ────────────────────────────────────────────────────────

    /// Alle abgeleiteten Pins eines Bauteils (leer bei unbekanntem Typ).
    pub fn pins_of<'a>(&self, component_id: u64, library: &'a ComponentLibrary) -> Vec<Pin<'a>> {
        self.components
            .get(&component_id)
            .and_then(|component| {
                library
                    .get(&component.type_name)
                    .map(|component_type| component.pins(component_type))
            })
            .unwrap_or_default()
    }

    /// Abgeleitete Position eines referenzierten Pins.
    pub fn pin_position(&self, pin: &PinRef, library: &ComponentLibrary) -> Option<Vec2> {
        let component = self.components.get(&pin.component_id)?;
        let template = library.get(&component.type_name)?.pin(&pin.pin_id)?;
        Some(component.pin_position(template))
    }

    /// Rolle eines referenzierten Pins.
    pub fn pin_role(&self, pin: &PinRef, library: &ComponentLibrary) -> Option<PinRole> {
        let component = self.components.get(&pin.component_id)?;
        library
            .get(&component.type_name)?
            .pin(&pin.pin_id)
            .map(|t| t.role)
    }

    /// Findet den obersten Pin innerhalb von `tolerance` um `point`.
    ///
    /// Bauteile werden von oben nach unten geprüft, Pins in Template-Reihenfolge.
    pub fn pin_at(
        &self,
        point: Vec2,
        tolerance: f32,
        library: &ComponentLibrary,
    ) -> Option<(PinRef, Vec2)> {
        self.components.values().rev().find_map(|component| {
            let component_type = library.get(&component.type_name)?;
            component
                .pins(component_type)
                .into_iter()
                .find(|pin| pin.position.distance(point) <= tolerance)
                .map(|pin| (pin.pin_ref(), pin.position))
        })
    }

    fn reroute_wires_of(&mut self, component_id: u64, library: &ComponentLibrary) {
        let Some(component) = self.components.get(&component_id) else {
            return;
        };
        let Some(component_type) = library.get(&component.type_name) else {
            return;
        };

        for wire in self.wires.values_mut() {
            if let Some(start) = wire.start_ref.as_ref() {
                if start.component_id == component_id {
                    if let (Some(template), Some(first)) =
                        (component_type.pin(&start.pin_id), wire.points.first_mut())
                    {
                        *first = component.pin_position(template);
                    }
                }
            }
            if let Some(end) = wire.end_ref.as_ref() {
                if end.component_id == component_id {
                    if let (Some(template), Some(last)) =
                        (component_type.pin(&end.pin_id), wire.points.last_mut())
                    {
                        *last = component.pin_position(template);
                    }
                }
            }
        }
    }
}

fn next_id_after(
    ids: impl Iterator<Item = u64>,
    kind: &'static str,
) -> Result<u64, MalformedProjectError> {
    match ids.max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or(MalformedProjectError::IdOverflow { kind, id: max }),
    }
}
