//! Persistenz-Vertrag: `serialize` / `deserialize` als reine Datenumwandlung.
//!
//! Abgeleitete Pin-Positionen werden nicht gespeichert. Beim Laden wird das
//! Modell vollständig validiert und danach sofort diagnostiziert.

use super::component::Component;
use super::diagnostics::{diagnose, Diagnostic};
use super::library::ComponentLibrary;
use super::schematic::Schematic;
use super::wire::Wire;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Aktuelle Format-Version der Projektdaten.
pub const PROJECT_FORMAT_VERSION: &str = "1.0";

/// Serialisierbare Projektdaten (reine Daten, keine abgeleiteten Pins)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectBlob {
    /// Format-Version
    #[serde(default = "default_version")]
    pub version: String,
    /// Bauteile in Z-Reihenfolge
    pub components: Vec<Component>,
    /// Leitungen in Einfügereihenfolge
    pub wires: Vec<Wire>,
}

fn default_version() -> String {
    PROJECT_FORMAT_VERSION.to_string()
}

/// Fehler beim Einlesen von Projektdaten
#[derive(Debug, thiserror::Error)]
pub enum MalformedProjectError {
    /// Projektdaten sind kein gültiges JSON
    #[error("invalid project JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    /// Wurzel ist kein Objekt
    #[error("project data must be a JSON object")]
    NotAnObject,
    /// Pflichtfeld fehlt
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    /// Feld ist kein Array
    #[error("field '{0}' is not an array")]
    NotAnArray(&'static str),
    /// Eintrag konnte nicht gelesen werden
    #[error("invalid entry {index} in '{field}': {source}")]
    InvalidEntry {
        /// Betroffenes Feld
        field: &'static str,
        /// Index im Array
        index: usize,
        /// Ursache
        #[source]
        source: serde_json::Error,
    },
    /// Doppelte ID
    #[error("duplicate {kind} id {id}")]
    DuplicateId {
        /// "component" oder "wire"
        kind: &'static str,
        /// Betroffene ID
        id: u64,
    },
    /// Höchste ID lässt keine weitere ID zu
    #[error("{kind} id {id} leaves no room for new ids")]
    IdOverflow {
        /// "component" oder "wire"
        kind: &'static str,
        /// Höchste geladene ID
        id: u64,
    },
    /// Leitung mit weniger als 2 Punkten
    #[error("wire {0} has fewer than 2 points")]
    WireTooShort(u64),
    /// Leitung verweist auf ein fehlendes Bauteil
    #[error("wire {wire_id} references missing component {component_id}")]
    DanglingReference {
        /// Betroffene Leitung
        wire_id: u64,
        /// Fehlendes Bauteil
        component_id: u64,
    },
}

/// Ergebnis eines erfolgreichen Ladevorgangs
#[derive(Debug, Clone)]
pub struct LoadedProject {
    /// Rekonstruiertes Modell
    pub schematic: Schematic,
    /// Sofort berechnete Diagnosen
    pub diagnostics: Vec<Diagnostic>,
}

/// Wandelt das Modell in reine Projektdaten um.
pub fn serialize(schematic: &Schematic) -> ProjectBlob {
    ProjectBlob {
        version: default_version(),
        components: schematic.components().cloned().collect(),
        wires: schematic.wires().cloned().collect(),
    }
}

/// Rekonstruiert ein Modell aus Projektdaten und diagnostiziert es.
///
/// Schlägt fehl, wenn `components` oder `wires` fehlt bzw. kein Array ist oder
/// ein Eintrag die Modell-Invarianten verletzt. Es entsteht nie ein Teilmodell.
pub fn deserialize(
    blob: &serde_json::Value,
    library: &ComponentLibrary,
) -> Result<LoadedProject, MalformedProjectError> {
    let object = blob.as_object().ok_or(MalformedProjectError::NotAnObject)?;

    let components: Vec<Component> = parse_array(object, "components")?;
    let wires: Vec<Wire> = parse_array(object, "wires")?;

    let mut component_ids = HashSet::with_capacity(components.len());
    for component in &components {
        if !component_ids.insert(component.id) {
            return Err(MalformedProjectError::DuplicateId {
                kind: "component",
                id: component.id,
            });
        }
        if !library.contains(&component.type_name) {
            log::warn!(
                "Unbekannter Bauteil-Typ '{}' (Bauteil {}), keine Pins verfügbar",
                component.type_name,
                component.id
            );
        }
    }

    let mut wire_ids = HashSet::with_capacity(wires.len());
    for wire in &wires {
        if !wire_ids.insert(wire.id) {
            return Err(MalformedProjectError::DuplicateId {
                kind: "wire",
                id: wire.id,
            });
        }
        if wire.points.len() < Wire::MIN_POINTS {
            return Err(MalformedProjectError::WireTooShort(wire.id));
        }
        for pin in [wire.start_ref.as_ref(), wire.end_ref.as_ref()]
            .into_iter()
            .flatten()
        {
            if !component_ids.contains(&pin.component_id) {
                return Err(MalformedProjectError::DanglingReference {
                    wire_id: wire.id,
                    component_id: pin.component_id,
                });
            }
        }
    }

    let schematic = Schematic::from_parts(components, wires)?;
    let diagnostics = diagnose(&schematic, library);
    Ok(LoadedProject {
        schematic,
        diagnostics,
    })
}

/// Serialisiert das Modell als formatiertes JSON.
pub fn to_json_string(schematic: &Schematic) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serialize(schematic))
}

/// Parst JSON-Text und rekonstruiert das Modell.
pub fn from_json_str(
    content: &str,
    library: &ComponentLibrary,
) -> Result<LoadedProject, MalformedProjectError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(MalformedProjectError::InvalidJson)?;
    deserialize(&value, library)
}

fn parse_array<T: serde::de::DeserializeOwned>(
    object: &serde_json::Map<String, serde_json::Value>,
    field: &'static str,
) -> Result<Vec<T>, MalformedProjectError> {
    let entries = object
        .get(field)
        .ok_or(MalformedProjectError::MissingField(field))?
        .as_array()
        .ok_or(MalformedProjectError::NotAnArray(field))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            T::deserialize(entry)
                .map_err(|source| MalformedProjectError::InvalidEntry { field, index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PinRef, Rotation};
    use glam::Vec2;
    use serde_json::json;

    fn sample(library: &ComponentLibrary) -> Schematic {
        let mut schematic = Schematic::new();
        let and = schematic
            .place_component(library.get("AND").expect("Typ"), Vec2::new(0.0, 0.0))
            .expect("ID frei");
        let not = schematic
            .place_component(library.get("NOT").expect("Typ"), Vec2::new(120.0, 0.0))
            .expect("ID frei");
        schematic.set_component_rotation(not, Rotation::Deg90, library);
        schematic.set_component_value(and, "U1");
        schematic
            .add_wire(
                vec![Vec2::new(60.0, 25.0), Vec2::new(90.0, 25.0), Vec2::new(120.0, 25.0)],
                Some(PinRef::new(and, "Y")),
                None,
            )
            .expect("Leitung angelegt");
        schematic
    }

    #[test]
    fn test_roundtrip_is_structurally_equal() {
        let library = ComponentLibrary::builtin();
        let schematic = sample(&library);
        let value = serde_json::to_value(serialize(&schematic)).expect("JSON-Wert");
        let loaded = deserialize(&value, &library).expect("Laden erfolgreich");
        assert_eq!(loaded.schematic, schematic);
        assert_eq!(loaded.diagnostics, diagnose(&schematic, &library));
    }

    #[test]
    fn test_text_roundtrip() {
        let library = ComponentLibrary::builtin();
        let schematic = sample(&library);
        let text = to_json_string(&schematic).expect("JSON-Text");
        assert!(text.contains("\"startRef\""));
        assert!(text.contains("\"type\": \"AND\""));
        let loaded = from_json_str(&text, &library).expect("Laden erfolgreich");
        assert_eq!(loaded.schematic, schematic);
    }

    #[test]
    fn test_empty_object_is_malformed() {
        let library = ComponentLibrary::builtin();
        let err = deserialize(&json!({}), &library).expect_err("muss fehlschlagen");
        assert!(matches!(err, MalformedProjectError::MissingField("components")));
    }

    #[test]
    fn test_non_array_field_is_malformed() {
        let library = ComponentLibrary::builtin();
        let err = deserialize(&json!({"components": [], "wires": 3}), &library)
            .expect_err("muss fehlschlagen");
        assert!(matches!(err, MalformedProjectError::NotAnArray("wires")));
    }

    #[test]
    fn test_version_is_optional() {
        let library = ComponentLibrary::builtin();
        let loaded =
            deserialize(&json!({"components": [], "wires": []}), &library).expect("Laden");
        assert!(loaded.schematic.is_empty());
        assert!(loaded.diagnostics.is_empty());
    }

    #[test]
    fn test_invariant_violations_are_rejected() {
        let library = ComponentLibrary::builtin();
        let component = json!({"id": 1, "type": "NOT", "position": [0.0, 0.0], "width": 60.0, "height": 50.0});

        let duplicate = json!({"components": [component.clone(), component.clone()], "wires": []});
        assert!(matches!(
            deserialize(&duplicate, &library),
            Err(MalformedProjectError::DuplicateId { kind: "component", id: 1 })
        ));

        let short = json!({"components": [component.clone()], "wires": [{"id": 1, "points": [[0.0, 0.0]]}]});
        assert!(matches!(
            deserialize(&short, &library),
            Err(MalformedProjectError::WireTooShort(1))
        ));

        let dangling = json!({
            "components": [component],
            "wires": [{"id": 1, "points": [[0.0, 0.0], [1.0, 0.0]], "startRef": {"componentId": 9, "pinId": "A"}}]
        });
        assert!(matches!(
            deserialize(&dangling, &library),
            Err(MalformedProjectError::DanglingReference { wire_id: 1, component_id: 9 })
        ));

        let bad_rotation = json!({"components": [{"id": 1, "type": "NOT", "position": [0.0, 0.0], "width": 60.0, "height": 50.0, "rotation": 45}], "wires": []});
        assert!(matches!(
            deserialize(&bad_rotation, &library),
            Err(MalformedProjectError::InvalidEntry { field: "components", index: 0, .. })
        ));
    }

    #[test]
    fn test_loaded_project_reports_existing_issues() {
        let library = ComponentLibrary::builtin();
        let blob = json!({
            "components": [{"id": 4, "type": "NOT", "position": [0.0, 0.0], "width": 60.0, "height": 50.0}],
            "wires": []
        });
        let loaded = deserialize(&blob, &library).expect("Laden");
        assert_eq!(loaded.diagnostics.len(), 1);
        // Neue IDs setzen nach der höchsten geladenen ID fort
        let mut schematic = loaded.schematic;
        let next = schematic.place_component(library.get("AND").expect("Typ"), Vec2::ZERO);
        assert_eq!(next, Some(5));
    }

    #[test]
    fn test_max_id_is_rejected_instead_of_overflowing() {
        let library = ComponentLibrary::builtin();
        let components = json!({
            "components": [{"id": u64::MAX, "type": "NOT", "position": [0.0, 0.0], "width": 60.0, "height": 50.0}],
            "wires": []
        });
        assert!(matches!(
            deserialize(&components, &library),
            Err(MalformedProjectError::IdOverflow { kind: "component", id: u64::MAX })
        ));

        let wires = json!({
            "components": [],
            "wires": [{"id": u64::MAX, "points": [[0.0, 0.0], [10.0, 0.0]]}]
        });
        assert!(matches!(
            deserialize(&wires, &library),
            Err(MalformedProjectError::IdOverflow { kind: "wire", id: u64::MAX })
        ));

        // Eine ID darunter ist noch ladbar, danach ist der ID-Raum erschöpft
        let almost = json!({
            "components": [{"id": u64::MAX - 1, "type": "NOT", "position": [0.0, 0.0], "width": 60.0, "height": 50.0}],
            "wires": []
        });
        let mut schematic = deserialize(&almost, &library).expect("Laden").schematic;
        let not = library.get("NOT").expect("Typ");
        assert!(schematic.place_component(not, Vec2::ZERO).is_none());
        assert_eq!(schematic.component_count(), 1);
    }

    #[test]
    fn test_invalid_json_text() {
        let library = ComponentLibrary::builtin();
        assert!(matches!(
            from_json_str("{not json", &library),
            Err(MalformedProjectError::InvalidJson(_))
        ));
    }
}
