use glam::Vec2;
use schematic_capture::core::project::{from_json_str, to_json_string};
use schematic_capture::{
    deserialize, serialize, ComponentLibrary, MalformedProjectError, PinRef, Rotation, Schematic,
};
use serde_json::json;

fn adder_slice(library: &ComponentLibrary) -> Schematic {
    let mut schematic = Schematic::new();
    let xor = schematic
        .place_component(library.get("XOR").expect("Typ"), Vec2::ZERO)
        .expect("ID frei");
    let and = schematic
        .place_component(library.get("AND").expect("Typ"), Vec2::new(0.0, 100.0))
        .expect("ID frei");
    let dff = schematic
        .place_component(library.get("FLIPFLOP").expect("Typ"), Vec2::new(150.0, 0.0))
        .expect("ID frei");
    schematic.set_component_rotation(and, Rotation::Deg180, library);
    schematic.set_component_value(dff, "SUM_REG");
    schematic
        .add_wire(
            vec![Vec2::new(60.0, 25.0), Vec2::new(150.0, 10.0)],
            Some(PinRef::new(xor, "Y")),
            Some(PinRef::new(dff, "D")),
        )
        .expect("Leitung angelegt");
    schematic
        .add_wire(vec![Vec2::new(-40.0, 15.0), Vec2::new(0.0, 15.0)], None, Some(PinRef::new(xor, "A")))
        .expect("Leitung angelegt");
    schematic
}

#[test]
fn test_blob_roundtrip_preserves_order_and_fields() {
    let library = ComponentLibrary::builtin();
    let schematic = adder_slice(&library);

    let blob = serde_json::to_value(serialize(&schematic)).expect("JSON-Wert");
    let types: Vec<&str> = blob["components"]
        .as_array()
        .expect("Array vorhanden")
        .iter()
        .filter_map(|c| c["type"].as_str())
        .collect();
    assert_eq!(types, ["XOR", "AND", "FLIPFLOP"]);
    assert_eq!(blob["components"][1]["rotation"], json!(180));
    assert!(blob["wires"][1]["startRef"].is_null());

    let loaded = deserialize(&blob, &library).expect("Laden erfolgreich");
    assert_eq!(loaded.schematic, schematic);
}

#[test]
fn test_text_roundtrip_keeps_diagnostics() {
    let library = ComponentLibrary::builtin();
    let schematic = adder_slice(&library);
    let text = to_json_string(&schematic).expect("JSON-Text");

    let loaded = from_json_str(&text, &library).expect("Laden erfolgreich");

    assert_eq!(loaded.diagnostics, schematic_capture::diagnose(&schematic, &library));
    assert!(!loaded.diagnostics.is_empty());
}

#[test]
fn test_pin_positions_are_not_stored() {
    let library = ComponentLibrary::builtin();
    let text = to_json_string(&adder_slice(&library)).expect("JSON-Text");
    assert!(!text.contains("\"pins\""));
}

#[test]
fn test_unknown_type_loads_without_pins() {
    let library = ComponentLibrary::builtin();
    let blob = json!({
        "version": "1.0",
        "components": [
            {"id": 7, "type": "OPAMP", "position": [10.0, 20.0], "width": 60.0, "height": 50.0}
        ],
        "wires": []
    });

    let loaded = deserialize(&blob, &library).expect("Laden erfolgreich");

    assert_eq!(loaded.schematic.component_count(), 1);
    assert!(loaded.schematic.pins_of(7, &library).is_empty());
    assert!(loaded.diagnostics.is_empty());
}

#[test]
fn test_malformed_blobs_are_rejected() {
    let library = ComponentLibrary::builtin();

    assert!(matches!(
        deserialize(&json!([]), &library),
        Err(MalformedProjectError::NotAnObject)
    ));
    assert!(matches!(
        deserialize(&json!({"components": []}), &library),
        Err(MalformedProjectError::MissingField("wires"))
    ));
    assert!(matches!(
        deserialize(&json!({"components": {}, "wires": []}), &library),
        Err(MalformedProjectError::NotAnArray("components"))
    ));
    assert!(matches!(
        deserialize(
            &json!({"components": [], "wires": [{"id": 1, "points": [[0.0, 0.0], [5.0, 0.0]]}, {"id": 1, "points": [[0.0, 0.0], [5.0, 0.0]]}]}),
            &library
        ),
        Err(MalformedProjectError::DuplicateId { kind: "wire", id: 1 })
    ));
}

#[test]
fn test_error_messages_are_readable() {
    let library = ComponentLibrary::builtin();
    let err = deserialize(&json!({"wires": []}), &library).expect_err("muss fehlschlagen");
    assert_eq!(err.to_string(), "missing field 'components'");
}
