//! Bauteil-Bibliothek: Registry der Bauteil-Typen mit ihren Pin-Templates.
//!
//! Die eingebaute Bibliothek enthält Logik-Bausteine (Gatter, Flip-Flop, ALU,
//! Speicher) und Platinen-Bauteile (Widerstand, Kondensator, IC). Eine eigene
//! Bibliothek kann als TOML neben der Binary abgelegt werden.

use super::pin::{PinRole, PinTemplate};
use anyhow::Context;
use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Größe der Logik-Bausteine.
const LOGIC_SIZE: Vec2 = Vec2::new(60.0, 50.0);
/// Größe der breiten Logik-Blöcke (ALU, Speicher).
const BLOCK_SIZE: Vec2 = Vec2::new(60.0, 70.0);
/// Größe der Platinen-Bauteile.
const BOARD_SIZE: Vec2 = Vec2::new(60.0, 60.0);

/// Ein Bauteil-Typ mit statischen Pin-Templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentType {
    /// Typ-Name (Schlüssel in der Bibliothek, z.B. "AND")
    pub name: String,
    /// Anzeigename (z.B. "AND Gate")
    pub label: String,
    /// Kurzsymbol im Bauteilkörper (z.B. "&")
    pub symbol: String,
    /// Breite in Welteinheiten
    pub width: f32,
    /// Höhe in Welteinheiten
    pub height: f32,
    /// Startwert der Beschriftung neuer Bauteile
    #[serde(default)]
    pub default_value: String,
    /// Pins in fester Reihenfolge
    #[serde(default)]
    pub pins: Vec<PinTemplate>,
}

impl ComponentType {
    /// Sucht ein Pin-Template per ID.
    pub fn pin(&self, pin_id: &str) -> Option<&PinTemplate> {
        self.pins.iter().find(|p| p.id == pin_id)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct LibraryFile {
    types: Vec<ComponentType>,
}

/// Registry aller verfügbaren Bauteil-Typen (Reihenfolge = Palettenreihenfolge)
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentLibrary {
    types: IndexMap<String, ComponentType>,
}

impl ComponentLibrary {
    /// Erstellt eine Bibliothek aus einer Typ-Liste; spätere Duplikate überschreiben frühere.
    pub fn from_types(types: impl IntoIterator<Item = ComponentType>) -> Self {
        let types = types
            .into_iter()
            .map(|t| (t.name.clone(), t))
            .collect::<IndexMap<_, _>>();
        Self { types }
    }

    /// Eingebaute Bibliothek (Logik- und Platinen-Bauteile).
    pub fn builtin() -> Self {
        let two_input = |name: &str, label: &str, symbol: &str| ComponentType {
            name: name.to_string(),
            label: label.to_string(),
            symbol: symbol.to_string(),
            width: LOGIC_SIZE.x,
            height: LOGIC_SIZE.y,
            default_value: name.to_string(),
            pins: vec![
                PinTemplate::new("A", Vec2::new(0.0, 15.0), PinRole::Input),
                PinTemplate::new("B", Vec2::new(0.0, 35.0), PinRole::Input),
                PinTemplate::new("Y", Vec2::new(60.0, 25.0), PinRole::Output),
            ],
        };

        let board = |name: &str, label: &str, symbol: &str, value: &str| ComponentType {
            name: name.to_string(),
            label: label.to_string(),
            symbol: symbol.to_string(),
            width: BOARD_SIZE.x,
            height: BOARD_SIZE.y,
            default_value: value.to_string(),
            pins: vec![
                PinTemplate::new("1", Vec2::new(0.0, 30.0), PinRole::Input),
                PinTemplate::new("2", Vec2::new(60.0, 30.0), PinRole::Output),
            ],
        };

        Self::from_types([
            two_input("AND", "AND Gate", "&"),
            two_input("OR", "OR Gate", "≥1"),
            two_input("XOR", "XOR Gate", "=1"),
            two_input("NAND", "NAND Gate", "&"),
            ComponentType {
                name: "NOT".into(),
                label: "NOT Gate".into(),
                symbol: "1".into(),
                width: LOGIC_SIZE.x,
                height: LOGIC_SIZE.y,
                default_value: "NOT".into(),
                pins: vec![
                    PinTemplate::new("A", Vec2::new(0.0, 25.0), PinRole::Input),
                    PinTemplate::new("Y", Vec2::new(60.0, 25.0), PinRole::Output),
                ],
            },
            ComponentType {
                name: "FLIPFLOP".into(),
                label: "D Flip-Flop".into(),
                symbol: "DFF".into(),
                width: LOGIC_SIZE.x,
                height: LOGIC_SIZE.y,
                default_value: "DFF".into(),
                pins: vec![
                    PinTemplate::new("D", Vec2::new(0.0, 10.0), PinRole::Input),
                    PinTemplate::new("CLK", Vec2::new(0.0, 25.0), PinRole::Input),
                    PinTemplate::new("RST", Vec2::new(0.0, 40.0), PinRole::Input),
                    PinTemplate::new("Q", Vec2::new(60.0, 15.0), PinRole::Output),
                    PinTemplate::new("QN", Vec2::new(60.0, 35.0), PinRole::Output)
                        .with_label("Q̅"),
                ],
            },
            ComponentType {
                name: "ALU".into(),
                label: "ALU".into(),
                symbol: "ALU".into(),
                width: BLOCK_SIZE.x,
                height: BLOCK_SIZE.y,
                default_value: "ALU".into(),
                pins: vec![
                    PinTemplate::new("A", Vec2::new(0.0, 10.0), PinRole::Input),
                    PinTemplate::new("B", Vec2::new(0.0, 25.0), PinRole::Input),
                    PinTemplate::new("OP", Vec2::new(0.0, 40.0), PinRole::Input),
                    PinTemplate::new("CI", Vec2::new(0.0, 55.0), PinRole::Input),
                    PinTemplate::new("R", Vec2::new(60.0, 15.0), PinRole::Output),
                    PinTemplate::new("CO", Vec2::new(60.0, 35.0), PinRole::Output),
                    PinTemplate::new("Z", Vec2::new(60.0, 50.0), PinRole::Output),
                ],
            },
            ComponentType {
                name: "MEMORY".into(),
                label: "Memory Block".into(),
                symbol: "RAM".into(),
                width: BLOCK_SIZE.x,
                height: BLOCK_SIZE.y,
                default_value: "RAM".into(),
                pins: vec![
                    PinTemplate::new("ADDR", Vec2::new(0.0, 10.0), PinRole::Input),
                    PinTemplate::new("DATA_IN", Vec2::new(0.0, 25.0), PinRole::Input),
                    PinTemplate::new("WE", Vec2::new(0.0, 40.0), PinRole::Input),
                    PinTemplate::new("CS", Vec2::new(0.0, 55.0), PinRole::Input),
                    PinTemplate::new("DATA_OUT", Vec2::new(60.0, 15.0), PinRole::Output),
                    PinTemplate::new("READY", Vec2::new(60.0, 35.0), PinRole::Output),
                ],
            },
            board("RESISTOR", "Resistor", "R", "1k"),
            board("CAPACITOR", "Capacitor", "C", "100nF"),
            board("IC", "Integrated Circuit", "IC", "IC"),
        ])
    }

    /// Sucht einen Typ per Name.
    pub fn get(&self, name: &str) -> Option<&ComponentType> {
        self.types.get(name)
    }

    /// Prüft, ob ein Typ existiert.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Alle Typen in Palettenreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentType> {
        self.types.values()
    }

    /// Anzahl der Typen.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Gibt `true` zurück, wenn keine Typen registriert sind.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Parst eine Bibliothek aus TOML (`[[types]]`-Tabellen).
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let file: LibraryFile =
            toml::from_str(content).context("Bauteil-Bibliothek konnte nicht geparst werden")?;
        if file.types.is_empty() {
            anyhow::bail!("Bauteil-Bibliothek enthält keine Typen");
        }
        for component_type in &file.types {
            let mut seen = std::collections::HashSet::new();
            for pin in &component_type.pins {
                if !seen.insert(pin.id.as_str()) {
                    anyhow::bail!(
                        "Typ '{}' enthält Pin-ID '{}' mehrfach",
                        component_type.name,
                        pin.id
                    );
                }
            }
        }
        Ok(Self::from_types(file.types))
    }

    /// Serialisiert die Bibliothek als TOML.
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        let file = LibraryFile {
            types: self.types.values().cloned().collect(),
        };
        toml::to_string_pretty(&file).context("Bauteil-Bibliothek konnte nicht serialisiert werden")
    }

    /// Lädt die Bibliothek aus einer TOML-Datei; fällt bei Fehler auf die eingebaute zurück.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(library) => {
                    log::info!(
                        "Bauteil-Bibliothek geladen: {} Typen aus {}",
                        library.len(),
                        path.display()
                    );
                    library
                }
                Err(e) => {
                    log::warn!(
                        "Bauteil-Bibliothek {} ungültig, nutze eingebaute: {:#}",
                        path.display(),
                        e
                    );
                    Self::builtin()
                }
            },
            Err(_) => {
                log::debug!(
                    "Keine Bauteil-Bibliothek unter {}, nutze eingebaute",
                    path.display()
                );
                Self::builtin()
            }
        }
    }

    /// Pfad der Bibliotheks-Datei neben der Binary.
    pub fn library_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("component_library.toml")
    }
}

impl Default for ComponentLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
