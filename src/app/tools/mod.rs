//! Werkzeuge für mehrstufige Canvas-Eingaben.
//!
//! Werkzeuge erzeugen reine Daten (Punktlisten, Vorschau); die Mutation des
//! Modells erfolgt zentral im zugehörigen Use-Case.

/// Zustandsmaschine für das Zeichnen von Leitungen.
mod wire_tool;

pub use wire_tool::{WireAction, WireTool};

use crate::core::{ComponentLibrary, PinRef, Schematic};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Versucht, auf einen Pin innerhalb des Fangradius zu snappen.
///
/// Gibt `WireAnchor::Pin` mit der exakten Pin-Position zurück wenn ein Pin in
/// Reichweite ist, sonst `WireAnchor::Free` mit der Grid-gerasteten Position.
pub fn snap_to_pin(
    pos: Vec2,
    schematic: &Schematic,
    library: &ComponentLibrary,
    options: &EditorOptions,
) -> WireAnchor {
    match schematic.pin_at(pos, options.pin_snap_radius, library) {
        Some((pin, position)) => WireAnchor::Pin(pin, position),
        None => WireAnchor::Free(options.snap(pos)),
    }
}

/// Anker-Punkt: entweder ein existierender Pin oder eine freie Position.
#[derive(Debug, Clone, PartialEq)]
pub enum WireAnchor {
    /// Snap auf einen Pin
    Pin(PinRef, Vec2),
    /// Freie (gerasterte) Position
    Free(Vec2),
}

impl WireAnchor {
    /// Gibt die Welt-Position des Ankers zurück.
    pub fn position(&self) -> Vec2 {
        match self {
            WireAnchor::Pin(_, pos) => *pos,
            WireAnchor::Free(pos) => *pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_prefers_pin_over_grid() {
        let library = ComponentLibrary::builtin();
        let options = EditorOptions::default();
        let mut schematic = Schematic::new();
        let and = schematic
            .place_component(library.get("AND").expect("AND vorhanden"), Vec2::ZERO)
            .expect("ID frei");

        // A liegt bei (0,15) und damit nicht auf dem Grid
        let anchor = snap_to_pin(Vec2::new(3.0, 17.0), &schematic, &library, &options);
        assert_eq!(anchor, WireAnchor::Pin(PinRef::new(and, "A"), Vec2::new(0.0, 15.0)));

        let anchor = snap_to_pin(Vec2::new(203.0, 17.0), &schematic, &library, &options);
        assert_eq!(anchor, WireAnchor::Free(Vec2::new(200.0, 20.0)));
    }
}
