//! Use-Case-Funktionen für Bauteil- und Leitungs-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `place_component`: Bauteil platzieren
//! - `delete`: Selektierte Entität löschen (inkl. Kaskade)
//! - `properties`: Beschriftung und Rotation ändern

mod delete;
mod place_component;
mod properties;

pub use delete::delete_selected;
pub use place_component::place_component;
pub use properties::{rotate_selected, set_component_rotation, set_component_value};
