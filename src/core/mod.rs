//! Core-Domänentypen: Bauteile, Pins, Leitungen, Schaltplan, Viewport, Diagnosen.

pub mod component;
pub mod diagnostics;
pub mod geometry;
pub mod library;
pub mod pin;
pub mod project;
/// Schaltplan-Modell
///
/// Dieses Modul definiert den Container des Projekts:
/// - Schematic: Besitzer aller Bauteile und Leitungen
/// - EntityRef: Verweis auf ein Bauteil oder eine Leitung
pub mod schematic;
pub mod viewport;
pub mod wire;

pub use component::{Component, Rotation};
pub use diagnostics::{
    diagnose, Diagnostic, DiagnosticKind, DiagnosticRefs, DiagnosticRule, DiagnosticsEngine,
    Severity,
};
pub use geometry::snap;
pub use hit_test::hit_test;
pub use library::{ComponentLibrary, ComponentType};
pub use pin::{Pin, PinRef, PinRole, PinTemplate};
pub use project::{
    deserialize, serialize, LoadedProject, MalformedProjectError, ProjectBlob,
    PROJECT_FORMAT_VERSION,
};
pub use schematic::{EntityRef, Schematic};
pub use viewport::Viewport;
pub use wire::Wire;
