//! Schematic Capture Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DrawingMode, EditHistory, UiState, ViewState,
};
pub use core::{
    diagnose, ComponentLibrary, ComponentType, Diagnostic, EntityRef, PinRef, Rotation,
    Schematic, Severity, Viewport, Wire,
};
pub use core::{deserialize, serialize, LoadedProject, MalformedProjectError};
pub use shared::{EditorOptions, RenderScene};
