//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drawing;
pub mod editing;
pub mod file_io;
pub mod selection;
pub mod viewport;
