//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::state::{DrawingMode, UNTITLED_PROJECT};
use crate::app::AppState;
use crate::core::project::{from_json_str, to_json_string};
use crate::core::{ComponentLibrary, LoadedProject, Schematic};
use anyhow::Context;
use std::path::Path;

/// Legt ein neues, leeres Projekt an. Die History beginnt neu.
pub fn new_project(state: &mut AppState) {
    state.replace_schematic(Schematic::new(), Vec::new());
    state.editor.mode = DrawingMode::Select;
    state.ui.project_name = UNTITLED_PROJECT.to_string();
    state.ui.current_file_path = None;
    state.ui.set_status("New project");
    log::info!("Neues Projekt angelegt");
}

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Liest und validiert eine Projektdatei, ohne den AppState anzufassen.
pub fn read_project(path: &str, library: &ComponentLibrary) -> anyhow::Result<LoadedProject> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Projektdatei konnte nicht gelesen werden: {}", path))?;
    from_json_str(&content, library)
        .with_context(|| format!("Projektdatei ist ungültig: {}", path))
}

/// Lädt die ausgewählte Datei in den AppState.
///
/// Schlägt das Laden fehl, bleibt das offene Modell unverändert; der Fehler
/// landet in der Statuszeile und wird an den Aufrufer weitergereicht.
pub fn load_selected_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let loaded = match read_project(&path, &state.library) {
        Ok(loaded) => loaded,
        Err(e) => {
            state.ui.set_status(format!("Load failed: {:#}", e));
            return Err(e);
        }
    };

    log::info!(
        "Projekt geladen: {} Bauteile, {} Leitungen, {} Diagnosen",
        loaded.schematic.component_count(),
        loaded.schematic.wire_count(),
        loaded.diagnostics.len()
    );

    state.replace_schematic(loaded.schematic, loaded.diagnostics);
    state.editor.mode = DrawingMode::Select;
    state.ui.project_name = project_name_from_path(&path);
    state.ui.set_status(format!("Loaded {}", state.ui.project_name));
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Speichert unter `path` oder unter dem aktuellen Pfad (`None`).
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    match path {
        Some(path) => save_file_as(state, path),
        None => save_current_file(state),
    }
}

/// Speichert die aktuelle Datei (wenn Pfad bekannt) oder öffnet Dialog.
pub fn save_current_file(state: &mut AppState) -> anyhow::Result<()> {
    if let Some(path) = state.ui.current_file_path.clone() {
        write_project_to_file(state, &path)?;
        state.ui.set_status(format!("Saved {}", state.ui.project_name));
        log::info!("File saved successfully");
    } else {
        // Kein Pfad bekannt → Save As Dialog öffnen
        request_save_file(state);
    }
    Ok(())
}

/// Speichert die Datei unter dem angegebenen Pfad.
pub fn save_file_as(state: &mut AppState, path: String) -> anyhow::Result<()> {
    write_project_to_file(state, &path)?;
    state.ui.project_name = project_name_from_path(&path);
    state.ui.set_status(format!("Saved {}", state.ui.project_name));
    log::info!("File saved as: {}", path);
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Schreibt das Modell als formatiertes JSON in eine Datei.
fn write_project_to_file(state: &AppState, path: &str) -> anyhow::Result<()> {
    let content =
        to_json_string(&state.schematic).context("Projekt konnte nicht serialisiert werden")?;
    std::fs::write(path, content)
        .with_context(|| format!("Projektdatei konnte nicht geschrieben werden: {}", path))
}

fn project_name_from_path(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| UNTITLED_PROJECT.to_string())
}
