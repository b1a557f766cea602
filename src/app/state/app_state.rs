use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{diagnose, ComponentLibrary, Diagnostic, Schematic, Severity};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorState, SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Schaltplan-Modell (Copy-on-Write via `Arc::make_mut`)
    pub schematic: Arc<Schematic>,
    /// Bauteil-Registry (unveränderlich zur Laufzeit)
    pub library: Arc<ComponentLibrary>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Modus und Werkzeuge
    pub editor: EditorState,
    /// Diagnosen des aktuellen Modells
    pub diagnostics: Vec<Diagnostic>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Grid, Zoom, Farben)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit der eingebauten Registry.
    pub fn new() -> Self {
        Self::with_library(ComponentLibrary::builtin(), EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebener Registry und Optionen.
    pub fn with_library(library: ComponentLibrary, options: EditorOptions) -> Self {
        let schematic = Arc::new(Schematic::new());
        let history = EditHistory::new_with_capacity(
            Snapshot {
                schematic: schematic.clone(),
            },
            options.history_depth,
        );
        let mut view = ViewState::new();
        view.viewport
            .set_zoom_bounds(options.zoom_min_percent, options.zoom_max_percent);

        Self {
            schematic,
            library: Arc::new(library),
            view,
            ui: UiState::new(),
            selection: SelectionState::new(),
            editor: EditorState::new(),
            diagnostics: Vec::new(),
            command_log: CommandLog::new(),
            history,
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Anzahl Bauteile (für UI-Anzeige)
    pub fn component_count(&self) -> usize {
        self.schematic.component_count()
    }

    /// Anzahl Leitungen (für UI-Anzeige)
    pub fn wire_count(&self) -> usize {
        self.schematic.wire_count()
    }

    /// Anzahl Diagnosen mit Schweregrad Error
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Abschluss jeder Modell-Mutation: Snapshot, Diagnosen, Redraw.
    pub fn commit_mutation(&mut self, label: &str) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
        self.refresh_diagnostics();
        self.view.request_redraw();
        log::debug!("Mutation übernommen: {}", label);
    }

    /// Berechnet die Diagnosen für das aktuelle Modell neu.
    pub fn refresh_diagnostics(&mut self) {
        self.diagnostics = diagnose(&self.schematic, &self.library);
    }

    /// Ersetzt das Modell vollständig (Neu/Laden). Die History beginnt neu.
    pub fn replace_schematic(&mut self, schematic: Schematic, diagnostics: Vec<Diagnostic>) {
        self.schematic = Arc::new(schematic);
        self.diagnostics = diagnostics;
        self.history.reset(Snapshot::from_state(self));
        self.selection.clear();
        self.editor.drag = None;
        self.editor.wire_tool.cancel();
        self.view.request_redraw();
    }

    /// Nach Undo/Redo: Zustand übernehmen und Selektion bereinigen.
    pub fn restore_snapshot(&mut self, snapshot: Snapshot) {
        snapshot.apply_to(self);
        self.editor.drag = None;
        if self.selection.retain_existing(&self.schematic) {
            log::debug!("Selektion nach History-Schritt verworfen");
        }
        self.refresh_diagnostics();
        self.view.request_redraw();
    }

    /// Übernimmt neue Laufzeit-Optionen in Viewport und History.
    pub fn apply_options(&mut self, options: EditorOptions) {
        let options = options.sanitized();
        self.view
            .viewport
            .set_zoom_bounds(options.zoom_min_percent, options.zoom_max_percent);
        self.history.set_max_depth(options.history_depth);
        self.options = options;
        self.view.request_redraw();
    }

    /// Hit-Test-Toleranz in Welteinheiten beim aktuellen Zoom.
    pub fn hit_tolerance_world(&self) -> f32 {
        self.view.viewport.px_to_world(self.options.hit_tolerance_px)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
