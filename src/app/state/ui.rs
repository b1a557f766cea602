/// Standardname eines neuen Projekts.
pub const UNTITLED_PROJECT: &str = "Untitled Schematic";

/// UI-bezogener Anwendungszustand (Dialoge, Statuszeile, Dateipfad)
#[derive(Debug, Clone)]
pub struct UiState {
    /// Name des Projekts
    pub project_name: String,
    /// Pfad der zuletzt geladenen/gespeicherten Datei
    pub current_file_path: Option<String>,
    /// Open-Datei-Dialog anzeigen
    pub show_file_dialog: bool,
    /// Save-Datei-Dialog anzeigen
    pub show_save_file_dialog: bool,
    /// Letzte Statusmeldung
    pub status_message: Option<String>,
    /// Bearbeitungspuffer für die Beschriftung im Properties-Panel (Bauteil-ID, Text)
    pub value_draft: Option<(u64, String)>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    /// Erstellt den UI-Zustand eines neuen Projekts.
    pub fn new() -> Self {
        Self {
            project_name: UNTITLED_PROJECT.to_string(),
            current_file_path: None,
            show_file_dialog: false,
            show_save_file_dialog: false,
            status_message: None,
            value_draft: None,
        }
    }

    /// Setzt die Statusmeldung.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
