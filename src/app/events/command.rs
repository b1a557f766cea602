use super::super::state::DrawingMode;
use crate::core::{EntityRef, Rotation};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Datei & Anwendung ===
    /// Leeres Projekt anlegen
    NewProject,
    /// Open-Datei-Dialog anzeigen
    RequestOpenFileDialog,
    /// Save-Datei-Dialog anzeigen
    RequestSaveFileDialog,
    /// Projekt aus Datei laden
    LoadFile { path: String },
    /// Projekt speichern (`None` = aktueller Pfad oder Dialog)
    SaveFile { path: Option<String> },
    /// Anwendung beenden
    RequestExit,

    // === History ===
    /// Undo
    Undo,
    /// Redo
    Redo,

    // === Modus & Selektion ===
    /// Modus wechseln (bricht laufende Leitung ab)
    SetDrawingMode { mode: DrawingMode },
    /// Oberste Entität am Punkt selektieren
    SelectAt { world_pos: glam::Vec2, tolerance: f32 },
    /// Entität direkt selektieren
    SelectEntity { entity: EntityRef },
    /// Selektion aufheben
    ClearSelection,
    /// Drag am Punkt beginnen
    BeginDrag { world_pos: glam::Vec2, tolerance: f32 },
    /// Gezogenes Bauteil nachführen
    UpdateDrag { world_pos: glam::Vec2 },
    /// Drag beenden (ein History-Eintrag pro Geste)
    EndDrag,

    // === Editing ===
    /// Bauteil des Typs an gerasteter Position platzieren
    PlaceComponent {
        type_name: String,
        world_pos: glam::Vec2,
    },
    /// Punkt zur Leitung in Arbeit hinzufügen
    WireClick { world_pos: glam::Vec2 },
    /// Vorschau-Endpunkt der Leitung aktualisieren
    UpdateWirePreview { world_pos: glam::Vec2 },
    /// Leitung abschließen
    FinishWire,
    /// Leitung verwerfen
    CancelWire,
    /// Selektierte Entität löschen
    DeleteSelected,
    /// Selektiertes Bauteil im Uhrzeigersinn drehen
    RotateSelected,
    /// Beschriftung setzen
    SetComponentValue { component_id: u64, value: String },
    /// Rotation setzen
    SetComponentRotation {
        component_id: u64,
        rotation: Rotation,
    },

    // === Viewport ===
    /// Zoom-Schritt hinein
    ZoomIn,
    /// Zoom-Schritt hinaus
    ZoomOut,
    /// Zoom 100 %, Scroll-Offset 0
    ResetZoom,
    /// Zoom um Prozentpunkte, optional zum Fokuspunkt
    ZoomBy {
        delta_percent: f32,
        focus_screen: Option<glam::Vec2>,
    },
    /// Ansicht verschieben
    Pan { delta_logical: glam::Vec2 },
    /// Grid-Sichtbarkeit umschalten
    ToggleGrid,
    /// Grid-Snapping umschalten
    ToggleSnap,
    /// Größe und Pixeldichte der Zeichenfläche setzen
    SetSurfaceSize {
        size: [f32; 2],
        pixels_per_point: f32,
    },

    // === Optionen ===
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
}
