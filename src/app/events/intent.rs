use super::super::state::DrawingMode;
use crate::core::{EntityRef, Rotation};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neues, leeres Projekt anlegen
    NewProjectRequested,
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Pfad im Open-Dialog gewählt
    FileSelected { path: String },
    /// Pfad im Save-Dialog gewählt
    SaveFilePathSelected { path: String },

    /// Letzte Mutation rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Mutation wiederholen
    RedoRequested,

    /// Interaktionsmodus wechseln
    DrawingModeRequested { mode: DrawingMode },
    /// Primärklick auf die Zeichenfläche.
    ///
    /// Alle Pointer-Positionen sind Screen-Koordinaten: physische Pixel
    /// relativ zur linken oberen Ecke der Zeichenfläche. Die Umrechnung in
    /// Weltkoordinaten übernimmt das Intent-Mapping über den Viewport.
    CanvasClicked { screen_pos: glam::Vec2 },
    /// Sekundärklick auf die Zeichenfläche
    CanvasSecondaryClicked { screen_pos: glam::Vec2 },
    /// Mausbewegung über der Zeichenfläche
    PointerMoved { screen_pos: glam::Vec2 },
    /// Primär-Drag beginnt
    DragStarted { screen_pos: glam::Vec2 },
    /// Primär-Drag läuft
    DragUpdated { screen_pos: glam::Vec2 },
    /// Primär-Drag endet
    DragEnded,

    /// Leitung abschließen (Enter / Toolbar)
    FinishWireRequested,
    /// Escape: Leitung verwerfen, Modus verlassen oder Selektion aufheben
    CancelRequested,
    /// Selektierte Entität löschen
    DeleteSelectedRequested,
    /// Selektiertes Bauteil um 90° drehen
    RotateSelectedRequested,
    /// Beschriftung eines Bauteils setzen
    SetComponentValueRequested { component_id: u64, value: String },
    /// Rotation eines Bauteils setzen
    SetComponentRotationRequested {
        component_id: u64,
        rotation: Rotation,
    },
    /// Entität direkt selektieren (z.B. aus dem Diagnose-Panel)
    SelectEntityRequested { entity: EntityRef },

    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Zoom auf 100 % zurücksetzen
    ZoomResetRequested,
    /// Mausrad-Zoom um `steps` Rasten zum Fokuspunkt (physische Pixel)
    ScrollZoom {
        steps: f32,
        focus_screen: Option<glam::Vec2>,
    },
    /// Ansicht um Delta verschieben (logische Pixel)
    PanRequested { delta_logical: glam::Vec2 },
    /// Grid ein-/ausblenden
    ToggleGridRequested,
    /// Grid-Snapping ein-/ausschalten
    ToggleSnapRequested,
    /// Zeichenfläche hat Größe oder Pixeldichte geändert
    SurfaceResized {
        size: [f32; 2],
        pixels_per_point: f32,
    },

    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen geändert (sofort anwenden)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
