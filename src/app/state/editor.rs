use crate::app::tools::WireTool;
use glam::Vec2;

/// Interaktionsmodus des Editors (genau einer aktiv)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DrawingMode {
    /// Entitäten selektieren und Bauteile verschieben
    #[default]
    Select,
    /// Bauteil des genannten Typs per Klick platzieren
    PlaceComponent(String),
    /// Leitungen zeichnen
    DrawWire,
}

impl DrawingMode {
    /// Anzeigename für Toolbar und Statusleiste.
    pub fn label(&self) -> String {
        match self {
            DrawingMode::Select => "Select".to_string(),
            DrawingMode::PlaceComponent(type_name) => format!("Place {type_name}"),
            DrawingMode::DrawWire => "Wire".to_string(),
        }
    }
}

/// Laufender Drag eines Bauteils
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Gezogenes Bauteil
    pub component_id: u64,
    /// Abstand Greifpunkt → Bauteil-Ursprung
    pub grab_offset: Vec2,
    /// Position zu Drag-Beginn
    pub start_position: Vec2,
}

/// Zustand des Editor-Modus und der Werkzeuge
#[derive(Debug, Default)]
pub struct EditorState {
    /// Aktiver Modus
    pub mode: DrawingMode,
    /// Zustandsmaschine für Leitungen
    pub wire_tool: WireTool,
    /// Aktiver Drag (nur im Select-Modus)
    pub drag: Option<DragState>,
}

impl EditorState {
    /// Erstellt den Standard-Zustand (Select-Modus, kein Drag).
    pub fn new() -> Self {
        Self::default()
    }
}
