//! Mehrklick-Konstruktion einer Leitung: Idle → Drawing → Idle.

use crate::shared::WirePreview;
use glam::Vec2;

/// Rückgabe von `on_click`, steuert den Tool-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireAction {
    /// Erster Punkt gesetzt, Zeichnen gestartet
    Started,
    /// Knickpunkt hinzugefügt
    BendAdded,
    /// Klick auf den letzten Punkt, ignoriert
    Ignored,
}

/// Zustand des Leitungswerkzeugs
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WireTool {
    /// Keine Leitung in Arbeit
    #[default]
    Idle,
    /// Leitung in Arbeit
    Drawing {
        /// Bestätigte Punkte (mindestens einer)
        points: Vec<Vec2>,
        /// Vorschau-Endpunkt an der Mausposition (nicht bestätigt)
        cursor: Option<Vec2>,
    },
}

impl WireTool {
    /// Erstellt ein Werkzeug im Idle-Zustand.
    pub fn new() -> Self {
        Self::Idle
    }

    /// Ist eine Leitung in Arbeit?
    pub fn is_drawing(&self) -> bool {
        matches!(self, WireTool::Drawing { .. })
    }

    /// Bestätigte Punkte der Leitung in Arbeit.
    pub fn points(&self) -> &[Vec2] {
        match self {
            WireTool::Idle => &[],
            WireTool::Drawing { points, .. } => points,
        }
    }

    /// Registriert einen (bereits gesnappten) Klickpunkt.
    pub fn on_click(&mut self, point: Vec2) -> WireAction {
        match self {
            WireTool::Idle => {
                *self = WireTool::Drawing {
                    points: vec![point],
                    cursor: None,
                };
                WireAction::Started
            }
            WireTool::Drawing { points, .. } => {
                // Doppelklick auf denselben Punkt erzeugt kein Nullsegment
                if points.last() == Some(&point) {
                    return WireAction::Ignored;
                }
                points.push(point);
                WireAction::BendAdded
            }
        }
    }

    /// Aktualisiert den Vorschau-Endpunkt. Gibt `true` zurück, wenn sich etwas geändert hat.
    pub fn on_pointer_moved(&mut self, point: Vec2) -> bool {
        match self {
            WireTool::Idle => false,
            WireTool::Drawing { cursor, .. } => {
                if *cursor == Some(point) {
                    return false;
                }
                *cursor = Some(point);
                true
            }
        }
    }

    /// Schließt die Leitung ab und kehrt nach Idle zurück.
    ///
    /// Liefert die Punkte nur bei mindestens 2 Punkten, sonst wird still verworfen.
    pub fn finish(&mut self) -> Option<Vec<Vec2>> {
        match std::mem::take(self) {
            WireTool::Drawing { points, .. } if points.len() >= 2 => Some(points),
            _ => None,
        }
    }

    /// Verwirft die Leitung in Arbeit. Gibt `true` zurück, wenn etwas verworfen wurde.
    pub fn cancel(&mut self) -> bool {
        let was_drawing = self.is_drawing();
        *self = WireTool::Idle;
        was_drawing
    }

    /// Vorschau-Geometrie für das Rendering.
    pub fn preview(&self) -> Option<WirePreview> {
        match self {
            WireTool::Idle => None,
            WireTool::Drawing { points, cursor } => Some(WirePreview {
                points: points.clone(),
                cursor: *cursor,
            }),
        }
    }
}
