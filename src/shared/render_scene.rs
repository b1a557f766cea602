//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{ComponentLibrary, EntityRef, PinRef, Schematic, Viewport};
use glam::Vec2;
use std::collections::HashSet;
use std::sync::Arc;

/// Vorschau einer Leitung im Zeichenmodus.
#[derive(Debug, Clone, PartialEq)]
pub struct WirePreview {
    /// Bereits gesetzte Punkte
    pub points: Vec<Vec2>,
    /// Vorläufiger Endpunkt unter dem Cursor (nicht committet)
    pub cursor: Option<Vec2>,
}

impl WirePreview {
    /// Alle Punkte inklusive Cursor-Punkt.
    pub fn polyline(&self) -> Vec<Vec2> {
        let mut points = self.points.clone();
        if let Some(cursor) = self.cursor {
            points.push(cursor);
        }
        points
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Das aktuelle Modell (Arc für O(1)-Clone pro Frame)
    pub schematic: Arc<Schematic>,
    /// Bauteil-Bibliothek für Pins und Symbole
    pub library: Arc<ComponentLibrary>,
    /// Viewport-Zustand für diesen Frame
    pub viewport: Viewport,
    /// Größe der Zeichenfläche in logischen Pixeln [Breite, Höhe]
    pub surface_size: [f32; 2],
    /// Aktuelle Selektion
    pub selection: Option<EntityRef>,
    /// Leitung im Aufbau
    pub wire_preview: Option<WirePreview>,
    /// Bauteile mit Fehler-Diagnose
    pub flagged_components: Arc<HashSet<u64>>,
    /// Pins mit Fehler-Diagnose
    pub flagged_pins: Arc<HashSet<PinRef>>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten und Grid-Sichtbarkeit
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob die Zeichenfläche eine nutzbare Größe hat.
    pub fn has_surface(&self) -> bool {
        self.surface_size[0] > 0.0 && self.surface_size[1] > 0.0
    }
}
