//! Draw-Commands und gemeinsame Render-Typen.

use crate::core::Viewport;
use crate::shared::RenderScene;
use glam::Vec2;

/// RGBA-Farbe mit 8 Bit pro Kanal.
pub type Rgba = [u8; 4];

/// Textausrichtung relativ zur Ankerposition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Mittig
    Center,
    /// Linksbündig, vertikal mittig
    Left,
}

/// Ein einzelner Zeichenbefehl in logischen Pixeln der Zeichenfläche.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Gesamte Fläche füllen
    Clear { color: Rgba },
    /// Einzelne Linie
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    /// Offener Linienzug
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: Rgba,
        dashed: bool,
    },
    /// Achsenparalleles Rechteck
    Rect {
        min: Vec2,
        max: Vec2,
        fill: Option<Rgba>,
        stroke: Option<(f32, Rgba)>,
    },
    /// Gefüllter Kreis
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    /// Text
    Text {
        position: Vec2,
        text: String,
        size: f32,
        color: Rgba,
        anchor: TextAnchor,
    },
}

/// Gemeinsamer Kontext der Sub-Renderer für einen Frame.
pub(crate) struct RenderContext<'a> {
    pub scene: &'a RenderScene,
    pub viewport: &'a Viewport,
}

impl<'a> RenderContext<'a> {
    pub fn new(scene: &'a RenderScene) -> Self {
        Self {
            scene,
            viewport: &scene.viewport,
        }
    }

    /// Welt → logische Pixel.
    #[inline]
    pub fn project(&self, world: Vec2) -> Vec2 {
        self.viewport.to_logical(world)
    }

    /// Welt-Länge → Pixel-Länge.
    #[inline]
    pub fn scale_len(&self, world_len: f32) -> f32 {
        world_len * self.viewport.scale()
    }

    /// Sichtbarer Weltbereich (min, max).
    pub fn visible_world(&self) -> (Vec2, Vec2) {
        let [w, h] = self.scene.surface_size;
        let min = self.viewport.logical_to_world(Vec2::ZERO);
        let max = self.viewport.logical_to_world(Vec2::new(w, h));
        (min, max)
    }
}
