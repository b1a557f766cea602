//! Viewport-Transformation zwischen Pointer-Koordinaten und Schaltplan-Koordinaten.
//!
//! Screen-Koordinaten sind physische Pixel der Zeichenfläche, logische
//! Koordinaten sind Screen-Koordinaten geteilt durch die Device-Pixel-Ratio.
//! Der Zoom ändert nur die Transformation, nie die gespeicherte Geometrie.

use glam::Vec2;

/// Konvertiert einen Screen-Punkt in Welt-Koordinaten.
///
/// `zoom_percent` = 100 bedeutet 1 Welteinheit pro logischem Pixel.
pub fn to_world(
    screen: Vec2,
    zoom_percent: f32,
    device_pixel_ratio: f32,
    scroll_offset: Vec2,
) -> Vec2 {
    let scale = zoom_percent.max(f32::EPSILON) / 100.0;
    let dpr = device_pixel_ratio.max(f32::EPSILON);
    (screen / dpr + scroll_offset) / scale
}

/// Inverse von [`to_world`]: Welt-Koordinaten in Screen-Pixel.
pub fn to_screen(
    world: Vec2,
    zoom_percent: f32,
    device_pixel_ratio: f32,
    scroll_offset: Vec2,
) -> Vec2 {
    let scale = zoom_percent / 100.0;
    (world * scale - scroll_offset) * device_pixel_ratio
}

/// Zoom-, Scroll- und DPR-Zustand der Zeichenfläche
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Zoom in Prozent, geklemmt auf `[zoom_min, zoom_max]`
    pub zoom_percent: f32,
    /// Scroll-Offset in logischen Pixeln
    pub scroll_offset: Vec2,
    /// Verhältnis physischer zu logischen Pixeln
    pub device_pixel_ratio: f32,
    /// Untere Zoom-Grenze in Prozent
    pub zoom_min: f32,
    /// Obere Zoom-Grenze in Prozent
    pub zoom_max: f32,
}

impl Viewport {
    /// Standard-Zoom in Prozent.
    pub const DEFAULT_ZOOM: f32 = 100.0;
    /// Standard-Untergrenze des Zooms.
    pub const ZOOM_MIN: f32 = 50.0;
    /// Standard-Obergrenze des Zooms.
    pub const ZOOM_MAX: f32 = 200.0;

    /// Erstellt einen Viewport mit Zoom 100 % ohne Scroll-Offset.
    pub fn new() -> Self {
        Self {
            zoom_percent: Self::DEFAULT_ZOOM,
            scroll_offset: Vec2::ZERO,
            device_pixel_ratio: 1.0,
            zoom_min: Self::ZOOM_MIN,
            zoom_max: Self::ZOOM_MAX,
        }
    }

    /// Setzt die Zoom-Grenzen und klemmt den aktuellen Zoom nach.
    pub fn set_zoom_bounds(&mut self, min: f32, max: f32) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.zoom_min = min.max(1.0);
        self.zoom_max = max.max(self.zoom_min);
        self.zoom_percent = self.zoom_percent.clamp(self.zoom_min, self.zoom_max);
    }

    /// Welteinheiten pro logischem Pixel.
    pub fn scale(&self) -> f32 {
        self.zoom_percent / 100.0
    }

    /// Screen-Pixel → Welt.
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        to_world(
            screen,
            self.zoom_percent,
            self.device_pixel_ratio,
            self.scroll_offset,
        )
    }

    /// Welt → Screen-Pixel.
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        to_screen(
            world,
            self.zoom_percent,
            self.device_pixel_ratio,
            self.scroll_offset,
        )
    }

    /// Welt → logische Pixel (Koordinatensystem der Draw-Commands).
    pub fn to_logical(&self, world: Vec2) -> Vec2 {
        world * self.scale() - self.scroll_offset
    }

    /// Logische Pixel → Welt.
    pub fn logical_to_world(&self, logical: Vec2) -> Vec2 {
        (logical + self.scroll_offset) / self.scale()
    }

    /// Rechnet eine Toleranz in logischen Pixeln in Welteinheiten um.
    pub fn px_to_world(&self, px: f32) -> f32 {
        px / self.scale()
    }

    /// Setzt den Zoom (geklemmt) ohne Fokuspunkt.
    pub fn set_zoom(&mut self, zoom_percent: f32) {
        self.zoom_percent = zoom_percent.clamp(self.zoom_min, self.zoom_max);
    }

    /// Ändert den Zoom um `delta_percent` und hält den Weltpunkt unter
    /// `focus_screen` (physische Pixel) fest.
    pub fn zoom_towards(&mut self, delta_percent: f32, focus_screen: Option<Vec2>) {
        let Some(focus) = focus_screen else {
            self.set_zoom(self.zoom_percent + delta_percent);
            return;
        };
        let anchor_world = self.to_world(focus);
        self.set_zoom(self.zoom_percent + delta_percent);
        let drift = self.to_screen(anchor_world) - focus;
        self.scroll_offset += drift / self.device_pixel_ratio.max(f32::EPSILON);
    }

    /// Verschiebt die Ansicht um ein Delta in logischen Pixeln.
    pub fn pan(&mut self, delta_logical: Vec2) {
        self.scroll_offset -= delta_logical;
    }

    /// Zoom auf 100 % und Scroll-Offset auf Null.
    pub fn reset(&mut self) {
        self.zoom_percent = Self::DEFAULT_ZOOM.clamp(self.zoom_min, self.zoom_max);
        self.scroll_offset = Vec2::ZERO;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
