//! Zentrale Konfiguration für den Schaltplan-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Grid ────────────────────────────────────────────────────────────

/// Grid-Abstand in Welteinheiten.
pub const GRID_SIZE: f32 = 10.0;

// ── Zoom ────────────────────────────────────────────────────────────

/// Minimaler Zoom in Prozent.
pub const ZOOM_MIN_PERCENT: f32 = 50.0;
/// Maximaler Zoom in Prozent.
pub const ZOOM_MAX_PERCENT: f32 = 200.0;
/// Zoom-Schritt in Prozentpunkten (Menü-Buttons / Shortcuts).
pub const ZOOM_STEP_PERCENT: f32 = 10.0;
/// Zoom-Schritt in Prozentpunkten pro Mausrad-Raste.
pub const SCROLL_ZOOM_STEP_PERCENT: f32 = 10.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Hit-Test-Toleranz für Leitungen in Screen-Pixeln.
pub const HIT_TOLERANCE_PX: f32 = 5.0;
/// Fangradius für Pins beim Leitungszeichnen (Welteinheiten).
pub const PIN_SNAP_RADIUS: f32 = 8.0;
/// Maximale Anzahl Undo-Schritte (0 = unbegrenzt).
pub const HISTORY_DEPTH: usize = 0;

// ── Rendering ───────────────────────────────────────────────────────

/// Radius der Pin-Marker in Welteinheiten.
pub const PIN_MARKER_RADIUS: f32 = 4.0;
/// Linienstärke normaler Leitungen in Pixeln.
pub const WIRE_WIDTH: f32 = 2.0;
/// Linienstärke der selektierten Leitung in Pixeln.
pub const WIRE_WIDTH_SELECTED: f32 = 3.5;
/// Hintergrundfarbe (RGBA).
pub const BACKGROUND_COLOR: [u8; 4] = [0x1e, 0x1e, 0x2e, 0xff];
/// Farbe der Grid-Linien (RGBA: #333345).
pub const GRID_COLOR: [u8; 4] = [0x33, 0x33, 0x45, 0xff];
/// Farbe der Leitungen (RGBA: Blau).
pub const WIRE_COLOR: [u8; 4] = [0x3b, 0x82, 0xf6, 0xff];
/// Hervorhebungsfarbe für Selektion (RGBA: #a78bfa).
pub const SELECTION_COLOR: [u8; 4] = [0xa7, 0x8b, 0xfa, 0xff];
/// Farbe der Leitungs-Vorschau (RGBA: Gelb).
pub const PREVIEW_COLOR: [u8; 4] = [0xff, 0xff, 0x00, 0xff];
/// Füllfarbe der Bauteilkörper (RGBA).
pub const COMPONENT_FILL_COLOR: [u8; 4] = [0x2a, 0x2a, 0x3c, 0xff];
/// Umrissfarbe der Bauteilkörper (RGBA).
pub const COMPONENT_STROKE_COLOR: [u8; 4] = [0xcc, 0xcc, 0xdd, 0xff];
/// Textfarbe (RGBA).
pub const TEXT_COLOR: [u8; 4] = [0xee, 0xee, 0xff, 0xff];
/// Farbe der Eingangs-Pins (RGBA: Grün).
pub const INPUT_PIN_COLOR: [u8; 4] = [0x22, 0xc5, 0x5e, 0xff];
/// Farbe der Ausgangs-Pins (RGBA: Orange).
pub const OUTPUT_PIN_COLOR: [u8; 4] = [0xf9, 0x73, 0x16, 0xff];
/// Markierungsfarbe für Bauteile mit Fehler-Diagnose (RGBA: Rot).
pub const ERROR_COLOR: [u8; 4] = [0xef, 0x44, 0x44, 0xff];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `schematic_capture.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Grid ────────────────────────────────────────────────────
    /// Grid-Abstand in Welteinheiten
    pub grid_size: f32,
    /// Positionen und Klicks auf das Grid einrasten
    pub snap_to_grid: bool,
    /// Grid zeichnen
    pub show_grid: bool,

    // ── Zoom ────────────────────────────────────────────────────
    /// Minimaler Zoom in Prozent
    pub zoom_min_percent: f32,
    /// Maximaler Zoom in Prozent
    pub zoom_max_percent: f32,
    /// Zoom-Schritt für Buttons/Shortcuts
    pub zoom_step_percent: f32,
    /// Zoom-Schritt pro Mausrad-Raste
    pub scroll_zoom_step_percent: f32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Hit-Test-Toleranz in Screen-Pixeln
    pub hit_tolerance_px: f32,
    /// Pin-Fangradius in Welteinheiten
    pub pin_snap_radius: f32,
    /// Maximale Undo-Tiefe, 0 = unbegrenzt
    pub history_depth: usize,

    // ── Darstellung ─────────────────────────────────────────────
    /// Pin-Marker-Radius in Welteinheiten
    pub pin_marker_radius: f32,
    /// Leitungsbreite in Pixeln
    pub wire_width: f32,
    /// Leitungsbreite der Selektion in Pixeln
    pub wire_width_selected: f32,
    /// Hintergrundfarbe
    pub background_color: [u8; 4],
    /// Grid-Farbe
    pub grid_color: [u8; 4],
    /// Leitungsfarbe
    pub wire_color: [u8; 4],
    /// Selektionsfarbe
    pub selection_color: [u8; 4],
    /// Vorschaufarbe
    pub preview_color: [u8; 4],
    /// Bauteil-Füllung
    pub component_fill_color: [u8; 4],
    /// Bauteil-Umriss
    pub component_stroke_color: [u8; 4],
    /// Textfarbe
    pub text_color: [u8; 4],
    /// Eingangs-Pins
    pub input_pin_color: [u8; 4],
    /// Ausgangs-Pins
    pub output_pin_color: [u8; 4],
    /// Fehler-Markierung
    pub error_color: [u8; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            snap_to_grid: true,
            show_grid: true,
            zoom_min_percent: ZOOM_MIN_PERCENT,
            zoom_max_percent: ZOOM_MAX_PERCENT,
            zoom_step_percent: ZOOM_STEP_PERCENT,
            scroll_zoom_step_percent: SCROLL_ZOOM_STEP_PERCENT,
            hit_tolerance_px: HIT_TOLERANCE_PX,
            pin_snap_radius: PIN_SNAP_RADIUS,
            history_depth: HISTORY_DEPTH,
            pin_marker_radius: PIN_MARKER_RADIUS,
            wire_width: WIRE_WIDTH,
            wire_width_selected: WIRE_WIDTH_SELECTED,
            background_color: BACKGROUND_COLOR,
            grid_color: GRID_COLOR,
            wire_color: WIRE_COLOR,
            selection_color: SELECTION_COLOR,
            preview_color: PREVIEW_COLOR,
            component_fill_color: COMPONENT_FILL_COLOR,
            component_stroke_color: COMPONENT_STROKE_COLOR,
            text_color: TEXT_COLOR,
            input_pin_color: INPUT_PIN_COLOR,
            output_pin_color: OUTPUT_PIN_COLOR,
            error_color: ERROR_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler werden Standardwerte verwendet.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("schematic_capture"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("schematic_capture.toml")
    }

    /// Korrigiert unbrauchbare Werte (z.B. Grid ≤ 0, vertauschte Zoom-Grenzen).
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            log::warn!("Ungültige Grid-Größe {}, verwende {}", self.grid_size, GRID_SIZE);
            self.grid_size = defaults.grid_size;
        }
        if self.zoom_min_percent > self.zoom_max_percent {
            std::mem::swap(&mut self.zoom_min_percent, &mut self.zoom_max_percent);
        }
        if self.zoom_min_percent <= 0.0 {
            self.zoom_min_percent = defaults.zoom_min_percent;
        }
        self
    }

    /// Rastet einen Punkt ein, wenn Grid-Snapping aktiv ist.
    pub fn snap(&self, point: glam::Vec2) -> glam::Vec2 {
        if self.snap_to_grid {
            crate::core::snap(point, self.grid_size)
        } else {
            point
        }
    }
}
