use crate::core::Viewport;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Zoom, Scroll und DPR
    pub viewport: Viewport,
    /// Größe der Zeichenfläche in logischen Pixeln
    pub surface_size: [f32; 2],
    /// Dirty-Flag: Draw-Commands müssen neu erzeugt werden
    pub redraw_requested: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport: Viewport::new(),
            surface_size: [0.0, 0.0],
            redraw_requested: true,
        }
    }

    /// Markiert die Szene als neu zu zeichnen.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Liest und setzt das Dirty-Flag zurück.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
