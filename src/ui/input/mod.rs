//! Zeichenflächen-Input: Maus-Events, Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks`: Primär-/Sekundärklicks
//! - `drag_primary`: Drag-Start/-Update/-Ende und Pan
//! - `zoom`: Scroll-Zoom auf die Mausposition

mod clicks;
mod drag_primary;
mod zoom;

use super::keyboard;
use crate::app::{AppIntent, AppState};

/// Bündelt die gemeinsamen Parameter für die Event-Verarbeitung eines Frames.
pub(crate) struct CanvasContext<'a> {
    ui: &'a egui::Ui,
    response: &'a egui::Response,
}

impl CanvasContext<'_> {
    /// Bildschirmposition (egui-Punkte) → physische Pixel relativ zur Zeichenfläche.
    ///
    /// Die Weltkoordinaten entstehen erst im Intent-Mapping über den Viewport.
    fn to_screen(&self, pointer_pos: egui::Pos2) -> glam::Vec2 {
        let local = pointer_pos - self.response.rect.min;
        let pixels_per_point = self.ui.ctx().pixels_per_point();
        glam::Vec2::new(local.x, local.y) * pixels_per_point
    }
}

/// Verwaltet den Input-Zustand der Zeichenfläche zwischen Frames.
#[derive(Debug, Default)]
pub struct InputState {
    primary_dragging: bool,
    last_hover: Option<egui::Pos2>,
    last_surface: Option<([f32; 2], f32)>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Zeichenflächen-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let ctx = CanvasContext { ui, response };
        let mut events = Vec::new();

        self.handle_resize(&ctx, &mut events);

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            state.selection.selected,
            state.editor.wire_tool.is_drawing(),
        ));

        self.handle_clicks(&ctx, &mut events);
        self.handle_drag(&ctx, &mut events);
        self.handle_hover(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }

    fn handle_resize(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        let rect = ctx.response.rect;
        let size = [rect.width(), rect.height()];
        let pixels_per_point = ctx.ui.ctx().pixels_per_point();
        if self.last_surface == Some((size, pixels_per_point)) {
            return;
        }
        self.last_surface = Some((size, pixels_per_point));
        events.push(AppIntent::SurfaceResized {
            size,
            pixels_per_point,
        });
    }

    fn handle_hover(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        let hover = ctx.response.hover_pos();
        if hover == self.last_hover {
            return;
        }
        self.last_hover = hover;
        if let Some(pos) = hover {
            events.push(AppIntent::PointerMoved {
                screen_pos: ctx.to_screen(pos),
            });
        }
    }
}
