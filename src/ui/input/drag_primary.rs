//! Drag-Verarbeitung: Bauteil-Verschiebung (Primär) und Pan (Mitte).

use super::{CanvasContext, InputState};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Drag-Start, -Update und -Ende sowie Pan per Mittelklick.
    pub(crate) fn handle_drag(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if ctx.response.drag_started_by(egui::PointerButton::Primary) {
            // press_origin() liefert die Position vor Erreichen der Drag-Schwelle
            let press_pos = ctx
                .ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| ctx.response.interact_pointer_pos());
            if let Some(pos) = press_pos {
                events.push(AppIntent::DragStarted {
                    screen_pos: ctx.to_screen(pos),
                });
                self.primary_dragging = true;
            }
        } else if self.primary_dragging && ctx.response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = ctx.response.interact_pointer_pos() {
                events.push(AppIntent::DragUpdated {
                    screen_pos: ctx.to_screen(pos),
                });
            }
        }

        if self.primary_dragging && ctx.response.drag_stopped() {
            events.push(AppIntent::DragEnded);
            self.primary_dragging = false;
        }

        if ctx.response.dragged_by(egui::PointerButton::Middle) {
            let delta = ctx.response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::PanRequested {
                    delta_logical: glam::Vec2::new(delta.x, delta.y),
                });
            }
        }
    }
}
