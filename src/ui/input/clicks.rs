//! Klick-Events auf der Zeichenfläche.

use super::{CanvasContext, InputState};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Primär- und Sekundärklicks.
    pub(crate) fn handle_clicks(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if ctx.response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                events.push(AppIntent::CanvasClicked {
                    screen_pos: ctx.to_screen(pointer_pos),
                });
            }
        } else if ctx.response.clicked_by(egui::PointerButton::Secondary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                events.push(AppIntent::CanvasSecondaryClicked {
                    screen_pos: ctx.to_screen(pointer_pos),
                });
            }
        }
    }
}
