//! Scroll-Zoom auf Mausposition.

use super::{CanvasContext, InputState};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Mausrad-Zoom auf die aktuelle Mausposition.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }
        let scroll = ctx.ui.input(|i| i.raw_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let focus_screen = ctx.response.hover_pos().map(|pos| ctx.to_screen(pos));
        events.push(AppIntent::ScrollZoom {
            steps: scroll.signum(),
            focus_screen,
        });
    }
}
