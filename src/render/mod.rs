//! Render-Pipeline: reine Funktion von Render-Szene zu Draw-Commands.
//!
//! Reihenfolge: Hintergrund → Grid → Leitungen → Bauteile (mit Pins) →
//! Leitungs-Vorschau. Keine Seiteneffekte; das Zeichnen der Commands
//! übernimmt das Frontend.

mod component_renderer;
mod grid_renderer;
mod preview_renderer;
mod types;
mod wire_renderer;

pub use crate::shared::RenderScene;
pub use types::{DrawCommand, Rgba, TextAnchor};
use types::RenderContext;

/// Erzeugt die vollständige Draw-Command-Liste für eine Szene.
pub fn render(scene: &RenderScene) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(
        16 + scene.schematic.wire_count() * 2 + scene.schematic.component_count() * 6,
    );
    commands.push(DrawCommand::Clear {
        color: scene.options.background_color,
    });
    if !scene.has_surface() {
        return commands;
    }

    let ctx = RenderContext::new(scene);
    grid_renderer::draw(&ctx, &mut commands);
    wire_renderer::draw(&ctx, &mut commands);
    component_renderer::draw(&ctx, &mut commands);
    preview_renderer::draw(&ctx, &mut commands);
    commands
}
