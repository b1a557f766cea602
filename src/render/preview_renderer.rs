//! Gestrichelte Vorschau der Leitung im Aufbau (zuletzt, ganz oben).

use super::types::{DrawCommand, RenderContext};

/// Radius der gesetzten Vorschaupunkte in Pixeln.
const PREVIEW_DOT_RADIUS: f32 = 3.0;

pub(crate) fn draw(ctx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
    let Some(preview) = ctx.scene.wire_preview.as_ref() else {
        return;
    };
    let options = &ctx.scene.options;
    let points: Vec<_> = preview.polyline().into_iter().map(|p| ctx.project(p)).collect();

    if points.len() >= 2 {
        out.push(DrawCommand::Polyline {
            points,
            width: options.wire_width,
            color: options.preview_color,
            dashed: true,
        });
    }

    for &point in &preview.points {
        out.push(DrawCommand::Circle {
            center: ctx.project(point),
            radius: PREVIEW_DOT_RADIUS,
            color: options.preview_color,
        });
    }
}
