//! Committete Leitungen mit Knickpunkten.

use super::types::{DrawCommand, RenderContext};
use crate::core::EntityRef;

/// Radius der Knickpunkt-Marker in Pixeln.
const BEND_DOT_RADIUS: f32 = 3.0;

pub(crate) fn draw(ctx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
    let options = &ctx.scene.options;

    for wire in ctx.scene.schematic.wires() {
        let selected = ctx.scene.selection == Some(EntityRef::Wire(wire.id));
        let (width, color) = if selected {
            (options.wire_width_selected, options.selection_color)
        } else {
            (options.wire_width, options.wire_color)
        };

        out.push(DrawCommand::Polyline {
            points: wire.points.iter().map(|&p| ctx.project(p)).collect(),
            width,
            color,
            dashed: false,
        });

        for &bend in wire.bend_points() {
            out.push(DrawCommand::Circle {
                center: ctx.project(bend),
                radius: BEND_DOT_RADIUS,
                color,
            });
        }
    }
}
