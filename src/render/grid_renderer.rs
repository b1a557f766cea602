//! Grid-Linien über den sichtbaren Bereich.

use super::types::{DrawCommand, RenderContext};
use glam::Vec2;

/// Obergrenze der Linien pro Achse; darüber wird das Grid ausgedünnt.
const MAX_LINES_PER_AXIS: f32 = 400.0;

pub(crate) fn draw(ctx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
    let options = &ctx.scene.options;
    if !options.show_grid || options.grid_size <= 0.0 {
        return;
    }

    let (min, max) = ctx.visible_world();
    let extent = max - min;
    let mut step = options.grid_size;
    while extent.max_element() / step > MAX_LINES_PER_AXIS {
        step *= 2.0;
    }

    let [w, h] = ctx.scene.surface_size;
    let color = options.grid_color;

    let mut x = (min.x / step).floor() * step;
    while x <= max.x {
        let sx = ctx.project(Vec2::new(x, 0.0)).x;
        out.push(DrawCommand::Line {
            from: Vec2::new(sx, 0.0),
            to: Vec2::new(sx, h),
            width: 1.0,
            color,
        });
        x += step;
    }

    let mut y = (min.y / step).floor() * step;
    while y <= max.y {
        let sy = ctx.project(Vec2::new(0.0, y)).y;
        out.push(DrawCommand::Line {
            from: Vec2::new(0.0, sy),
            to: Vec2::new(w, sy),
            width: 1.0,
            color,
        });
        y += step;
    }
}
