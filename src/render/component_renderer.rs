//! Bauteilkörper, Symbole, Beschriftungen und Pin-Marker.

use super::types::{DrawCommand, RenderContext, TextAnchor};
use crate::core::{Component, EntityRef, PinRole, Rotation};
use glam::Vec2;

/// Schriftgröße des Symbols in Welteinheiten.
const SYMBOL_FONT_SIZE: f32 = 14.0;
/// Schriftgröße der Beschriftung in Welteinheiten.
const VALUE_FONT_SIZE: f32 = 10.0;

pub(crate) fn draw(ctx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
    let options = &ctx.scene.options;

    for component in ctx.scene.schematic.components() {
        let selected = ctx.scene.selection == Some(EntityRef::Component(component.id));
        let flagged = ctx.scene.flagged_components.contains(&component.id);

        let (min, max) = body_rect(component);
        let stroke = if selected {
            (2.5, options.selection_color)
        } else if flagged {
            (2.0, options.error_color)
        } else {
            (1.5, options.component_stroke_color)
        };
        out.push(DrawCommand::Rect {
            min: ctx.project(min),
            max: ctx.project(max),
            fill: Some(options.component_fill_color),
            stroke: Some(stroke),
        });

        let center = ctx.project(component.center());
        let component_type = ctx.scene.library.get(&component.type_name);
        let symbol = component_type.map_or(component.type_name.as_str(), |t| t.symbol.as_str());
        out.push(DrawCommand::Text {
            position: center,
            text: symbol.to_string(),
            size: ctx.scale_len(SYMBOL_FONT_SIZE),
            color: options.text_color,
            anchor: TextAnchor::Center,
        });
        if !component.value.is_empty() {
            out.push(DrawCommand::Text {
                position: ctx.project(Vec2::new(component.center().x, max.y + VALUE_FONT_SIZE)),
                text: component.value.clone(),
                size: ctx.scale_len(VALUE_FONT_SIZE),
                color: options.text_color,
                anchor: TextAnchor::Center,
            });
        }

        let Some(component_type) = component_type else {
            continue;
        };
        for pin in component.pins(component_type) {
            let color = if ctx.scene.flagged_pins.contains(&pin.pin_ref()) {
                options.error_color
            } else {
                match pin.role() {
                    PinRole::Input => options.input_pin_color,
                    PinRole::Output => options.output_pin_color,
                }
            };
            out.push(DrawCommand::Circle {
                center: ctx.project(pin.position),
                radius: ctx.scale_len(options.pin_marker_radius),
                color,
            });
        }
    }
}

/// Körper-Rechteck in Weltkoordinaten; bei 90°/270° mit vertauschten Seiten um den Mittelpunkt.
fn body_rect(component: &Component) -> (Vec2, Vec2) {
    let half = match component.rotation {
        Rotation::Deg0 | Rotation::Deg180 => Vec2::new(component.width, component.height) * 0.5,
        Rotation::Deg90 | Rotation::Deg270 => Vec2::new(component.height, component.width) * 0.5,
    };
    let center = component.center();
    (center - half, center + half)
}
