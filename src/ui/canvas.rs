//! Übersetzt Draw-Commands in egui-Shapes.

use crate::render::{DrawCommand, Rgba, TextAnchor};

fn color(rgba: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn to_pos(origin: egui::Pos2, point: glam::Vec2) -> egui::Pos2 {
    egui::pos2(origin.x + point.x, origin.y + point.y)
}

fn align(anchor: TextAnchor) -> egui::Align2 {
    match anchor {
        TextAnchor::Center => egui::Align2::CENTER_CENTER,
        TextAnchor::Left => egui::Align2::LEFT_CENTER,
    }
}

/// Zeichnet die Befehlsliste relativ zu `origin` (linke obere Ecke der Fläche).
pub fn paint_draw_commands(painter: &egui::Painter, origin: egui::Pos2, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Clear { color: c } => {
                painter.rect_filled(painter.clip_rect(), 0.0, color(*c));
            }
            DrawCommand::Line {
                from,
                to,
                width,
                color: c,
            } => {
                painter.line_segment(
                    [to_pos(origin, *from), to_pos(origin, *to)],
                    egui::Stroke::new(*width, color(*c)),
                );
            }
            DrawCommand::Polyline {
                points,
                width,
                color: c,
                dashed,
            } => {
                let points: Vec<egui::Pos2> = points.iter().map(|p| to_pos(origin, *p)).collect();
                let stroke = egui::Stroke::new(*width, color(*c));
                if *dashed {
                    painter.extend(egui::Shape::dashed_line(&points, stroke, 6.0, 4.0));
                } else {
                    painter.add(egui::Shape::line(points, stroke));
                }
            }
            DrawCommand::Rect {
                min,
                max,
                fill,
                stroke,
            } => {
                let rect = egui::Rect::from_min_max(to_pos(origin, *min), to_pos(origin, *max));
                if let Some(fill) = fill {
                    painter.rect_filled(rect, 2.0, color(*fill));
                }
                if let Some((width, c)) = stroke {
                    painter.rect_stroke(
                        rect,
                        2.0,
                        egui::Stroke::new(*width, color(*c)),
                        egui::StrokeKind::Inside,
                    );
                }
            }
            DrawCommand::Circle {
                center,
                radius,
                color: c,
            } => {
                painter.circle_filled(to_pos(origin, *center), *radius, color(*c));
            }
            DrawCommand::Text {
                position,
                text,
                size,
                color: c,
                anchor,
            } => {
                painter.text(
                    to_pos(origin, *position),
                    align(*anchor),
                    text,
                    egui::FontId::proportional(*size),
                    color(*c),
                );
            }
        }
    }
}
