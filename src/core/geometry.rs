//! Geometrie-Helfer: Grid-Snapping, Segment-Abstand, Vierteldrehungen.

use glam::Vec2;

/// Rastet einen Punkt auf das nächste Vielfache von `grid_size` ein.
///
/// Total: bei `grid_size <= 0` (oder nicht-endlich) wird der Punkt unverändert
/// zurückgegeben.
pub fn snap(point: Vec2, grid_size: f32) -> Vec2 {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return point;
    }
    Vec2::new(
        (point.x / grid_size).round() * grid_size,
        (point.y / grid_size).round() * grid_size,
    )
}

/// Senkrechter Abstand von `point` zum Segment `a`–`b` (auf das Segment geklemmt).
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Prüft, ob `point` innerhalb der um `slack` erweiterten Bounding-Box des Segments liegt.
pub fn within_segment_extent(point: Vec2, a: Vec2, b: Vec2, slack: f32) -> bool {
    let min = a.min(b) - Vec2::splat(slack);
    let max = a.max(b) + Vec2::splat(slack);
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

/// Dreht `point` um `center` in ganzen Vierteldrehungen (im Uhrzeigersinn bei Y nach unten).
///
/// Exakt ohne Trigonometrie: eine Vierteldrehung bildet `(x, y)` auf `(-y, x)` ab.
pub fn rotate_quarter_turns(point: Vec2, center: Vec2, quarter_turns: u8) -> Vec2 {
    let rel = point - center;
    let rotated = match quarter_turns % 4 {
        0 => rel,
        1 => Vec2::new(-rel.y, rel.x),
        2 => Vec2::new(-rel.x, -rel.y),
        _ => Vec2::new(rel.y, -rel.x),
    };
    center + rotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn snap_rounds_to_nearest_multiple() {
        let p = snap(Vec2::new(14.0, 16.0), 10.0);
        assert_eq!(p, Vec2::new(10.0, 20.0));

        let n = snap(Vec2::new(-14.0, -6.0), 10.0);
        assert_eq!(n, Vec2::new(-10.0, -10.0));
    }

    #[test]
    fn snap_is_idempotent() {
        let grids = [1.0, 2.5, 10.0, 20.0, 33.0];
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(3.3, -7.7),
            Vec2::new(123.456, 789.01),
            Vec2::new(-55.5, 44.4),
        ];
        for &g in &grids {
            for &p in &points {
                let once = snap(p, g);
                assert_eq!(snap(once, g), once, "snap nicht idempotent für {p:?} / {g}");
            }
        }
    }

    #[test]
    fn snap_with_non_positive_grid_is_identity() {
        let p = Vec2::new(3.3, 4.4);
        assert_eq!(snap(p, 0.0), p);
        assert_eq!(snap(p, -10.0), p);
    }

    #[test]
    fn distance_to_segment_perpendicular_and_clamped() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_relative_eq!(distance_to_segment(Vec2::new(5.0, 3.0), a, b), 3.0);
        // Hinter dem Endpunkt: Abstand zum Endpunkt
        assert_relative_eq!(distance_to_segment(Vec2::new(13.0, 4.0), a, b), 5.0);
        // Entartetes Segment
        assert_relative_eq!(distance_to_segment(Vec2::new(3.0, 4.0), a, a), 5.0);
    }

    #[test]
    fn rotate_quarter_turns_about_center() {
        let center = Vec2::new(30.0, 25.0);
        let p = Vec2::new(60.0, 25.0);
        assert_eq!(rotate_quarter_turns(p, center, 0), p);
        assert_eq!(rotate_quarter_turns(p, center, 1), Vec2::new(30.0, 55.0));
        assert_eq!(rotate_quarter_turns(p, center, 2), Vec2::new(0.0, 25.0));
        assert_eq!(rotate_quarter_turns(p, center, 3), Vec2::new(30.0, -5.0));
        assert_eq!(rotate_quarter_turns(p, center, 4), p);
    }
}
