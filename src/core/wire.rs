//! Leitungen als Polylinien zwischen Pins.

use super::pin::PinRef;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Eine Leitung: geordnete Punktfolge mit optionalen Pin-Verweisen an den Enden.
///
/// Innere Punkte sind reine Knickpunkte ohne weitere Bedeutung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wire {
    /// Eindeutige Leitungs-ID
    pub id: u64,
    /// Punkte der Polylinie (mindestens 2)
    pub points: Vec<Vec2>,
    /// Pin am ersten Punkt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_ref: Option<PinRef>,
    /// Pin am letzten Punkt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ref: Option<PinRef>,
}

impl Wire {
    /// Mindestanzahl Punkte einer gültigen Leitung.
    pub const MIN_POINTS: usize = 2;

    /// Erstellt eine Leitung, falls genügend Punkte vorhanden sind.
    pub fn new(
        id: u64,
        points: Vec<Vec2>,
        start_ref: Option<PinRef>,
        end_ref: Option<PinRef>,
    ) -> Option<Self> {
        if points.len() < Self::MIN_POINTS {
            return None;
        }
        Some(Self {
            id,
            points,
            start_ref,
            end_ref,
        })
    }

    /// Aufeinanderfolgende Punktpaare.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Innere Knickpunkte (ohne ersten und letzten Punkt).
    pub fn bend_points(&self) -> &[Vec2] {
        if self.points.len() <= 2 {
            return &[];
        }
        &self.points[1..self.points.len() - 1]
    }

    /// Prüft, ob Start- oder End-Verweis das Bauteil nennt.
    pub fn references_component(&self, component_id: u64) -> bool {
        self.start_ref
            .as_ref()
            .is_some_and(|r| r.component_id == component_id)
            || self
                .end_ref
                .as_ref()
                .is_some_and(|r| r.component_id == component_id)
    }

    /// Prüft, ob beide Enden auf denselben Pin zeigen.
    pub fn is_self_short(&self) -> bool {
        matches!((&self.start_ref, &self.end_ref), (Some(a), Some(b)) if a == b)
    }

    /// Prüft, ob ein Ende genau diesen Pin nennt.
    pub fn touches_pin(&self, pin: &PinRef) -> bool {
        self.start_ref.as_ref() == Some(pin) || self.end_ref.as_ref() == Some(pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_requires_two_points() {
        assert!(Wire::new(1, vec![Vec2::ZERO], None, None).is_none());
        assert!(Wire::new(1, vec![Vec2::ZERO, Vec2::X], None, None).is_some());
    }

    #[test]
    fn test_bend_points_exclude_endpoints() {
        let wire = Wire::new(
            1,
            vec![
                Vec2::ZERO,
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0),
                Vec2::new(20.0, 10.0),
            ],
            None,
            None,
        )
        .expect("Leitung gültig");
        assert_eq!(
            wire.bend_points(),
            &[Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)]
        );
        assert_eq!(wire.segments().count(), 3);
    }

    #[test]
    fn test_self_short_detection() {
        let pin = PinRef::new(3, "A");
        let wire = Wire::new(
            1,
            vec![Vec2::ZERO, Vec2::X],
            Some(pin.clone()),
            Some(pin.clone()),
        )
        .expect("Leitung gültig");
        assert!(wire.is_self_short());
        assert!(wire.references_component(3));
        assert!(wire.touches_pin(&pin));
        assert!(!wire.references_component(4));
    }
}
