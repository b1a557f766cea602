//! Platzierte Bauteile und ihre Rotation.

use super::geometry::rotate_quarter_turns;
use super::library::ComponentType;
use super::pin::{Pin, PinTemplate};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rotation eines Bauteils in Vierteldrehungen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    /// 0°
    #[default]
    Deg0,
    /// 90°
    Deg90,
    /// 180°
    Deg180,
    /// 270°
    Deg270,
}

impl Rotation {
    /// Anzahl der Vierteldrehungen (0..=3).
    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Winkel in Grad.
    pub fn degrees(self) -> u16 {
        u16::from(self.quarter_turns()) * 90
    }

    /// Nächste Rotation im Uhrzeigersinn.
    pub fn rotated_cw(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(format!(
                "invalid rotation {other}, expected 0, 90, 180 or 270"
            )),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Ein platziertes Bauteil im Schaltplan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Eindeutige Bauteil-ID
    pub id: u64,
    /// Name des Bauteil-Typs in der Bibliothek
    #[serde(rename = "type")]
    pub type_name: String,
    /// Linke obere Ecke (grid-ausgerichtet)
    pub position: Vec2,
    /// Breite in Welteinheiten
    pub width: f32,
    /// Höhe in Welteinheiten
    pub height: f32,
    /// Rotation um den Mittelpunkt
    #[serde(default)]
    pub rotation: Rotation,
    /// Beschriftung bzw. Bauteilwert (z.B. "1k")
    #[serde(default)]
    pub value: String,
}

impl Component {
    /// Erstellt ein Bauteil aus einem Typ an der gegebenen Position.
    pub fn from_type(id: u64, component_type: &ComponentType, position: Vec2) -> Self {
        Self {
            id,
            type_name: component_type.name.clone(),
            position,
            width: component_type.width,
            height: component_type.height,
            rotation: Rotation::Deg0,
            value: component_type.default_value.clone(),
        }
    }

    /// Mittelpunkt des Bauteils.
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::new(self.width, self.height) * 0.5
    }

    /// Achsenparallele Containment-Prüfung gegen `(position, width, height)`.
    ///
    /// Die Rotation wird hier bewusst nicht berücksichtigt.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.position + Vec2::new(self.width, self.height);
        point.x >= self.position.x
            && point.x <= max.x
            && point.y >= self.position.y
            && point.y <= max.y
    }

    /// Absolute Position eines Pin-Templates unter aktueller Position und Rotation.
    pub fn pin_position(&self, template: &PinTemplate) -> Vec2 {
        rotate_quarter_turns(
            self.position + template.offset,
            self.center(),
            self.rotation.quarter_turns(),
        )
    }

    /// Alle abgeleiteten Pins in Template-Reihenfolge.
    pub fn pins<'a>(&self, component_type: &'a ComponentType) -> Vec<Pin<'a>> {
        component_type
            .pins
            .iter()
            .map(|template| Pin {
                component_id: self.id,
                template,
                position: self.pin_position(template),
            })
            .collect()
    }
}
