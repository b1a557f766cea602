//! Pin-Templates und abgeleitete Pins.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rolle eines Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinRole {
    /// Eingang
    Input,
    /// Ausgang
    Output,
}

/// Statischer Pin eines Bauteil-Typs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinTemplate {
    /// Pin-ID, eindeutig innerhalb des Typs
    pub id: String,
    /// Offset relativ zum Bauteil-Ursprung (linke obere Ecke)
    pub offset: Vec2,
    /// Eingang oder Ausgang
    pub role: PinRole,
    /// Optionale Beschriftung (z.B. "CLK")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PinTemplate {
    /// Erstellt ein Pin-Template ohne Beschriftung.
    pub fn new(id: impl Into<String>, offset: Vec2, role: PinRole) -> Self {
        Self {
            id: id.into(),
            offset,
            role,
            label: None,
        }
    }

    /// Setzt die Beschriftung.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Anzeigename: Beschriftung oder ID.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Verweis auf einen konkreten Pin eines platzierten Bauteils
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinRef {
    /// ID des Bauteils
    pub component_id: u64,
    /// ID des Pins innerhalb des Bauteil-Typs
    pub pin_id: String,
}

impl PinRef {
    /// Erstellt einen Pin-Verweis.
    pub fn new(component_id: u64, pin_id: impl Into<String>) -> Self {
        Self {
            component_id,
            pin_id: pin_id.into(),
        }
    }
}

/// Abgeleiteter Pin: Template plus aktuelle absolute Position.
///
/// Wird bei jedem Zugriff aus Bauteil-Position und -Rotation berechnet.
#[derive(Debug, Clone, Copy)]
pub struct Pin<'a> {
    /// ID des Bauteils, zu dem der Pin gehört
    pub component_id: u64,
    /// Zugehöriges Template
    pub template: &'a PinTemplate,
    /// Absolute Position in Welt-Koordinaten
    pub position: Vec2,
}

impl Pin<'_> {
    /// Verweis auf diesen Pin.
    pub fn pin_ref(&self) -> PinRef {
        PinRef::new(self.component_id, self.template.id.clone())
    }

    /// Rolle des Pins.
    pub fn role(&self) -> PinRole {
        self.template.role
    }
}
