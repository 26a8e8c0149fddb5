//! Light sources
//!
//! Lights carry a UI-friendly color representation (`#RRGGBB` plus a
//! separate opacity). The packed `RRGGBBAA` form exists only in the
//! interchange format and is converted at the codec boundary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Point;

fn default_true() -> bool {
    true
}

fn default_intensity() -> f32 {
    1.0
}

fn default_light_color() -> String {
    "#ffffff".to_string()
}

fn default_light_opacity() -> f32 {
    0.5
}

/// A light source placed on the map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Light {
    pub id: Uuid,
    /// Position in world units
    pub position: Point,
    /// Illumination radius in world units
    pub range: f32,
    #[serde(default = "default_intensity")]
    pub intensity: f32,
    /// Hex color, `#RRGGBB`
    #[serde(default = "default_light_color")]
    pub color: String,
    /// Opacity 0..1
    #[serde(default = "default_light_opacity")]
    pub opacity: f32,
    /// Whether walls cast shadows from this light
    #[serde(default = "default_true")]
    pub shadows: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
}

impl Light {
    /// Create a new light with default appearance
    pub fn new(position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            range: 100.0,
            intensity: default_intensity(),
            color: default_light_color(),
            opacity: default_light_opacity(),
            shadows: true,
            visible: true,
            locked: false,
        }
    }

    /// Apply a partial update, merging only the provided fields
    pub fn apply(&mut self, patch: LightPatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(range) = patch.range {
            self.range = range;
        }
        if let Some(intensity) = patch.intensity {
            self.intensity = intensity;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity;
        }
        if let Some(shadows) = patch.shadows {
            self.shadows = shadows;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(locked) = patch.locked {
            self.locked = locked;
        }
    }
}

/// Partial light update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct LightPatch {
    pub position: Option<Point>,
    pub range: Option<f32>,
    pub intensity: Option<f32>,
    pub color: Option<String>,
    pub opacity: Option<f32>,
    pub shadows: Option<bool>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
}
