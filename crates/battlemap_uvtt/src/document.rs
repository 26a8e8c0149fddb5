//! UVTT wire-format documents
//!
//! Serde structs matching the Universal VTT JSON layout shared across
//! tabletop tools. Every field defaults so partial and legacy documents
//! decode without error; normalization happens in the codec, not here.
//! Wire coordinates are grid units, unlike the world-unit internal model.

use battlemap_core::Point;
use serde::{Deserialize, Serialize};

/// UVTT format generation written on export
pub const UVTT_FORMAT_VERSION: f64 = 0.3;

fn default_format() -> f64 {
    UVTT_FORMAT_VERSION
}

fn default_pixels_per_grid() -> f32 {
    50.0
}

fn default_map_size() -> Point {
    Point::new(20.0, 20.0)
}

/// A complete UVTT interchange document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UvttDocument {
    #[serde(default = "default_format")]
    pub format: f64,
    #[serde(default)]
    pub resolution: Resolution,
    /// One polyline per wall, in grid units
    #[serde(default)]
    pub line_of_sight: Vec<Vec<Point>>,
    #[serde(default)]
    pub portals: Vec<PortalDocument>,
    #[serde(default)]
    pub lights: Vec<LightDocument>,
    #[serde(default)]
    pub environment: Environment,
    /// Base64 background image payload (opaque to this codec)
    #[serde(default)]
    pub image: String,
}

impl Default for UvttDocument {
    fn default() -> Self {
        Self {
            format: UVTT_FORMAT_VERSION,
            resolution: Resolution::default(),
            line_of_sight: Vec::new(),
            portals: Vec::new(),
            lights: Vec::new(),
            environment: Environment::default(),
            image: String::new(),
        }
    }
}

/// Grid resolution block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    #[serde(default)]
    pub map_origin: Point,
    /// Map extent in grid cells
    #[serde(default = "default_map_size")]
    pub map_size: Point,
    /// Legacy pixel-era name; carries world units per grid cell
    #[serde(default = "default_pixels_per_grid")]
    pub pixels_per_grid: f32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            map_origin: Point::ZERO,
            map_size: default_map_size(),
            pixels_per_grid: default_pixels_per_grid(),
        }
    }
}

/// A door/portal entry, in grid units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalDocument {
    #[serde(default)]
    pub position: Point,
    #[serde(default)]
    pub bounds: Vec<Point>,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub freestanding: bool,
}

/// A light entry; color is a packed `RRGGBBAA` hex string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightDocument {
    #[serde(default)]
    pub position: Point,
    /// Illumination radius in grid units
    #[serde(default)]
    pub range: f32,
    #[serde(default)]
    pub intensity: f32,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub shadows: bool,
}

/// Lighting environment block, carried through unmodified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub baked_lighting: bool,
    #[serde(default)]
    pub ambient_light: Option<String>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            baked_lighting: false,
            ambient_light: Some("ffffff".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document_decodes_with_defaults() {
        let doc: UvttDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.format, UVTT_FORMAT_VERSION);
        assert_eq!(doc.resolution.pixels_per_grid, 50.0);
        assert!(doc.line_of_sight.is_empty());
        assert!(doc.portals.is_empty());
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let mut doc = UvttDocument::default();
        doc.line_of_sight = vec![vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)]];
        let json = serde_json::to_string(&doc).unwrap();
        let back: UvttDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back.line_of_sight, doc.line_of_sight);
        assert_eq!(back.resolution, doc.resolution);
    }
}
