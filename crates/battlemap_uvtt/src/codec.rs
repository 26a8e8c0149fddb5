//! Mapping between the internal map model and UVTT documents
//!
//! The internal model is world-unit based with structured entities; UVTT
//! is grid-unit based with packed colors and the legacy `pixels_per_grid`
//! naming. All of that translation lives here so the rest of the
//! codebase never sees the interchange shapes.

use battlemap_core::{
    points_to_flat, Door, ImageDimensions, Light, MapData, MapDimensions, MapMetadata, Point, Wall,
};
use tracing::{debug, warn};

use crate::color::{pack_color, unpack_color};
use crate::document::{
    Environment, LightDocument, PortalDocument, Resolution, UvttDocument, UVTT_FORMAT_VERSION,
};
use crate::error::UvttError;

/// Interchange file flavor, selecting the export extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvttFlavor {
    Uvtt,
    Dd2vtt,
}

impl UvttFlavor {
    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            UvttFlavor::Uvtt => "uvtt",
            UvttFlavor::Dd2vtt => "dd2vtt",
        }
    }
}

/// Serialize a map into a UVTT document
///
/// Wall, door, and light coordinates are converted from world units to
/// grid units through the map's scale/offset. Free-form objects have no
/// UVTT counterpart and are not exported.
pub fn encode(map: &MapData) -> UvttDocument {
    let meta = &map.metadata;

    if !map.objects.is_empty() {
        debug!(
            count = map.objects.len(),
            "free-form objects are not part of the UVTT format, skipping"
        );
    }

    let line_of_sight = map
        .walls
        .iter()
        .map(|wall| {
            wall.vertices()
                .into_iter()
                .map(|p| meta.world_to_grid_exact(p))
                .collect()
        })
        .collect();

    let portals = map
        .doors
        .iter()
        .map(|door| PortalDocument {
            position: meta.world_to_grid_exact(door.position),
            bounds: door
                .bounds
                .iter()
                .map(|p| meta.world_to_grid_exact(*p))
                .collect(),
            rotation: door.rotation,
            closed: door.closed,
            freestanding: door.freestanding,
        })
        .collect();

    let lights = map
        .lights
        .iter()
        .map(|light| LightDocument {
            position: meta.world_to_grid_exact(light.position),
            range: light.range / meta.world_units_per_grid_cell,
            intensity: light.intensity,
            color: pack_color(&light.color, light.opacity),
            shadows: light.shadows,
        })
        .collect();

    UvttDocument {
        format: UVTT_FORMAT_VERSION,
        resolution: Resolution {
            map_origin: meta.offset,
            map_size: Point::new(meta.dimensions.width, meta.dimensions.height),
            pixels_per_grid: meta.world_units_per_grid_cell,
        },
        line_of_sight,
        portals,
        lights,
        environment: Environment::default(),
        image: String::new(),
    }
}

/// Reconstruct a map from a UVTT document
///
/// Inverse of [`encode`]: one wall per `line_of_sight` polyline, packed
/// colors unpacked with the minimum-opacity clamp, and a non-positive
/// grid scale normalized to the default rather than rejected.
pub fn decode(doc: &UvttDocument) -> MapData {
    let scale = if doc.resolution.pixels_per_grid > 0.0 {
        doc.resolution.pixels_per_grid
    } else {
        warn!(
            pixels_per_grid = doc.resolution.pixels_per_grid,
            "non-positive grid scale in document, using default"
        );
        Resolution::default().pixels_per_grid
    };
    let map_size = doc.resolution.map_size;

    let metadata = MapMetadata {
        world_units_per_grid_cell: scale,
        offset: doc.resolution.map_origin,
        dimensions: MapDimensions::new(map_size.x, map_size.y),
        image_dimensions: ImageDimensions::new(
            (map_size.x * scale).round() as u32,
            (map_size.y * scale).round() as u32,
        ),
    };

    let walls = doc
        .line_of_sight
        .iter()
        .map(|polyline| {
            let world: Vec<Point> = polyline.iter().map(|p| metadata.grid_to_world(*p)).collect();
            Wall::new(points_to_flat(&world))
        })
        .collect();

    let doors = doc
        .portals
        .iter()
        .map(|portal| {
            let mut door = Door::new(
                metadata.grid_to_world(portal.position),
                portal
                    .bounds
                    .iter()
                    .map(|p| metadata.grid_to_world(*p))
                    .collect(),
            );
            door.rotation = portal.rotation;
            door.closed = portal.closed;
            door.freestanding = portal.freestanding;
            door
        })
        .collect();

    let lights = doc
        .lights
        .iter()
        .map(|entry| {
            let (color, opacity) = unpack_color(&entry.color);
            let mut light = Light::new(metadata.grid_to_world(entry.position));
            light.range = entry.range * scale;
            light.intensity = entry.intensity;
            light.color = color;
            light.opacity = opacity;
            light.shadows = entry.shadows;
            light
        })
        .collect();

    debug!(
        walls = doc.line_of_sight.len(),
        portals = doc.portals.len(),
        lights = doc.lights.len(),
        "decoded UVTT document"
    );

    MapData {
        metadata,
        walls,
        doors,
        objects: Vec::new(),
        lights,
    }
}

/// Encode a map and serialize it to a UVTT JSON string
pub fn to_json_string(map: &MapData) -> Result<String, UvttError> {
    Ok(serde_json::to_string(&encode(map))?)
}

/// Parse a UVTT JSON string and decode it into a map
pub fn from_json_str(json: &str) -> Result<MapData, UvttError> {
    let doc: UvttDocument = serde_json::from_str(json)?;
    Ok(decode(&doc))
}

/// Build a download filename from a map name
///
/// Path-hostile characters are replaced with underscores; an empty name
/// falls back to `map`.
pub fn export_file_name(map_name: &str, flavor: UvttFlavor) -> String {
    let sanitized: String = map_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if sanitized.is_empty() { "map" } else { sanitized.as_str() };
    format!("{stem}.{}", flavor.extension())
}
