//! Map metadata and the map data aggregate
//!
//! `MapMetadata` is the coordinate-system descriptor for one map; `MapData`
//! bundles it with the four entity collections. `MapData` is the unit
//! handed between the interchange codec, the editor, and the collision
//! checker.

use serde::{Deserialize, Serialize};

use crate::coordinate;
use crate::door::Door;
use crate::geometry::Point;
use crate::light::Light;
use crate::object::MapObject;
use crate::wall::Wall;

/// Map extent in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapDimensions {
    pub width: f32,
    pub height: f32,
}

impl MapDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Background image extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Coordinate-system descriptor for one map
///
/// Invariant: `world_units_per_grid_cell > 0`. All wall/object/light
/// positions are stored in world units, not pixels or grid cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMetadata {
    /// World units per grid cell
    pub world_units_per_grid_cell: f32,
    /// World-space origin offset of the grid
    #[serde(default)]
    pub offset: Point,
    /// Map extent in grid cells
    pub dimensions: MapDimensions,
    /// Background image extent in pixels (display only)
    pub image_dimensions: ImageDimensions,
}

impl Default for MapMetadata {
    fn default() -> Self {
        Self {
            world_units_per_grid_cell: 50.0,
            offset: Point::ZERO,
            dimensions: MapDimensions::new(20.0, 20.0),
            image_dimensions: ImageDimensions::new(1000, 1000),
        }
    }
}

impl MapMetadata {
    /// Convert a grid coordinate to world units using this map's scale/offset
    pub fn grid_to_world(&self, grid: Point) -> Point {
        coordinate::grid_to_world(grid, self.world_units_per_grid_cell, self.offset)
    }

    /// Convert a world coordinate to a floored grid cell index
    pub fn world_to_grid(&self, world: Point) -> Point {
        coordinate::world_to_grid(world, self.world_units_per_grid_cell, self.offset)
    }

    /// Convert a world coordinate to continuous grid space
    pub fn world_to_grid_exact(&self, world: Point) -> Point {
        coordinate::world_to_grid_exact(world, self.world_units_per_grid_cell, self.offset)
    }
}

/// A map's full geometry payload: metadata plus the four entity collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapData {
    #[serde(default)]
    pub metadata: MapMetadata,
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub doors: Vec<Door>,
    #[serde(default)]
    pub objects: Vec<MapObject>,
    #[serde(default)]
    pub lights: Vec<Light>,
}

impl MapData {
    /// Create an empty map with the given metadata
    pub fn new(metadata: MapMetadata) -> Self {
        Self {
            metadata,
            ..Default::default()
        }
    }

    /// Whether the map holds no entities at all
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
            && self.doors.is_empty()
            && self.objects.is_empty()
            && self.lights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_conversions_use_scale_and_offset() {
        let metadata = MapMetadata {
            world_units_per_grid_cell: 50.0,
            offset: Point::new(10.0, 0.0),
            ..Default::default()
        };
        assert_eq!(metadata.grid_to_world(Point::new(2.0, 1.0)), Point::new(110.0, 50.0));
        assert_eq!(metadata.world_to_grid(Point::new(110.0, 50.0)), Point::new(2.0, 1.0));
    }

    #[test]
    fn test_empty_map() {
        let mut map = MapData::default();
        assert!(map.is_empty());
        map.walls.push(Wall::new(vec![0.0, 0.0, 10.0, 0.0]));
        assert!(!map.is_empty());
    }

    #[test]
    fn test_map_data_serializes() {
        let map = MapData::default();
        let json = serde_json::to_string(&map).unwrap();
        let back: MapData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.metadata, map.metadata);
        assert!(back.is_empty());
    }
}
