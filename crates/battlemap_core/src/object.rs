//! Free-form polygon obstacles
//!
//! A placed object is a polygon stored relative to its position. Objects
//! flagged as movement-blocking contribute their edges (including the
//! closing edge from last to first vertex) to collision checks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Point;

fn default_true() -> bool {
    true
}

/// A generic placed polygon obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapObject {
    pub id: Uuid,
    /// Placement position in world units
    pub position: Point,
    /// Polygon vertices relative to `position`
    pub bounds: Vec<Point>,
    /// Whether the collision detector treats this polygon as an obstacle
    #[serde(default = "default_true")]
    pub blocks_movement: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
}

impl MapObject {
    /// Create a new blocking object
    pub fn new(position: Point, bounds: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            bounds,
            blocks_movement: true,
            visible: true,
            locked: false,
        }
    }

    /// Polygon vertices translated to absolute world coordinates
    pub fn absolute_points(&self) -> Vec<Point> {
        self.bounds.iter().map(|p| *p + self.position).collect()
    }

    /// Apply a partial update, merging only the provided fields
    pub fn apply(&mut self, patch: ObjectPatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(bounds) = patch.bounds {
            self.bounds = bounds;
        }
        if let Some(blocks_movement) = patch.blocks_movement {
            self.blocks_movement = blocks_movement;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(locked) = patch.locked {
            self.locked = locked;
        }
    }
}

/// Partial object update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ObjectPatch {
    pub position: Option<Point>,
    pub bounds: Option<Vec<Point>>,
    pub blocks_movement: Option<bool>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
}
