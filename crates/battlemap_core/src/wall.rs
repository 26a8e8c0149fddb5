//! Wall entities
//!
//! A wall is an ordered polyline stored as a flat `[x1, y1, x2, y2, ...]`
//! array in world units. Consecutive point pairs form its collision edges.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{points_from_flat, LineSegment, Point};

fn default_true() -> bool {
    true
}

/// A wall polyline drawn on the map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub id: Uuid,
    /// Flat `[x1, y1, x2, y2, ...]` polyline in world units
    pub points: Vec<f32>,
    /// Whether the collision detector treats this wall's edges as obstacles
    #[serde(default = "default_true")]
    pub blocks_movement: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
}

impl Wall {
    /// Create a new wall from a flat point array
    pub fn new(points: Vec<f32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            blocks_movement: true,
            visible: true,
            locked: false,
        }
    }

    /// Polyline vertices as points (trailing unpaired value ignored)
    pub fn vertices(&self) -> Vec<Point> {
        points_from_flat(&self.points)
    }

    /// Collision edges between consecutive vertices
    ///
    /// Walls with fewer than two vertices contribute no edges.
    pub fn segments(&self) -> Vec<LineSegment> {
        let vertices = self.vertices();
        vertices
            .windows(2)
            .map(|pair| LineSegment::new(pair[0], pair[1]))
            .collect()
    }

    /// Apply a partial update, merging only the provided fields
    pub fn apply(&mut self, patch: WallPatch) {
        if let Some(points) = patch.points {
            self.points = points;
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

/// Partial wall update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct WallPatch {
    pub points: Option<Vec<f32>>,
    pub blocks_movement: Option<bool>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
}
