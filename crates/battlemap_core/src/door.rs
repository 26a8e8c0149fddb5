//! Door/portal entities
//!
//! A door is a pivoting or sliding opening. `closed` gates whether it
//! currently blocks movement and vision; freestanding doors are decorative
//! openings not attached to a wall run and never block.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{LineSegment, Point};

fn default_true() -> bool {
    true
}

/// A door placed on the map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Door {
    pub id: Uuid,
    /// Pivot/center position in world units
    pub position: Point,
    /// Rotation in radians (presentation only)
    #[serde(default)]
    pub rotation: f32,
    /// Span endpoints in absolute world units
    pub bounds: Vec<Point>,
    /// Closed doors block movement; open doors are skipped
    #[serde(default = "default_true")]
    pub closed: bool,
    /// Freestanding doors are not attached to a wall run and never block
    #[serde(default)]
    pub freestanding: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
}

impl Door {
    /// Create a new closed, attached door
    pub fn new(position: Point, bounds: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            rotation: 0.0,
            bounds,
            closed: true,
            freestanding: false,
            visible: true,
            locked: false,
        }
    }

    /// Whether this door currently blocks movement
    pub fn is_blocking(&self) -> bool {
        self.closed && !self.freestanding
    }

    /// Blocking edges spanning the door bounds
    ///
    /// Consecutive bounds points form wall-equivalent segments; fewer than
    /// two points contribute no edges.
    pub fn edge_segments(&self) -> Vec<LineSegment> {
        self.bounds
            .windows(2)
            .map(|pair| LineSegment::new(pair[0], pair[1]))
            .collect()
    }

    /// Apply a partial update, merging only the provided fields
    pub fn apply(&mut self, patch: DoorPatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(bounds) = patch.bounds {
            self.bounds = bounds;
        }
        if let Some(closed) = patch.closed {
            self.closed = closed;
        }
        if let Some(freestanding) = patch.freestanding {
            self.freestanding = freestanding;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(locked) = patch.locked {
            self.locked = locked;
        }
    }
}

/// Partial door update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct DoorPatch {
    pub position: Option<Point>,
    pub rotation: Option<f32>,
    pub bounds: Option<Vec<Point>>,
    pub closed: Option<bool>,
    pub freestanding: Option<bool>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
}
