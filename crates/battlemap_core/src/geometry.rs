//! Geometric primitives shared across the map model

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D coordinate
///
/// Whether the coordinate is in grid cells, world units, or pixels is
/// determined by context; a single call never mixes spaces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Distance to another point
    pub fn distance(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

/// A line segment between two points
///
/// Used both for token movement paths and for wall edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    /// Create a new segment
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Length of the segment in its coordinate space
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Whether the segment has zero extent (both endpoints equal)
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Collect a flat `[x1, y1, x2, y2, ...]` array into points
///
/// A trailing unpaired value is ignored.
pub fn points_from_flat(flat: &[f32]) -> Vec<Point> {
    flat.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect()
}

/// Flatten points back into a `[x1, y1, x2, y2, ...]` array
pub fn points_to_flat(points: &[Point]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}
