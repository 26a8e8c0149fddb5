//! Grid presentation and snapping
//!
//! `GridConfig` holds snap/visibility behavior only; it is not persisted as
//! map data. The config is treated as an immutable value: the `with_*`
//! setters return a new config rather than mutating a shared reference.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

fn default_true() -> bool {
    true
}

fn default_cell_size() -> f32 {
    50.0
}

fn default_grid_color() -> String {
    "#cccccc".to_string()
}

fn default_grid_opacity() -> f32 {
    0.4
}

/// Grid rendering and snap configuration for the open map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Whether grid lines are drawn at all
    #[serde(default = "default_true")]
    pub visible: bool,
    /// World units per grid cell
    #[serde(default = "default_cell_size")]
    pub world_units_per_cell: f32,
    /// Line color (hex, e.g. "#cccccc")
    #[serde(default = "default_grid_color")]
    pub color: String,
    /// Whether points snap to grid multiples while editing
    #[serde(default = "default_true")]
    pub snap: bool,
    /// Line opacity (0..1)
    #[serde(default = "default_grid_opacity")]
    pub opacity: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            visible: true,
            world_units_per_cell: default_cell_size(),
            color: default_grid_color(),
            snap: true,
            opacity: default_grid_opacity(),
        }
    }
}

/// Grid line world coordinates intersecting a viewport
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    pub vertical: Vec<f32>,
    pub horizontal: Vec<f32>,
}

impl GridConfig {
    /// Returns a copy with snapping toggled
    pub fn with_snap(&self, snap: bool) -> Self {
        Self { snap, ..self.clone() }
    }

    /// Returns a copy with visibility toggled
    pub fn with_visible(&self, visible: bool) -> Self {
        Self {
            visible,
            ..self.clone()
        }
    }

    /// Returns a copy with a new cell size
    pub fn with_cell_size(&self, world_units_per_cell: f32) -> Self {
        Self {
            world_units_per_cell,
            ..self.clone()
        }
    }

    /// Snap a world point to the nearest grid multiple
    ///
    /// Returns the input unchanged when snapping is disabled.
    pub fn snap_to_grid(&self, point: Point) -> Point {
        if !self.snap {
            return point;
        }
        let cell = self.world_units_per_cell;
        Point::new((point.x / cell).round() * cell, (point.y / cell).round() * cell)
    }

    /// Snap a flat `[x1, y1, x2, y2, ...]` polyline pairwise
    ///
    /// Array length and pairing are preserved; a trailing unpaired value is
    /// passed through untouched.
    pub fn snap_points_to_grid(&self, points: &[f32]) -> Vec<f32> {
        if !self.snap {
            return points.to_vec();
        }
        let mut snapped = Vec::with_capacity(points.len());
        for pair in points.chunks(2) {
            if pair.len() == 2 {
                let p = self.snap_to_grid(Point::new(pair[0], pair[1]));
                snapped.push(p.x);
                snapped.push(p.y);
            } else {
                snapped.push(pair[0]);
            }
        }
        snapped
    }

    /// Enumerate the grid-line world coordinates crossing a viewport
    ///
    /// Only lines intersecting the viewport rectangle are returned, stepping
    /// by cell size from the first line at or past the viewport edge. This
    /// bounds rendering cost to visible lines regardless of total map size.
    /// Returns empty arrays when the grid is not visible.
    pub fn grid_lines(
        &self,
        viewport_width: f32,
        viewport_height: f32,
        viewport_offset_x: f32,
        viewport_offset_y: f32,
        grid_offset: Point,
    ) -> GridLines {
        if !self.visible {
            return GridLines::default();
        }
        let cell = self.world_units_per_cell;
        if cell <= 0.0 {
            return GridLines::default();
        }

        let vertical = line_positions(viewport_offset_x, viewport_width, cell, grid_offset.x);
        let horizontal = line_positions(viewport_offset_y, viewport_height, cell, grid_offset.y);
        GridLines { vertical, horizontal }
    }
}

/// Line coordinates in `[start, start + extent]` on one axis
fn line_positions(start: f32, extent: f32, cell: f32, offset: f32) -> Vec<f32> {
    let mut lines = Vec::new();
    let first = ((start - offset) / cell).ceil() as i64;
    let mut index = first;
    loop {
        let position = offset + index as f32 * cell;
        if position > start + extent {
            break;
        }
        lines.push(position);
        index += 1;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_grid() {
        let grid = GridConfig::default();
        assert_eq!(grid.snap_to_grid(Point::new(37.0, 60.0)), Point::new(50.0, 50.0));
        assert_eq!(grid.snap_to_grid(Point::new(-30.0, 24.9)), Point::new(-50.0, 0.0));
    }

    #[test]
    fn test_snap_is_idempotent() {
        let grid = GridConfig::default();
        let once = grid.snap_to_grid(Point::new(123.4, -67.8));
        assert_eq!(grid.snap_to_grid(once), once);
    }

    #[test]
    fn test_snap_disabled_returns_input() {
        let grid = GridConfig::default().with_snap(false);
        let p = Point::new(37.0, 60.0);
        assert_eq!(grid.snap_to_grid(p), p);
    }

    #[test]
    fn test_snap_points_preserves_pairing() {
        let grid = GridConfig::default();
        let snapped = grid.snap_points_to_grid(&[37.0, 60.0, 149.0, 0.0]);
        assert_eq!(snapped, vec![50.0, 50.0, 150.0, 0.0]);
    }

    #[test]
    fn test_grid_lines_cover_viewport() {
        let grid = GridConfig::default();
        let lines = grid.grid_lines(100.0, 100.0, 0.0, 0.0, Point::ZERO);
        assert_eq!(lines.vertical, vec![0.0, 50.0, 100.0]);
        assert_eq!(lines.horizontal, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_grid_lines_scrolled_viewport() {
        let grid = GridConfig::default();
        let lines = grid.grid_lines(100.0, 50.0, 60.0, 120.0, Point::ZERO);
        assert_eq!(lines.vertical, vec![100.0, 150.0]);
        assert_eq!(lines.horizontal, vec![150.0]);
    }

    #[test]
    fn test_grid_lines_honor_grid_offset() {
        let grid = GridConfig::default();
        let lines = grid.grid_lines(100.0, 100.0, 0.0, 0.0, Point::new(10.0, 0.0));
        assert_eq!(lines.vertical, vec![10.0, 60.0]);
    }

    #[test]
    fn test_grid_lines_hidden() {
        let grid = GridConfig::default().with_visible(false);
        let lines = grid.grid_lines(100.0, 100.0, 0.0, 0.0, Point::ZERO);
        assert!(lines.vertical.is_empty());
        assert!(lines.horizontal.is_empty());
    }
}
