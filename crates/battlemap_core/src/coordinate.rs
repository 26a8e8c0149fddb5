//! Grid-to-world coordinate conversion
//!
//! Pure conversion functions parameterized by a per-map scale (world units
//! per grid cell) and an origin offset. All persisted positions are world
//! units; grid coordinates appear only at call boundaries (token movement
//! requests, cell indexing).

use crate::geometry::Point;

/// Convert a grid coordinate to world units
///
/// `world = offset + grid * scale`
#[inline]
pub fn grid_to_world(grid: Point, scale: f32, offset: Point) -> Point {
    Point::new(offset.x + grid.x * scale, offset.y + grid.y * scale)
}

/// Convert a world coordinate to a grid cell index
///
/// Components are floored, so any point inside a cell maps to that cell's
/// index. Use [`world_to_grid_exact`] for continuous (snapping) conversion.
#[inline]
pub fn world_to_grid(world: Point, scale: f32, offset: Point) -> Point {
    Point::new(
        ((world.x - offset.x) / scale).floor(),
        ((world.y - offset.y) / scale).floor(),
    )
}

/// Convert a world coordinate to continuous grid space (no flooring)
#[inline]
pub fn world_to_grid_exact(world: Point, scale: f32, offset: Point) -> Point {
    Point::new((world.x - offset.x) / scale, (world.y - offset.y) / scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_grid_to_world() {
        let world = grid_to_world(Point::new(3.0, 4.0), 50.0, Point::new(10.0, 20.0));
        assert_eq!(world, Point::new(160.0, 220.0));
    }

    #[test]
    fn test_round_trip_integral_grid_points() {
        let cases = [
            (1.0, Point::ZERO),
            (50.0, Point::ZERO),
            (50.0, Point::new(25.0, -13.0)),
            (2.5, Point::new(-100.0, 7.5)),
        ];
        for (scale, offset) in cases {
            for gx in -3..=3 {
                for gy in -3..=3 {
                    let grid = Point::new(gx as f32, gy as f32);
                    let back = world_to_grid(grid_to_world(grid, scale, offset), scale, offset);
                    assert_close(back, grid);
                }
            }
        }
    }

    #[test]
    fn test_world_to_grid_floors_within_cell() {
        let offset = Point::ZERO;
        // Anywhere inside cell (2, 1) maps to (2, 1)
        assert_eq!(
            world_to_grid(Point::new(149.9, 99.9), 50.0, offset),
            Point::new(2.0, 1.0)
        );
        // Negative world coordinates floor toward negative infinity
        assert_eq!(
            world_to_grid(Point::new(-0.1, -50.1), 50.0, offset),
            Point::new(-1.0, -2.0)
        );
    }

    #[test]
    fn test_world_to_grid_exact_keeps_fraction() {
        let grid = world_to_grid_exact(Point::new(75.0, 25.0), 50.0, Point::ZERO);
        assert_close(grid, Point::new(1.5, 0.5));
    }
}
