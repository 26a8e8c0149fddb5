//! Movement collision detection
//!
//! Pure segment-vs-geometry tests used by the encounter runner to validate
//! a token move before committing it. The same `(from, to, map)` triple
//! always yields the same boolean, so concurrent move proposals can be
//! validated without coordination as long as each reads a consistent
//! snapshot of the map data.

use battlemap_core::{LineSegment, MapData, Point};
use tracing::debug;

/// Cross-product orientation of `c` relative to the directed line `a -> b`
///
/// Positive and negative signs are opposite turn directions; zero means
/// collinear. Vertical and horizontal segments need no special-casing.
#[inline]
fn direction(a: Point, b: Point, c: Point) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Whether collinear point `c` lies within the bounding box of `a`-`b`
#[inline]
fn on_segment(a: Point, b: Point, c: Point) -> bool {
    c.x >= a.x.min(b.x) && c.x <= a.x.max(b.x) && c.y >= a.y.min(b.y) && c.y <= a.y.max(b.y)
}

/// Test whether segments `(p1, p2)` and `(p3, p4)` intersect
///
/// Proper crossings are detected by opposite orientation signs on both
/// segments; collinear touches (zero cross product) fall back to an
/// on-segment containment check, so a movement segment that exactly
/// touches a wall endpoint counts as a collision.
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = direction(p3, p4, p1);
    let d2 = direction(p3, p4, p2);
    let d3 = direction(p1, p2, p3);
    let d4 = direction(p1, p2, p4);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(p3, p4, p1))
        || (d2 == 0.0 && on_segment(p3, p4, p2))
        || (d3 == 0.0 && on_segment(p1, p2, p3))
        || (d4 == 0.0 && on_segment(p1, p2, p4))
}

/// Test a movement segment against consecutive polyline edges (no closing edge)
///
/// Polylines with fewer than two vertices have no edges and never collide.
pub fn segment_hits_polyline(from: Point, to: Point, vertices: &[Point]) -> bool {
    vertices.windows(2).any(|pair| {
        if pair[0] == pair[1] {
            return false;
        }
        segments_intersect(from, to, pair[0], pair[1])
    })
}

/// Test a movement segment against polygon edges, including the wrap-around
/// edge from the last vertex back to the first
pub fn segment_hits_polygon(from: Point, to: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 2 {
        return false;
    }
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        if a == b {
            continue;
        }
        if segments_intersect(from, to, a, b) {
            return true;
        }
    }
    false
}

fn segment_hits(from: Point, to: Point, segment: &LineSegment) -> bool {
    !segment.is_degenerate() && segments_intersect(from, to, segment.start, segment.end)
}

/// Validate a proposed token move against a map's blocking geometry
///
/// Grid endpoints are converted to world units through the map's
/// scale/offset, then the movement segment is tested against every
/// movement-blocking wall edge, every blocking object polygon edge, and
/// the edges of closed non-freestanding doors. Returns `true` on the
/// first intersection found, with no ordering guarantee on which wall
/// reports first.
///
/// Fails open: absent map data never blocks movement. Callers requiring
/// strict validation must pre-check data presence separately.
pub fn check_wall_collision(from_grid: Point, to_grid: Point, map: Option<&MapData>) -> bool {
    let Some(map) = map else {
        debug!("no map geometry available, allowing move");
        return false;
    };

    let from = map.metadata.grid_to_world(from_grid);
    let to = map.metadata.grid_to_world(to_grid);

    for wall in &map.walls {
        if !wall.blocks_movement {
            continue;
        }
        if wall.segments().iter().any(|s| segment_hits(from, to, s)) {
            return true;
        }
    }

    for door in &map.doors {
        if !door.is_blocking() {
            continue;
        }
        if door.edge_segments().iter().any(|s| segment_hits(from, to, s)) {
            return true;
        }
    }

    for object in &map.objects {
        if !object.blocks_movement {
            continue;
        }
        if segment_hits_polygon(from, to, &object.absolute_points()) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use battlemap_core::{Door, MapMetadata, MapObject, Wall};

    /// Map whose grid coordinates equal world coordinates
    fn unit_map() -> MapData {
        MapData::new(MapMetadata {
            world_units_per_grid_cell: 1.0,
            ..Default::default()
        })
    }

    fn map_with_wall() -> MapData {
        let mut map = unit_map();
        map.walls.push(Wall::new(vec![0.0, 0.0, 10.0, 0.0]));
        map
    }

    #[test]
    fn test_crossing_movement_collides() {
        let map = map_with_wall();
        assert!(check_wall_collision(
            Point::new(5.0, -5.0),
            Point::new(5.0, 5.0),
            Some(&map)
        ));
    }

    #[test]
    fn test_parallel_movement_does_not_collide() {
        let map = map_with_wall();
        assert!(!check_wall_collision(
            Point::new(5.0, 5.0),
            Point::new(15.0, 5.0),
            Some(&map)
        ));
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let (p1, p2) = (Point::new(5.0, -5.0), Point::new(5.0, 5.0));
        let (p3, p4) = (Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let expected = segments_intersect(p1, p2, p3, p4);
        assert_eq!(segments_intersect(p2, p1, p3, p4), expected);
        assert_eq!(segments_intersect(p1, p2, p4, p3), expected);
        assert_eq!(segments_intersect(p3, p4, p1, p2), expected);
    }

    #[test]
    fn test_parallel_non_overlapping_segments() {
        assert!(!segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(10.0, 1.0),
        ));
    }

    #[test]
    fn test_endpoint_touch_counts_as_collision() {
        // Movement ends exactly on a wall endpoint
        assert!(segments_intersect(
            Point::new(10.0, -5.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        ));
        // Collinear overlap
        assert!(segments_intersect(
            Point::new(5.0, 0.0),
            Point::new(15.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        ));
    }

    #[test]
    fn test_collinear_disjoint_segments_do_not_collide() {
        assert!(!segments_intersect(
            Point::new(11.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        ));
    }

    #[test]
    fn test_polyline_has_no_closing_edge() {
        // Open L-shape: crossing where the closing edge would be is free
        let vertices = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
        assert!(segment_hits_polyline(
            Point::new(5.0, -5.0),
            Point::new(5.0, 5.0),
            &vertices
        ));
        assert!(!segment_hits_polyline(
            Point::new(2.0, 8.0),
            Point::new(8.0, 2.0),
            &vertices
        ));
        assert!(segment_hits_polygon(
            Point::new(2.0, 8.0),
            Point::new(8.0, 2.0),
            &vertices
        ));
    }

    #[test]
    fn test_missing_map_fails_open() {
        assert!(!check_wall_collision(
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            None
        ));
    }

    #[test]
    fn test_non_blocking_wall_is_ignored() {
        let mut map = map_with_wall();
        map.walls[0].blocks_movement = false;
        assert!(!check_wall_collision(
            Point::new(5.0, -5.0),
            Point::new(5.0, 5.0),
            Some(&map)
        ));
    }

    #[test]
    fn test_zero_length_wall_never_collides() {
        let mut map = unit_map();
        map.walls.push(Wall::new(vec![5.0, 5.0]));
        map.walls.push(Wall::new(vec![3.0, 3.0, 3.0, 3.0]));
        assert!(!check_wall_collision(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Some(&map)
        ));
    }

    #[test]
    fn test_closed_door_blocks() {
        let mut map = unit_map();
        map.doors.push(Door::new(
            Point::new(5.0, 0.0),
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        ));
        assert!(check_wall_collision(
            Point::new(5.0, -5.0),
            Point::new(5.0, 5.0),
            Some(&map)
        ));
    }

    #[test]
    fn test_open_door_is_skipped() {
        let mut map = unit_map();
        let mut door = Door::new(
            Point::new(5.0, 0.0),
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        );
        door.closed = false;
        map.doors.push(door);
        assert!(!check_wall_collision(
            Point::new(5.0, -5.0),
            Point::new(5.0, 5.0),
            Some(&map)
        ));
    }

    #[test]
    fn test_closed_freestanding_door_is_skipped() {
        let mut map = unit_map();
        let mut door = Door::new(
            Point::new(5.0, 0.0),
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        );
        door.freestanding = true;
        map.doors.push(door);
        assert!(!check_wall_collision(
            Point::new(5.0, -5.0),
            Point::new(5.0, 5.0),
            Some(&map)
        ));
    }

    #[test]
    fn test_object_polygon_blocks_including_closing_edge() {
        let mut map = unit_map();
        // Triangle at (20, 20); the closing edge runs from (30, 30) back
        // to (20, 20)
        map.objects.push(MapObject::new(
            Point::new(20.0, 20.0),
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
        ));
        // Crosses only the closing (hypotenuse) edge
        assert!(check_wall_collision(
            Point::new(20.0, 25.0),
            Point::new(29.0, 22.0),
            Some(&map)
        ));
        // Far away from the polygon
        assert!(!check_wall_collision(
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Some(&map)
        ));
    }

    #[test]
    fn test_non_blocking_object_is_ignored() {
        let mut map = unit_map();
        let mut object = MapObject::new(
            Point::new(0.0, 0.0),
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
        );
        object.blocks_movement = false;
        map.objects.push(object);
        assert!(!check_wall_collision(
            Point::new(5.0, -5.0),
            Point::new(5.0, 5.0),
            Some(&map)
        ));
    }

    #[test]
    fn test_degenerate_object_never_panics() {
        let mut map = unit_map();
        map.objects.push(MapObject::new(Point::new(5.0, 5.0), Vec::new()));
        map.objects.push(MapObject::new(Point::new(5.0, 5.0), vec![Point::ZERO]));
        assert!(!check_wall_collision(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Some(&map)
        ));
    }

    #[test]
    fn test_grid_coordinates_are_scaled() {
        // With a 50-unit grid, cells (0,0) -> (2,2) become world
        // (0,0) -> (100,100), crossing a wall at y=50
        let mut map = MapData::default();
        map.walls.push(Wall::new(vec![0.0, 50.0, 200.0, 50.0]));
        assert!(check_wall_collision(
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Some(&map)
        ));
    }
}
