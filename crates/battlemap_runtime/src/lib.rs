//! Runtime-side map queries for battlemap
//!
//! The encounter runner calls [`check_wall_collision`] before committing a
//! token's position change; on `true` the move is rejected locally without
//! a network round-trip.

mod collision;

pub use collision::{
    check_wall_collision, segment_hits_polygon, segment_hits_polyline, segments_intersect,
};
