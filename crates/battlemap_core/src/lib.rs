//! Core data structures for battlemap
//!
//! This crate provides the fundamental types for representing VTT maps:
//! - `Point` / `LineSegment` - geometric primitives
//! - `Wall`, `Door`, `MapObject`, `Light` - the four entity kinds
//! - `MapMetadata` / `MapData` - coordinate descriptor and map payload
//! - `GridConfig` - snapping and grid-line enumeration
//! - `EditorState` - the in-memory entity store for one open map

pub mod coordinate;
mod door;
mod editor;
mod geometry;
mod grid;
mod light;
mod map;
mod object;
mod wall;

pub use door::{Door, DoorPatch};
pub use editor::{EditorState, EntityKind};
pub use geometry::{points_from_flat, points_to_flat, LineSegment, Point};
pub use grid::{GridConfig, GridLines};
pub use light::{Light, LightPatch};
pub use map::{ImageDimensions, MapData, MapDimensions, MapMetadata};
pub use object::{MapObject, ObjectPatch};
pub use wall::{Wall, WallPatch};
