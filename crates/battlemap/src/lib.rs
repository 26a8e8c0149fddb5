//! # battlemap
//!
//! Map geometry and collision engine for virtual tabletops: a world-unit
//! entity model (walls, doors, objects, lights), grid snapping, movement
//! collision validation, and the UVTT interchange codec.
//!
//! ## Quick Start
//!
//! ```rust
//! use battlemap::prelude::*;
//!
//! let mut editor = EditorState::new();
//! editor.add_wall(Wall::new(vec![0.0, 0.0, 100.0, 0.0]));
//!
//! let map = editor.snapshot();
//! let blocked = check_wall_collision(
//!     Point::new(1.0, -1.0),
//!     Point::new(1.0, 1.0),
//!     Some(&map),
//! );
//! assert!(blocked);
//! ```
//!
//! ## Crate Structure
//!
//! This umbrella crate re-exports the battlemap_* sub-crates:
//!
//! - [`core`] - Entity model, coordinate system, grid, editor state
//! - [`runtime`] - Movement collision validation
//! - [`uvtt`] - UVTT/DD2VTT interchange codec

/// Entity model, coordinate conversion, grid snapping, and editor state.
pub mod core {
    pub use battlemap_core::*;
}

pub use battlemap_core::{
    Door, DoorPatch, EditorState, EntityKind, GridConfig, GridLines, ImageDimensions, Light,
    LightPatch, LineSegment, MapData, MapDimensions, MapMetadata, MapObject, ObjectPatch, Point,
    Wall, WallPatch,
};

/// Movement collision validation against map geometry.
pub mod runtime {
    pub use battlemap_runtime::*;
}

pub use battlemap_runtime::{check_wall_collision, segments_intersect};

/// UVTT/DD2VTT interchange codec.
pub mod uvtt {
    pub use battlemap_uvtt::*;
}

pub use battlemap_uvtt::{UvttDocument, UvttError, UvttFlavor};

/// Commonly used types and functions.
///
/// Import with:
/// ```rust
/// use battlemap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        check_wall_collision, Door, EditorState, GridConfig, Light, MapData, MapMetadata,
        MapObject, Point, Wall,
    };
    pub use crate::uvtt::{decode, encode, UvttDocument};
}
