//! In-memory editor state for one open map
//!
//! Plain struct with explicit mutation functions; a rendering layer
//! observes changes through the return values rather than through any UI
//! framework's reactivity. Exactly one mutator (the local user) drives
//! this state, so there is no internal locking.

use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use crate::door::{Door, DoorPatch};
use crate::grid::GridConfig;
use crate::light::{Light, LightPatch};
use crate::map::{MapData, MapMetadata};
use crate::object::{MapObject, ObjectPatch};
use crate::wall::{Wall, WallPatch};

/// The kind of a map entity, used for lookup and removal reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Wall,
    Door,
    Object,
    Light,
}

/// Editor state: the entity collections plus selection and a modified flag
///
/// Invariant: every id in the selection references an existing entity;
/// removing an entity also removes it from the selection.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    map: MapData,
    grid: GridConfig,
    selected: HashSet<Uuid>,
    is_modified: bool,
}

impl EditorState {
    /// Create an empty editor state with default grid configuration
    pub fn new() -> Self {
        Self::default()
    }

    // --- Accessors ---

    pub fn metadata(&self) -> &MapMetadata {
        &self.map.metadata
    }

    pub fn walls(&self) -> &[Wall] {
        &self.map.walls
    }

    pub fn doors(&self) -> &[Door] {
        &self.map.doors
    }

    pub fn objects(&self) -> &[MapObject] {
        &self.map.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.map.lights
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Replace the grid configuration (configs are immutable values)
    pub fn set_grid(&mut self, grid: GridConfig) {
        self.grid = grid;
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn selected_ids(&self) -> &HashSet<Uuid> {
        &self.selected
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    /// Look up which collection an id belongs to, searching walls, doors,
    /// objects, then lights
    pub fn entity_kind(&self, id: Uuid) -> Option<EntityKind> {
        if self.map.walls.iter().any(|w| w.id == id) {
            Some(EntityKind::Wall)
        } else if self.map.doors.iter().any(|d| d.id == id) {
            Some(EntityKind::Door)
        } else if self.map.objects.iter().any(|o| o.id == id) {
            Some(EntityKind::Object)
        } else if self.map.lights.iter().any(|l| l.id == id) {
            Some(EntityKind::Light)
        } else {
            None
        }
    }

    // --- Entity CRUD ---

    /// Add a wall and mark the map modified
    pub fn add_wall(&mut self, wall: Wall) {
        self.map.walls.push(wall);
        self.is_modified = true;
    }

    /// Add a door and mark the map modified
    pub fn add_door(&mut self, door: Door) {
        self.map.doors.push(door);
        self.is_modified = true;
    }

    /// Add an object and mark the map modified
    pub fn add_object(&mut self, object: MapObject) {
        self.map.objects.push(object);
        self.is_modified = true;
    }

    /// Add a light and mark the map modified
    pub fn add_light(&mut self, light: Light) {
        self.map.lights.push(light);
        self.is_modified = true;
    }

    /// Merge fields into the matching wall
    ///
    /// Returns `false` (and leaves the modified flag untouched) when the id
    /// is unknown; a missed update is not an error.
    pub fn update_wall(&mut self, id: Uuid, patch: WallPatch) -> bool {
        match self.map.walls.iter_mut().find(|w| w.id == id) {
            Some(wall) => {
                wall.apply(patch);
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    /// Merge fields into the matching door (no-op on unknown id)
    pub fn update_door(&mut self, id: Uuid, patch: DoorPatch) -> bool {
        match self.map.doors.iter_mut().find(|d| d.id == id) {
            Some(door) => {
                door.apply(patch);
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    /// Merge fields into the matching object (no-op on unknown id)
    pub fn update_object(&mut self, id: Uuid, patch: ObjectPatch) -> bool {
        match self.map.objects.iter_mut().find(|o| o.id == id) {
            Some(object) => {
                object.apply(patch);
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    /// Merge fields into the matching light (no-op on unknown id)
    pub fn update_light(&mut self, id: Uuid, patch: LightPatch) -> bool {
        match self.map.lights.iter_mut().find(|l| l.id == id) {
            Some(light) => {
                light.apply(patch);
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    /// Remove an entity of any kind by id
    ///
    /// Searches walls, doors, objects, then lights, removes the first match
    /// and drops the id from the selection. The modified flag is only set
    /// when something was actually removed; an unknown id is a no-op.
    pub fn remove_object(&mut self, id: Uuid) -> Option<EntityKind> {
        let removed = if let Some(idx) = self.map.walls.iter().position(|w| w.id == id) {
            self.map.walls.remove(idx);
            Some(EntityKind::Wall)
        } else if let Some(idx) = self.map.doors.iter().position(|d| d.id == id) {
            self.map.doors.remove(idx);
            Some(EntityKind::Door)
        } else if let Some(idx) = self.map.objects.iter().position(|o| o.id == id) {
            self.map.objects.remove(idx);
            Some(EntityKind::Object)
        } else if let Some(idx) = self.map.lights.iter().position(|l| l.id == id) {
            self.map.lights.remove(idx);
            Some(EntityKind::Light)
        } else {
            None
        };

        if removed.is_some() {
            self.selected.remove(&id);
            self.is_modified = true;
        }
        removed
    }

    // --- Selection ---

    /// Select an entity, or clear the selection with `None`
    ///
    /// With `add_to_selection`, toggles the id's membership in the selection
    /// set; otherwise replaces the selection with the single id. Ids that
    /// reference no entity are ignored, keeping the selection consistent.
    pub fn select_object(&mut self, id: Option<Uuid>, add_to_selection: bool) {
        let Some(id) = id else {
            self.selected.clear();
            return;
        };
        if self.entity_kind(id).is_none() {
            return;
        }
        if add_to_selection {
            if !self.selected.remove(&id) {
                self.selected.insert(id);
            }
        } else {
            self.selected.clear();
            self.selected.insert(id);
        }
    }

    /// Replace the selection wholesale (unknown ids are dropped)
    pub fn select_objects(&mut self, ids: impl IntoIterator<Item = Uuid>) {
        self.selected = ids
            .into_iter()
            .filter(|id| self.entity_kind(*id).is_some())
            .collect();
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    // --- Lifecycle ---

    /// Clear all collections, selection, modification flag, and grid config
    ///
    /// Used when switching maps.
    pub fn reset_state(&mut self) {
        self.map = MapData::default();
        self.grid = GridConfig::default();
        self.selected.clear();
        self.is_modified = false;
    }

    /// Wholesale replace all collections and metadata
    ///
    /// Clears selection and the modified flag; the loaded data is the new
    /// baseline.
    pub fn load_map(&mut self, map: MapData) {
        debug!(
            walls = map.walls.len(),
            doors = map.doors.len(),
            objects = map.objects.len(),
            lights = map.lights.len(),
            "loading map into editor"
        );
        self.map = map;
        self.selected.clear();
        self.is_modified = false;
    }

    /// Clone the current map payload for saving/encoding
    pub fn snapshot(&self) -> MapData {
        self.map.clone()
    }

    /// Mark the current state as saved, clearing the modified flag
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }
}
