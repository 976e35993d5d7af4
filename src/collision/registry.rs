//! Collision domain: registry of collidable world objects.

use bevy::prelude::*;

use crate::collision::Aabb;

/// Geometry snapshot of one collidable object.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub name: String,
    pub bounds: Aabb,
}

/// Every box the player can hit this frame, kept in insertion order.
///
/// Names are unique. Inserting a name that is already present overwrites the
/// stored box in place (the entry keeps its iteration slot) and logs a
/// warning, since it points at duplicated level data.
#[derive(Debug, Clone, Default)]
pub struct BoundingVolumeRegistry {
    entries: Vec<RegistryEntry>,
}

impl BoundingVolumeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the name was not registered before.
    pub fn insert(&mut self, name: impl Into<String>, bounds: Aabb) -> bool {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            warn!("Duplicate collidable '{}' registered, overwriting", name);
            entry.bounds = bounds;
            return false;
        }
        self.entries.push(RegistryEntry { name, bounds });
        true
    }

    /// Removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        self.entries.len() != before
    }

    /// Replace the stored box for `name`. Absent names are ignored.
    pub fn refresh(&mut self, name: &str, bounds: Aabb) -> bool {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.bounds = bounds;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Aabb> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.bounds)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
