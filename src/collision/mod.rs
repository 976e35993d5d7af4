//! Collision domain: bounding volumes, the collidable registry and contact resolution.

mod aabb;
mod registry;
mod resolver;

#[cfg(test)]
mod tests;

pub use aabb::Aabb;
pub use registry::{BoundingVolumeRegistry, RegistryEntry};
pub use resolver::{
    Contact, ContactSide, DominantAxis, check_collisions, contacts_with, dominant_axis,
};
