//! Collision domain: contact classification for a moving body.

use crate::collision::{Aabb, BoundingVolumeRegistry};

/// Face of the obstacle the body is resting against / pushing into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactSide {
    /// Body is above the obstacle.
    Top,
    /// Body is below the obstacle.
    Bottom,
    /// Body overlaps the obstacle's low-x face.
    Left,
    /// Body overlaps the obstacle's high-x face.
    Right,
    /// Body overlaps the obstacle's high-z face.
    Front,
    /// Body overlaps the obstacle's low-z face.
    Back,
}

/// Axis with the shallowest penetration for one obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantAxis {
    Height,
    Width,
    Depth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub side: ContactSide,
    /// Push-out distance along the contact axis, never negative for a real overlap.
    pub distance: f32,
}

/// Pick the smallest extent. Ties resolve height, then width, then depth.
pub fn dominant_axis(width: f32, height: f32, depth: f32) -> DominantAxis {
    let min = width.min(height).min(depth);
    if min == height {
        DominantAxis::Height
    } else if min == width {
        DominantAxis::Width
    } else {
        DominantAxis::Depth
    }
}

/// Contacts produced by one obstacle, appended to `out`.
pub fn contacts_with(body: &Aabb, name: &str, obstacle: &Aabb, out: &mut Vec<Contact>) {
    if !body.intersects(obstacle) {
        return;
    }

    let extents = obstacle.intersection(body).size();
    let mut push = |side: ContactSide, distance: f32| {
        out.push(Contact {
            name: name.to_string(),
            side,
            distance,
        })
    };

    match dominant_axis(extents.x, extents.y, extents.z) {
        DominantAxis::Height => {
            if body.max.y > obstacle.max.y {
                push(ContactSide::Top, obstacle.max.y - body.min.y);
            } else if body.min.y < obstacle.min.y {
                push(ContactSide::Bottom, body.max.y - obstacle.min.y);
            }
        }
        DominantAxis::Width => {
            if body.max.x > obstacle.max.x {
                push(ContactSide::Right, obstacle.max.x - body.min.x);
            }
            if body.min.x < obstacle.min.x {
                push(ContactSide::Left, body.max.x - obstacle.min.x);
            }
        }
        DominantAxis::Depth => {
            if body.max.z > obstacle.max.z {
                push(ContactSide::Front, obstacle.max.z - body.min.z);
            }
            if body.min.z < obstacle.min.z {
                push(ContactSide::Back, body.max.z - obstacle.min.z);
            }
        }
    }
}

/// All contacts of `body` against the registry, in registry order.
pub fn check_collisions(body: &Aabb, registry: &BoundingVolumeRegistry) -> Vec<Contact> {
    let mut contacts = Vec::new();
    for entry in registry.iter() {
        contacts_with(body, &entry.name, &entry.bounds, &mut contacts);
    }
    contacts
}
