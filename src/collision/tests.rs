//! Collision domain: tests for boxes, the registry and contact resolution.

use bevy::math::Vec3;

use super::{
    Aabb, BoundingVolumeRegistry, ContactSide, DominantAxis, check_collisions, contacts_with,
    dominant_axis,
};

fn unit_box(center: Vec3) -> Aabb {
    Aabb::from_center_size(center, Vec3::ONE)
}

// -----------------------------------------------------------------------------
// Aabb tests
// -----------------------------------------------------------------------------

#[test]
fn test_aabb_from_center_size() {
    let b = Aabb::from_center_size(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(b.min, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(b.max, Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(b.center(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(b.size(), Vec3::new(2.0, 4.0, 6.0));
}

#[test]
fn test_aabb_touching_faces_intersect() {
    let a = unit_box(Vec3::ZERO);
    let b = unit_box(Vec3::new(1.0, 0.0, 0.0));
    assert!(a.intersects(&b));
    assert_eq!(a.intersection(&b).size().x, 0.0);
}

#[test]
fn test_aabb_separated_boxes_do_not_intersect() {
    let a = unit_box(Vec3::ZERO);
    for offset in [Vec3::X * 1.5, Vec3::NEG_Y * 2.0, Vec3::Z * 1.01] {
        assert!(!a.intersects(&unit_box(offset)));
    }
}

// -----------------------------------------------------------------------------
// Registry tests
// -----------------------------------------------------------------------------

#[test]
fn test_registry_preserves_insertion_order() {
    let mut registry = BoundingVolumeRegistry::new();
    registry.insert("Ground_1", unit_box(Vec3::ZERO));
    registry.insert("ObjectCube_2", unit_box(Vec3::Y * 3.0));
    registry.insert("Enemy1", unit_box(Vec3::X * 5.0));

    let names: Vec<&str> = registry.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Ground_1", "ObjectCube_2", "Enemy1"]);
}

#[test]
fn test_registry_duplicate_insert_overwrites_in_place() {
    let mut registry = BoundingVolumeRegistry::new();
    assert!(registry.insert("A", unit_box(Vec3::ZERO)));
    assert!(registry.insert("B", unit_box(Vec3::X)));
    assert!(!registry.insert("A", unit_box(Vec3::Y * 10.0)));

    assert_eq!(registry.len(), 2);
    let first = registry.iter().next().unwrap();
    assert_eq!(first.name, "A");
    assert_eq!(first.bounds.center(), Vec3::Y * 10.0);
}

#[test]
fn test_registry_remove_and_refresh_absent_are_noops() {
    let mut registry = BoundingVolumeRegistry::new();
    registry.insert("A", unit_box(Vec3::ZERO));

    assert!(!registry.remove("Missing"));
    assert!(!registry.refresh("Missing", unit_box(Vec3::ONE)));
    assert_eq!(registry.len(), 1);

    assert!(registry.refresh("A", unit_box(Vec3::ONE)));
    assert_eq!(registry.get("A").unwrap().center(), Vec3::ONE);

    assert!(registry.remove("A"));
    assert!(registry.is_empty());
    assert!(!registry.contains("A"));
}

// -----------------------------------------------------------------------------
// Resolver tests
// -----------------------------------------------------------------------------

#[test]
fn test_dominant_axis_picks_smallest_extent() {
    assert_eq!(dominant_axis(1.0, 0.2, 1.0), DominantAxis::Height);
    assert_eq!(dominant_axis(0.1, 0.2, 1.0), DominantAxis::Width);
    assert_eq!(dominant_axis(0.5, 0.2, 0.1), DominantAxis::Depth);
}

#[test]
fn test_dominant_axis_tie_break_order() {
    assert_eq!(dominant_axis(0.2, 0.2, 0.2), DominantAxis::Height);
    assert_eq!(dominant_axis(0.1, 0.5, 0.1), DominantAxis::Width);
    assert_eq!(dominant_axis(0.3, 0.1, 0.1), DominantAxis::Height);
}

#[test]
fn test_no_contact_for_separated_boxes() {
    let mut out = Vec::new();
    contacts_with(
        &unit_box(Vec3::ZERO),
        "Far",
        &unit_box(Vec3::new(0.0, 5.0, 0.0)),
        &mut out,
    );
    assert!(out.is_empty());
}

#[test]
fn test_landing_on_top_reports_top_with_push_distance() {
    let ground = Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0));
    // Body sunk 0.1 into the ground
    let body = Aabb::from_center_size(Vec3::new(0.0, 0.4, 0.0), Vec3::ONE);

    let mut out = Vec::new();
    contacts_with(&body, "Ground", &ground, &mut out);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].side, ContactSide::Top);
    assert!((out[0].distance - 0.1).abs() < 1e-5);
}

#[test]
fn test_hitting_from_below_reports_bottom() {
    let block = unit_box(Vec3::new(0.0, 3.0, 0.0));
    let body = Aabb::from_center_size(Vec3::new(0.0, 2.4, 0.0), Vec3::new(0.5, 0.5, 0.5));

    let mut out = Vec::new();
    contacts_with(&body, "ObjectCube_2", &block, &mut out);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].side, ContactSide::Bottom);
    assert!((out[0].distance - 0.15).abs() < 1e-5);
}

#[test]
fn test_height_dominant_never_reports_horizontal_sides() {
    let wall = unit_box(Vec3::ZERO);
    // Shallow in y, deep in x and z
    let body = Aabb::from_center_size(Vec3::new(0.2, 0.95, 0.0), Vec3::ONE);

    let mut out = Vec::new();
    contacts_with(&body, "Wall", &wall, &mut out);

    assert!(!out.is_empty());
    assert!(
        out.iter()
            .all(|c| matches!(c.side, ContactSide::Top | ContactSide::Bottom))
    );
}

#[test]
fn test_side_contacts_for_width_dominant() {
    let pipe = Aabb::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(2.0, 4.0, 1.0));

    // Walking into the pipe from the left
    let from_left = Aabb::from_center_size(Vec3::new(-0.2, 1.0, 0.0), Vec3::new(0.5, 0.5, 0.5));
    let mut out = Vec::new();
    contacts_with(&from_left, "Pipe_4", &pipe, &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].side, ContactSide::Left);
    assert!((out[0].distance - 0.05).abs() < 1e-5);

    // Walking into the pipe from the right
    let from_right = Aabb::from_center_size(Vec3::new(2.2, 1.0, 0.0), Vec3::new(0.5, 0.5, 0.5));
    out.clear();
    contacts_with(&from_right, "Pipe_4", &pipe, &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].side, ContactSide::Right);
    assert!((out[0].distance - 0.05).abs() < 1e-5);
}

#[test]
fn test_depth_dominant_reports_front_or_back() {
    let slab = Aabb::new(Vec3::new(-5.0, -5.0, 0.0), Vec3::new(5.0, 5.0, 1.0));
    let body = Aabb::from_center_size(Vec3::new(0.0, 0.0, 1.2), Vec3::ONE);

    let mut out = Vec::new();
    contacts_with(&body, "Slab", &slab, &mut out);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].side, ContactSide::Front);
    assert!((out[0].distance - 0.3).abs() < 1e-5);
}

#[test]
fn test_check_collisions_follows_registry_order() {
    let mut registry = BoundingVolumeRegistry::new();
    registry.insert("Second", unit_box(Vec3::new(0.0, -0.9, 0.0)));
    registry.insert("Unrelated", unit_box(Vec3::new(50.0, 0.0, 0.0)));
    registry.insert("First", unit_box(Vec3::new(0.0, 0.9, 0.0)));

    let body = unit_box(Vec3::ZERO);
    let contacts = check_collisions(&body, &registry);

    let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Second", "First"]);
    assert_eq!(contacts[0].side, ContactSide::Top);
    assert_eq!(contacts[1].side, ContactSide::Bottom);
}
