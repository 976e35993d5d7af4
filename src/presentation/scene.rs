//! Presentation domain: level geometry, moving bodies and their transforms.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::gameplay::{ItemKind, PLAYER_NAME, SimEffect, Simulation, Skin};
use crate::level::{LevelDef, ObjectKind, Tuning, classify};

/// A drawn world object, keyed by its scene name.
#[derive(Component, Debug)]
pub struct SceneObject(pub String);

/// Shared materials for everything that changes colour at runtime.
#[derive(Resource, Debug)]
pub struct ScenePalette {
    used_block: Handle<StandardMaterial>,
    player_normal: Handle<StandardMaterial>,
    player_fire: Handle<StandardMaterial>,
    mushroom: Handle<StandardMaterial>,
    flower: Handle<StandardMaterial>,
    coin: Handle<StandardMaterial>,
}

impl ScenePalette {
    fn item(&self, kind: ItemKind) -> Handle<StandardMaterial> {
        match kind {
            ItemKind::Mushroom => self.mushroom.clone(),
            ItemKind::Flower => self.flower.clone(),
            ItemKind::Coin => self.coin.clone(),
        }
    }

    fn player(&self, skin: Skin) -> Handle<StandardMaterial> {
        match skin {
            Skin::Normal => self.player_normal.clone(),
            Skin::Fire => self.player_fire.clone(),
        }
    }
}

pub(super) fn piece_color(name: &str) -> Color {
    match classify(name) {
        ObjectKind::ObjectCube(_) => Color::srgb_u8(0xff, 0xcc, 0x00),
        ObjectKind::BrickCube(_) => Color::srgb_u8(0xb5, 0x65, 0x1d),
        ObjectKind::Goal => Color::srgb(0.85, 0.9, 0.85),
        ObjectKind::TeleportPipe => Color::srgb(0.1, 0.6, 0.15),
        _ if name.starts_with("Pipe") => Color::srgb(0.1, 0.6, 0.15),
        _ if name.starts_with("Ground") => Color::srgb(0.55, 0.35, 0.2),
        _ => Color::srgb(0.6, 0.55, 0.5),
    }
}

pub(crate) fn setup_scene(mut commands: Commands, mut materials: ResMut<Assets<StandardMaterial>>) {
    commands.insert_resource(ClearColor(Color::srgb(0.45, 0.7, 0.95)));

    // Front and top lights, both casting shadows
    commands.spawn((
        Name::new("FrontLight"),
        DirectionalLight {
            illuminance: 6_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 10.0, 50.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Name::new("TopLight"),
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 40.0, 0.1).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(ScenePalette {
        used_block: materials.add(Color::srgb_u8(0x89, 0x33, 0x18)),
        player_normal: materials.add(Color::srgb(0.85, 0.1, 0.1)),
        player_fire: materials.add(Color::srgb(0.95, 0.95, 0.95)),
        mushroom: materials.add(Color::srgb(0.9, 0.2, 0.2)),
        flower: materials.add(Color::srgb(1.0, 0.55, 0.1)),
        coin: materials.add(Color::srgb(1.0, 0.85, 0.1)),
    });
}

/// Rebuild every drawn object from level data. Runs on every entry to Title.
pub(crate) fn build_level(
    mut commands: Commands,
    level: Res<LevelDef>,
    tuning: Res<Tuning>,
    palette: Res<ScenePalette>,
    existing: Query<Entity, With<SceneObject>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    for piece in &level.pieces {
        commands.spawn((
            SceneObject(piece.name.clone()),
            Name::new(piece.name.clone()),
            Mesh3d(meshes.add(Cuboid::from_size(Vec3::from_array(piece.size)))),
            MeshMaterial3d(materials.add(piece_color(&piece.name))),
            Transform::from_translation(Vec3::from_array(piece.center)),
            Visibility::default(),
        ));
    }

    let enemy_mesh = meshes.add(Cuboid::from_length(tuning.movement.enemy_size));
    let enemy_material = materials.add(Color::srgb(0.45, 0.25, 0.1));
    for enemy in &level.enemies {
        commands.spawn((
            SceneObject(enemy.name.clone()),
            Name::new(enemy.name.clone()),
            Mesh3d(enemy_mesh.clone()),
            MeshMaterial3d(enemy_material.clone()),
            Transform::from_xyz(enemy.spawn_x, enemy.spawn_y, 0.0),
            Visibility::default(),
        ));
    }

    commands.spawn((
        SceneObject(PLAYER_NAME.to_string()),
        Name::new(PLAYER_NAME),
        Mesh3d(meshes.add(Cuboid::from_length(tuning.movement.player_size))),
        MeshMaterial3d(palette.player(Skin::Normal)),
        Transform::from_translation(Vec3::from_array(level.player_spawn))
            .with_scale(Vec3::splat(tuning.rules.small_scale)),
        Visibility::default(),
    ));

    info!(
        "Scene built: {} pieces, {} enemies",
        level.pieces.len(),
        level.enemies.len()
    );
}

/// Carry out the simulation's requests that touch drawn objects.
pub(crate) fn apply_scene_effects(
    mut commands: Commands,
    mut effects: MessageReader<SimEffect>,
    palette: Res<ScenePalette>,
    mut objects: Query<(
        Entity,
        &SceneObject,
        &mut Visibility,
        &mut MeshMaterial3d<StandardMaterial>,
    )>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    for effect in effects.read() {
        match effect {
            SimEffect::SpawnItem {
                name,
                kind,
                position,
                size,
            } => {
                commands.spawn((
                    SceneObject(name.clone()),
                    Name::new(name.clone()),
                    Mesh3d(meshes.add(Cuboid::from_length(*size))),
                    MeshMaterial3d(palette.item(*kind)),
                    Transform::from_translation(*position),
                    Visibility::default(),
                ));
            }
            SimEffect::Despawn(name) => {
                for (entity, object, _, _) in &objects {
                    if object.0 == *name {
                        commands.entity(entity).despawn();
                    }
                }
            }
            SimEffect::SetVisible { name, visible } => {
                for (_, object, mut visibility, _) in &mut objects {
                    if object.0 == *name {
                        *visibility = if *visible {
                            Visibility::Inherited
                        } else {
                            Visibility::Hidden
                        };
                    }
                }
            }
            SimEffect::MarkBlockUsed(name) => {
                for (_, object, _, mut material) in &mut objects {
                    if object.0 == *name {
                        material.0 = palette.used_block.clone();
                    }
                }
            }
            SimEffect::SetSkin(skin) => {
                for (_, object, _, mut material) in &mut objects {
                    if object.0 == PLAYER_NAME {
                        material.0 = palette.player(*skin);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Copy simulated poses onto transforms. Static pieces have no pose.
pub(crate) fn sync_poses(
    simulation: Res<Simulation>,
    mut objects: Query<(&SceneObject, &mut Transform)>,
) {
    for (object, mut transform) in &mut objects {
        let Some(pose) = simulation.pose_of(&object.0) else {
            continue;
        };
        transform.translation = pose.position;
        transform.scale = Vec3::splat(pose.scale);
        transform.rotation = Quat::from_rotation_x(pose.spin);
    }
}
