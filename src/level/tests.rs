//! Level domain: unit tests for name classification and data loading.

use std::path::Path;

use super::*;

fn piece(name: &str) -> PieceDef {
    PieceDef {
        name: name.to_string(),
        center: [0.0, 0.0, 0.0],
        size: [1.0, 1.0, 1.0],
    }
}

fn minimal_level() -> LevelDef {
    LevelDef {
        schema_version: 1,
        player_spawn: [0.0, 10.0, 0.0],
        pieces: vec![piece("Ground_1"), piece("FlagPole")],
        enemies: vec![],
        win: WinPathDef::default(),
        teleport: TeleportPathDef::default(),
    }
}

#[test]
fn test_classify_indexed_names() {
    assert_eq!(classify("ObjectCube_2"), ObjectKind::ObjectCube(2));
    assert_eq!(classify("BrickCube_30"), ObjectKind::BrickCube(30));
    assert_eq!(classify("MushroomCube_0"), ObjectKind::MushroomCube(0));
    assert_eq!(classify("FlowerCube_7"), ObjectKind::FlowerCube(7));
    assert_eq!(classify("CoinCube_99"), ObjectKind::CoinCube(99));
    assert_eq!(classify("Enemy11"), ObjectKind::Enemy(11));
}

#[test]
fn test_classify_fixed_names() {
    assert_eq!(classify("FlagPole"), ObjectKind::Goal);
    assert_eq!(classify("FlagSphere"), ObjectKind::Goal);
    assert_eq!(classify(TELEPORT_PIPE), ObjectKind::TeleportPipe);
    assert_eq!(classify("Pipe_1"), ObjectKind::Scenery);
    assert_eq!(classify("Ground_3"), ObjectKind::Scenery);
}

#[test]
fn test_classify_rejects_malformed_names() {
    assert_eq!(classify("ObjectCube_"), ObjectKind::Scenery);
    assert_eq!(classify("ObjectCube_100"), ObjectKind::Scenery);
    assert_eq!(classify("ObjectCube_2a"), ObjectKind::Scenery);
    assert_eq!(classify("ObjectCube2"), ObjectKind::Scenery);
    assert_eq!(classify("objectcube_2"), ObjectKind::Scenery);
    assert_eq!(classify("Enemy_1"), ObjectKind::Scenery);
    assert_eq!(classify("CoinCube_+1"), ObjectKind::Scenery);
    assert_eq!(classify(""), ObjectKind::Scenery);
}

#[test]
fn test_item_kinds() {
    assert!(classify("CoinCube_3").is_item());
    assert!(!classify("ObjectCube_3").is_item());
}

#[test]
fn test_valid_level_has_no_problems() {
    assert!(validate_level(&minimal_level()).is_empty());
}

#[test]
fn test_validation_reports_every_problem() {
    let mut level = minimal_level();
    level.pieces = vec![piece("Ground_1"), piece("Ground_1")];
    level.pieces[1].size = [1.0, 0.0, 1.0];
    level.enemies.push(EnemyDef {
        name: "Enemy1".to_string(),
        spawn_x: 0.0,
        spawn_y: 2.524,
        speed: 1.0,
        max_distance: 0.0,
    });

    let problems = validate_level(&level);
    assert!(problems.contains(&LevelValidationError::DuplicateName("Ground_1".to_string())));
    assert!(problems.contains(&LevelValidationError::NonPositiveSize("Ground_1".to_string())));
    assert!(problems.contains(&LevelValidationError::InvalidEnemyRange("Enemy1".to_string())));
    assert!(problems.contains(&LevelValidationError::MissingGoal));
}

#[test]
fn test_parse_level_with_defaults() {
    let text = r#"(
        schema_version: 1,
        player_spawn: (-100.0, 10.0, 0.0),
        pieces: [
            (name: "Ground_1", center: (0.0, 0.0, 0.0), size: (10.0, 1.0, 4.0)),
            (name: "FlagPole", center: (4.0, 5.0, 0.0), size: (0.2, 10.0, 0.2)),
        ],
        enemies: [
            (name: "Enemy1", spawn_x: -82.0, speed: 1.0, max_distance: 1.0),
        ],
    )"#;

    let level: LevelDef = match parse_ron("level.ron", text) {
        Ok(level) => level,
        Err(e) => panic!("{}", e),
    };
    assert_eq!(level.pieces.len(), 2);
    assert_eq!(level.enemies[0].spawn_y, 2.524);
    assert_eq!(level.win.walk_x, 120.5);
    assert_eq!(level.teleport.exit_x, 75.4);
    assert!(validate_level(&level).is_empty());
}

#[test]
fn test_parse_partial_tuning() {
    let text = "(movement: (jump_speed: 0.5), rules: (damage_cooldown_ms: 1000.0))";
    let tuning: Tuning = match parse_ron("tuning.ron", text) {
        Ok(tuning) => tuning,
        Err(e) => panic!("{}", e),
    };
    assert_eq!(tuning.movement.jump_speed, 0.5);
    assert_eq!(tuning.movement.base_gravity, 0.015);
    assert_eq!(tuning.rules.damage_cooldown_ms, 1000.0);
    assert_eq!(tuning.rules.item_block_indices, vec![2, 5, 11]);
}

#[test]
fn test_parse_error_names_the_file() {
    let result: Result<LevelDef, _> = parse_ron("level.ron", "(schema_version: )");
    let Err(e) = result else {
        panic!("malformed level parsed");
    };
    assert_eq!(e.file, "level.ron");
    assert!(e.to_string().starts_with("Failed to load level.ron"));
}

#[test]
fn test_missing_directory_reports_both_files() {
    let errors = match load_level_data(Path::new("does/not/exist")) {
        Ok(_) => panic!("loaded from a missing directory"),
        Err(errors) => errors,
    };
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_shipped_data_loads() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DATA_DIR);
    let (level, tuning) = match load_level_data(&dir) {
        Ok(data) => data,
        Err(errors) => panic!("{:?}", errors),
    };
    assert_eq!(tuning.movement.tick_hz, 60.0);
    assert!(level.pieces.iter().any(|p| classify(&p.name) == ObjectKind::TeleportPipe));
    assert_eq!(level.enemies.len(), 11);
}
