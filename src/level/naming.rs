//! Level domain: classification of world objects by their authored names.
//!
//! Level data identifies gameplay objects purely through naming:
//! `ObjectCube_<n>`, `BrickCube_<n>`, `MushroomCube_<n>`, `FlowerCube_<n>`,
//! `CoinCube_<n>`, `Enemy<n>`, `FlagPole`, `FlagSphere` and the teleport pipe.
//! `<n>` is one or two decimal digits. Anything else is plain scenery.

/// Name of the pipe that teleports the player when entered holding down.
pub const TELEPORT_PIPE: &str = "Pipe_4";

/// Closed set of object classes the response logic reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    ObjectCube(u32),
    BrickCube(u32),
    MushroomCube(u32),
    FlowerCube(u32),
    CoinCube(u32),
    Enemy(u32),
    Goal,
    TeleportPipe,
    Scenery,
}

impl ObjectKind {
    pub fn is_item(&self) -> bool {
        matches!(
            self,
            ObjectKind::MushroomCube(_) | ObjectKind::FlowerCube(_) | ObjectKind::CoinCube(_)
        )
    }
}

/// Parse `<prefix><1-2 digits>` exactly, returning the number.
fn indexed(name: &str, prefix: &str) -> Option<u32> {
    let digits = name.strip_prefix(prefix)?;
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

pub fn classify(name: &str) -> ObjectKind {
    if name == "FlagPole" || name == "FlagSphere" {
        return ObjectKind::Goal;
    }
    if name == TELEPORT_PIPE {
        return ObjectKind::TeleportPipe;
    }

    let patterns: [(&str, fn(u32) -> ObjectKind); 6] = [
        ("ObjectCube_", ObjectKind::ObjectCube),
        ("BrickCube_", ObjectKind::BrickCube),
        ("MushroomCube_", ObjectKind::MushroomCube),
        ("FlowerCube_", ObjectKind::FlowerCube),
        ("CoinCube_", ObjectKind::CoinCube),
        ("Enemy", ObjectKind::Enemy),
    ];

    patterns
        .iter()
        .find_map(|(prefix, kind)| indexed(name, prefix).map(kind))
        .unwrap_or(ObjectKind::Scenery)
}
