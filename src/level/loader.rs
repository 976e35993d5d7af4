//! Level domain: loading and validating RON level data at startup.

use ron::Options;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::data::{LevelDef, Tuning};
use super::naming::{ObjectKind, classify};

pub const LEVEL_FILE: &str = "level.ron";
pub const TUNING_FILE: &str = "tuning.ron";

/// Error type for data loading failures.
#[derive(Debug)]
pub struct LevelLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// A structural problem in otherwise parseable level data.
#[derive(Debug, PartialEq)]
pub enum LevelValidationError {
    DuplicateName(String),
    NonPositiveSize(String),
    InvalidEnemyRange(String),
    MissingGoal,
}

impl std::fmt::Display for LevelValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "object name '{}' is used twice", name),
            Self::NonPositiveSize(name) => write!(f, "piece '{}' has a non-positive size", name),
            Self::InvalidEnemyRange(name) => {
                write!(f, "enemy '{}' needs a positive max_distance", name)
            }
            Self::MissingGoal => write!(f, "level has no FlagPole or FlagSphere"),
        }
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON text, tagging errors with the originating file name.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, LevelLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| LevelLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

fn load_single_file<T>(path: &Path) -> Result<T, LevelLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| LevelLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&file_name, &contents)
}

/// Check names, sizes and the presence of a goal.
pub fn validate_level(level: &LevelDef) -> Vec<LevelValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    let names = level
        .pieces
        .iter()
        .map(|p| &p.name)
        .chain(level.enemies.iter().map(|e| &e.name));
    for name in names {
        if !seen.insert(name.as_str()) {
            errors.push(LevelValidationError::DuplicateName(name.clone()));
        }
    }

    for piece in &level.pieces {
        if piece.size.iter().any(|s| *s <= 0.0) {
            errors.push(LevelValidationError::NonPositiveSize(piece.name.clone()));
        }
    }

    for enemy in &level.enemies {
        if enemy.max_distance <= 0.0 {
            errors.push(LevelValidationError::InvalidEnemyRange(enemy.name.clone()));
        }
    }

    if !level
        .pieces
        .iter()
        .any(|p| classify(&p.name) == ObjectKind::Goal)
    {
        errors.push(LevelValidationError::MissingGoal);
    }

    errors
}

/// Load `level.ron` and `tuning.ron` from `base_path`.
/// Every failure is collected so one run reports all broken files.
pub fn load_level_data(base_path: &Path) -> Result<(LevelDef, Tuning), Vec<LevelLoadError>> {
    let mut errors = Vec::new();

    let tuning = match load_single_file::<Tuning>(&base_path.join(TUNING_FILE)) {
        Ok(tuning) => Some(tuning),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let level_path = base_path.join(LEVEL_FILE);
    let level = match load_single_file::<LevelDef>(&level_path) {
        Ok(level) => {
            for problem in validate_level(&level) {
                errors.push(LevelLoadError {
                    file: level_path.display().to_string(),
                    message: problem.to_string(),
                });
            }
            Some(level)
        }
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match (level, tuning) {
        (Some(level), Some(tuning)) if errors.is_empty() => Ok((level, tuning)),
        _ => Err(errors),
    }
}
