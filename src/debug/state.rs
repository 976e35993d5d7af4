//! Debug domain: toggles for dev-only tooling.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether collision boxes are drawn
    pub show_bounds: bool,
}
