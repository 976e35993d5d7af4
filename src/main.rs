mod animation;
mod collision;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod gameplay;
mod level;
mod movement;
mod presentation;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Super Mario QBros".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        gameplay::GameplayPlugin,
        presentation::PresentationPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
