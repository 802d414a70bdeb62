//! Dialface Demo — a live analog clock in a Bevy window.
//!
//! Set `DIALFACE_CONFIG` to a JSON face config and `DIALFACE_FIXED_TIME` to
//! freeze the clock at `HH:MM:SS`.

mod config;
mod scene;

use bevy::prelude::*;
use dialface_bevy::DialfacePlugin;

use config::AppConfig;

fn main() -> AppExit {
    let config = AppConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Dialface".into(),
                resolution: (config.width, config.height).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.1)))
        .insert_resource(config)
        .add_plugins(DialfacePlugin)
        .add_systems(Startup, (scene::apply_app_config, scene::setup_scene))
        .run()
}
