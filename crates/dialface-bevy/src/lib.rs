//! Dialface Bevy Plugin — an analog clock face in Bevy's ECS.
//!
//! Provides `DialfacePlugin` which registers the resources, messages and
//! systems that build clock faces and keep their hands on the wall-clock
//! time.

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod systems;

use bevy::prelude::*;

pub use components::{ClockFace, ClockHand, HourTick, MinuteTick};
pub use error::ClockFaceSetupError;
pub use events::ClockFaceBuilt;
pub use resources::{ClockFacePrefabs, ClockFaceSettings, Prefab, PrefabSlot, WallClock};

use systems::{build_clock_faces, rotate_hands};

/// Ordering of the clock face systems within `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClockFaceSystems {
    /// Spawns ticks and hands for newly added faces.
    Build,
    /// Turns hands to the current time. Always after `Build`.
    Rotate,
}

/// Main Bevy plugin for the analog clock face.
///
/// Registers resources, messages, and systems for:
/// - Holding prefabs, layout settings and the time source as resources
/// - Building tick marks and hands when a `ClockFace` is spawned
/// - Rotating the hands every frame
///
/// Resources inserted before the plugin is added are kept.
pub struct DialfacePlugin;

impl Plugin for DialfacePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ClockFaceBuilt>()
            .init_resource::<ClockFacePrefabs>()
            .init_resource::<ClockFaceSettings>()
            .init_resource::<WallClock>()
            .configure_sets(
                Update,
                (ClockFaceSystems::Build, ClockFaceSystems::Rotate).chain(),
            )
            .add_systems(
                Update,
                (
                    build_clock_faces.in_set(ClockFaceSystems::Build),
                    rotate_hands.in_set(ClockFaceSystems::Rotate),
                ),
            );
    }
}
