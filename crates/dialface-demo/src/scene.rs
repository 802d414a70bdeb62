//! Scene setup: camera, light, dial backing and placeholder prefabs.

use bevy::prelude::*;
use dialface_bevy::{ClockFace, ClockFacePrefabs, ClockFaceSettings, Prefab};

use crate::config::AppConfig;

const DIAL_RADIUS: f32 = 5.2;
const DIAL_THICKNESS: f32 = 0.05;

/// Startup system: apply `AppConfig` to the clock face resources.
pub fn apply_app_config(mut commands: Commands, config: Res<AppConfig>) {
    let face = config.face_config();
    tracing::debug!("Clock face config: {face:?}");
    commands.insert_resource(ClockFaceSettings { config: face });
    commands.insert_resource(config.wall_clock());
}

/// Startup system: spawn the camera, light and dial, then the clock face.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, 14.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(2.0, 4.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Cylinder axis is +Y; tip it onto the face normal.
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(DIAL_RADIUS, DIAL_THICKNESS))),
        MeshMaterial3d(materials.add(Color::srgb(0.92, 0.9, 0.85))),
        Transform::from_xyz(0.0, 0.0, -DIAL_THICKNESS)
            .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
    ));

    let ink = materials.add(Color::srgb(0.1, 0.1, 0.12));
    let accent = materials.add(Color::srgb(0.8, 0.15, 0.1));

    commands.insert_resource(ClockFacePrefabs {
        hour_tick: Some(Prefab::new(
            meshes.add(Cuboid::new(0.15, 0.6, 0.05)),
            ink.clone(),
        )),
        minute_tick: Some(Prefab::new(meshes.add(Sphere::new(0.06)), ink.clone())),
        hours_hand: Some(Prefab::new(meshes.add(hand_mesh(0.2, 2.4)), ink.clone())),
        minutes_hand: Some(Prefab::new(meshes.add(hand_mesh(0.12, 3.6)), ink)),
        seconds_hand: Some(Prefab::new(meshes.add(hand_mesh(0.05, 4.0)), accent)),
    });

    commands.spawn(ClockFace::default());
}

/// A bar along local +Y with its pivot near one end.
fn hand_mesh(width: f32, length: f32) -> Mesh {
    let overhang = length * 0.1;
    Mesh::from(Cuboid::new(width, length, 0.04))
        .translated_by(Vec3::new(0.0, length / 2.0 - overhang, 0.0))
}
