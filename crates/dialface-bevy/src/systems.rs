//! Bevy systems that build clock faces and turn their hands.
//!
//! Building happens once per face, when its `ClockFace` component is added.
//! Rotation runs every frame and only touches entities the builder spawned,
//! so it can never observe a face without hands.

use bevy::prelude::*;

use dialface_core::layout::{hand_placements, hour_ticks, minute_ticks};
use dialface_core::{HandAngles, HandKind};

use crate::components::{
    ClockFace, ClockFaceParts, ClockHand, HourTick, HourTickAnchor, MinuteTick, MinuteTickAnchor,
};
use crate::error::ClockFaceSetupError;
use crate::events::ClockFaceBuilt;
use crate::resources::{ClockFacePrefabs, ClockFaceSettings, WallClock};

/// Spawn tick marks and hands for every newly added `ClockFace`.
///
/// A face whose `ClockFace` is inserted again is rebuilt: the parts from the
/// previous build are despawned first.
///
/// Fails when a prefab slot is empty or the config is invalid. The error
/// propagates to Bevy's error handler, which panics by default.
pub fn build_clock_faces(
    mut commands: Commands,
    faces: Query<(Entity, &ClockFace, Option<&ClockFaceParts>), Added<ClockFace>>,
    prefabs: Res<ClockFacePrefabs>,
    settings: Res<ClockFaceSettings>,
    clock: Res<WallClock>,
    mut built: MessageWriter<ClockFaceBuilt>,
) -> Result {
    if faces.is_empty() {
        return Ok(());
    }

    let prefabs = prefabs
        .resolve()
        .inspect_err(|e| tracing::error!("Cannot build clock face: {e}"))?;
    let config = &settings.config;
    config
        .validate()
        .map_err(ClockFaceSetupError::from)
        .inspect_err(|e| tracing::error!("Cannot build clock face: {e}"))?;

    let hour_marks = hour_ticks(config);
    let minute_marks = minute_ticks(config);
    let time = clock.time_of_day();

    for (face, spec, previous) in &faces {
        if let Some(previous) = previous {
            tracing::debug!("Rebuilding clock face {face}, despawning {} parts", previous.0.len());
            for &part in &previous.0 {
                commands.entity(part).try_despawn();
            }
        }

        let mut parts = Vec::with_capacity(hour_marks.len() + minute_marks.len() + 5);

        let hour_anchor = spec.hour_anchor.unwrap_or_else(|| {
            tracing::debug!("Spawning hour tick anchor for {face}");
            let anchor = commands.spawn((HourTickAnchor, ChildOf(face))).id();
            parts.push(anchor);
            anchor
        });
        let minute_anchor = spec.minute_anchor.unwrap_or_else(|| {
            tracing::debug!("Spawning minute tick anchor for {face}");
            let anchor = commands.spawn((MinuteTickAnchor, ChildOf(face))).id();
            parts.push(anchor);
            anchor
        });

        for mark in &hour_marks {
            let tick = commands.spawn((
                HourTick { step: mark.step },
                prefabs.hour_tick.instance(),
                Transform::from_translation(mark.position).with_rotation(mark.rotation),
                ChildOf(hour_anchor),
            ));
            parts.push(tick.id());
        }

        for mark in &minute_marks {
            let tick = commands.spawn((
                MinuteTick { step: mark.step },
                prefabs.minute_tick.instance(),
                Transform::from_translation(mark.position).with_rotation(mark.rotation),
                ChildOf(minute_anchor),
            ));
            parts.push(tick.id());
        }

        let hands = hand_placements(config, time).map(|hand| {
            commands
                .spawn((
                    ClockHand { kind: hand.kind },
                    prefabs.hand(hand.kind).instance(),
                    Transform::from_translation(hand.position).with_rotation(hand.rotation),
                    ChildOf(face),
                ))
                .id()
        });
        parts.extend(hands);
        commands.entity(face).insert(ClockFaceParts(parts));

        tracing::info!(
            "Clock face {face} built at {time}: {} hour ticks, {} minute ticks",
            hour_marks.len(),
            minute_marks.len()
        );
        built.write(ClockFaceBuilt {
            face,
            hour_ticks: hour_marks.len(),
            minute_ticks: minute_marks.len(),
            hands,
        });
    }

    Ok(())
}

/// Turn every hand to the current time of day.
///
/// The time is read once per frame, so all faces show the same instant.
pub fn rotate_hands(
    clock: Res<WallClock>,
    settings: Res<ClockFaceSettings>,
    mut hands: Query<(&ClockHand, &mut Transform)>,
) {
    if hands.is_empty() {
        return;
    }

    let angles = HandAngles::at(clock.time_of_day());
    tracing::trace!(
        "hands: h={:.3} m={:.3} s={:.3}",
        angles.hours,
        angles.minutes,
        angles.seconds
    );

    let sweep = settings.config.sweep;
    let rotations = HandKind::ALL.map(|kind| angles.rotation(kind, sweep));
    for (hand, mut transform) in &mut hands {
        transform.rotation = match hand.kind {
            HandKind::Hours => rotations[0],
            HandKind::Minutes => rotations[1],
            HandKind::Seconds => rotations[2],
        };
    }
}
