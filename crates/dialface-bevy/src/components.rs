//! ECS components for clock faces and the entities they spawn.

use bevy::prelude::*;
use dialface_core::HandKind;

/// The center of a clock face. Add it to an entity to have the face built.
///
/// Tick marks are parented to the anchors. When an anchor is `None`, an
/// anchor entity is spawned as a child of the face. A supplied anchor should
/// share the face's center, since tick positions are relative to it.
#[derive(Component, Debug, Clone, Default)]
#[require(Transform, Visibility)]
pub struct ClockFace {
    /// Parent for the hour tick marks.
    pub hour_anchor: Option<Entity>,
    /// Parent for the minute tick marks.
    pub minute_anchor: Option<Entity>,
}

/// Entities spawned by the last build of a face. User-supplied anchors are
/// not included.
#[derive(Component, Debug, Clone, Default)]
pub struct ClockFaceParts(pub Vec<Entity>);

/// Container spawned for hour ticks when the face has no hour anchor.
#[derive(Component, Debug, Default)]
#[require(Transform, Visibility)]
pub struct HourTickAnchor;

/// Container spawned for minute ticks when the face has no minute anchor.
#[derive(Component, Debug, Default)]
#[require(Transform, Visibility)]
pub struct MinuteTickAnchor;

/// An hour tick mark. `step` is in `0..12`.
#[derive(Component, Debug, Clone, Copy)]
pub struct HourTick {
    pub step: u32,
}

/// A minute tick mark. `step` is in `0..60`, never a multiple of 5.
#[derive(Component, Debug, Clone, Copy)]
pub struct MinuteTick {
    pub step: u32,
}

/// One of the three rotating hands.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockHand {
    pub kind: HandKind,
}
