//! Placement of tick marks and hands on the clock face.
//!
//! Everything here is computed relative to the face center at the origin.
//! Hour ticks sit every 30° (360° / 12 hours), minute ticks every 6°
//! (360° / 60 minutes) except where an hour tick already stands.

use chrono::NaiveTime;
use glam::{Quat, Vec3};

use crate::config::ClockFaceConfig;
use crate::geometry::{outward_facing, polar_to_cartesian};
use crate::hands::{HandAngles, HandKind};

/// Number of hour positions on the dial.
pub const HOUR_STEPS: u32 = 12;
/// Number of minute positions on the dial, hour positions included.
pub const MINUTE_STEPS: u32 = 60;
/// Minute steps between two hour positions.
pub const MINUTES_PER_HOUR_STEP: u32 = MINUTE_STEPS / HOUR_STEPS;

const HOUR_STEP_DEGREES: f32 = 360.0 / HOUR_STEPS as f32;
const MINUTE_STEP_DEGREES: f32 = 360.0 / MINUTE_STEPS as f32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickKind {
    Hour,
    Minute,
}

/// A static marker on the face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub kind: TickKind,
    /// Step index on its ring: `0..12` for hours, `0..60` for minutes.
    pub step: u32,
    /// Placement angle, counter-clockwise from +X.
    pub angle_degrees: f32,
    pub position: Vec3,
    pub rotation: Quat,
}

/// Hour ticks, one per 30°, each facing outward.
pub fn hour_ticks(config: &ClockFaceConfig) -> Vec<TickMark> {
    (0..HOUR_STEPS)
        .map(|step| {
            let angle_degrees = step as f32 * HOUR_STEP_DEGREES;
            let position = polar_to_cartesian(config.hour_tick_radius, angle_degrees.to_radians());
            TickMark {
                kind: TickKind::Hour,
                step,
                angle_degrees,
                position,
                rotation: outward_facing(position, Vec3::ZERO),
            }
        })
        .collect()
}

/// Whether minute step `step` shares its position with an hour tick.
pub fn coincides_with_hour(step: u32) -> bool {
    step % MINUTES_PER_HOUR_STEP == 0
}

/// Minute ticks at every 6° not already taken by an hour tick.
pub fn minute_ticks(config: &ClockFaceConfig) -> Vec<TickMark> {
    (0..MINUTE_STEPS)
        .filter(|&step| !coincides_with_hour(step))
        .map(|step| {
            let angle_degrees = step as f32 * MINUTE_STEP_DEGREES;
            TickMark {
                kind: TickKind::Minute,
                step,
                angle_degrees,
                position: polar_to_cartesian(config.minute_tick_radius, angle_degrees.to_radians()),
                rotation: Quat::IDENTITY,
            }
        })
        .collect()
}

/// Where a hand sits and how it is turned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandPlacement {
    pub kind: HandKind,
    pub position: Vec3,
    pub rotation: Quat,
}

/// The three hands at the face center, already turned to `time`.
pub fn hand_placements(config: &ClockFaceConfig, time: NaiveTime) -> [HandPlacement; 3] {
    let angles = HandAngles::at(time);
    HandKind::ALL.map(|kind| HandPlacement {
        kind,
        position: Vec3::new(0.0, 0.0, config.depths.get(kind)),
        rotation: angles.rotation(kind, config.sweep),
    })
}
