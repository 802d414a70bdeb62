//! Bevy messages emitted by the clock face systems.

use bevy::prelude::*;

/// Fired once a clock face has spawned its ticks and hands.
#[derive(Message, Debug, Clone)]
pub struct ClockFaceBuilt {
    /// The `ClockFace` entity.
    pub face: Entity,
    /// Number of hour ticks spawned.
    pub hour_ticks: usize,
    /// Number of minute ticks spawned.
    pub minute_ticks: usize,
    /// Hands in `HandKind::ALL` order: hours, minutes, seconds.
    pub hands: [Entity; 3],
}
