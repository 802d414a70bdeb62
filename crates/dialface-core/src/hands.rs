//! Hand angles derived from the time of day.
//!
//! # Formula
//! With `t` the time elapsed since midnight (fractional, nanosecond precision):
//! ```text
//!   seconds = 6°  × (t in seconds mod 60)
//!   minutes = 6°  × (t in minutes mod 60)
//!   hours   = 30° × (t in hours)
//! ```
//! The seconds and minutes hands wrap every revolution. The hours hand grows
//! through `[0°, 720°)` and wraps once per day, which keeps it monotonic
//! across a day. Every angle is a pure function of `t`.

use chrono::{NaiveTime, Timelike};
use glam::Quat;
use serde::{Deserialize, Serialize};

/// Degrees swept per hour by the hours hand (360° / 12 hours).
pub const HOURS_TO_DEGREES: f64 = 30.0;
/// Degrees swept per minute by the minutes hand (360° / 60 minutes).
pub const MINUTES_TO_DEGREES: f64 = 6.0;
/// Degrees swept per second by the seconds hand (360° / 60 seconds).
pub const SECONDS_TO_DEGREES: f64 = 6.0;

/// One of the three hands of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    Hours,
    Minutes,
    Seconds,
}

impl HandKind {
    /// All hands, from the one furthest from the viewer to the nearest.
    pub const ALL: [HandKind; 3] = [HandKind::Hours, HandKind::Minutes, HandKind::Seconds];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

/// Direction the hands travel as time advances, seen from +Z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sweep {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Sweep {
    /// Map a dial angle to a signed rotation angle about +Z.
    pub fn signed(self, degrees: f32) -> f32 {
        match self {
            Self::Clockwise => -degrees,
            Self::CounterClockwise => degrees,
        }
    }
}

/// Angles of the three hands in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hours: f32,
    pub minutes: f32,
    pub seconds: f32,
}

impl HandAngles {
    /// Angles for the given time of day.
    pub fn at(time: NaiveTime) -> Self {
        let total_seconds = seconds_since_midnight(time);
        let total_minutes = total_seconds / 60.0;
        let total_hours = total_minutes / 60.0;

        Self {
            hours: (HOURS_TO_DEGREES * total_hours) as f32,
            minutes: (MINUTES_TO_DEGREES * total_minutes.rem_euclid(60.0)) as f32,
            seconds: (SECONDS_TO_DEGREES * total_seconds.rem_euclid(60.0)) as f32,
        }
    }

    pub fn get(&self, kind: HandKind) -> f32 {
        match kind {
            HandKind::Hours => self.hours,
            HandKind::Minutes => self.minutes,
            HandKind::Seconds => self.seconds,
        }
    }

    /// Rotation of one hand about the face normal.
    pub fn rotation(&self, kind: HandKind, sweep: Sweep) -> Quat {
        hand_rotation(self.get(kind), sweep)
    }
}

/// Rotation about the face normal for an angle of `degrees` on the dial.
pub fn hand_rotation(degrees: f32, sweep: Sweep) -> Quat {
    Quat::from_rotation_z(sweep.signed(degrees).to_radians())
}

/// Fractional seconds elapsed since midnight.
///
/// A leap second (nanoseconds ≥ 1e9) is folded into the last second of the
/// minute.
pub fn seconds_since_midnight(time: NaiveTime) -> f64 {
    let nanos = time.nanosecond().min(999_999_999);
    f64::from(time.num_seconds_from_midnight()) + f64::from(nanos) * 1e-9
}
