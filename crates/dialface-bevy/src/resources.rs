//! Bevy resources for the clock face.

use std::fmt;

use bevy::prelude::*;
use chrono::NaiveTime;
use dialface_core::{ClockFaceConfig, HandKind, SystemClock, TimeSource};

use crate::error::ClockFaceSetupError;

/// Visual template instantiated for ticks and hands.
#[derive(Debug, Clone)]
pub struct Prefab {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

impl Prefab {
    pub fn new(mesh: Handle<Mesh>, material: Handle<StandardMaterial>) -> Self {
        Self { mesh, material }
    }

    /// Components that render one instance of this prefab.
    pub fn instance(&self) -> (Mesh3d, MeshMaterial3d<StandardMaterial>) {
        (
            Mesh3d(self.mesh.clone()),
            MeshMaterial3d(self.material.clone()),
        )
    }
}

/// Names one of the five prefab slots, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefabSlot {
    HourTick,
    MinuteTick,
    HoursHand,
    MinutesHand,
    SecondsHand,
}

impl fmt::Display for PrefabSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HourTick => write!(f, "hour tick"),
            Self::MinuteTick => write!(f, "minute tick"),
            Self::HoursHand => write!(f, "hours hand"),
            Self::MinutesHand => write!(f, "minutes hand"),
            Self::SecondsHand => write!(f, "seconds hand"),
        }
    }
}

impl From<HandKind> for PrefabSlot {
    fn from(kind: HandKind) -> Self {
        match kind {
            HandKind::Hours => Self::HoursHand,
            HandKind::Minutes => Self::MinutesHand,
            HandKind::Seconds => Self::SecondsHand,
        }
    }
}

/// Prefabs used when building clock faces.
///
/// Every slot must be filled before a `ClockFace` is spawned; building a
/// face with an empty slot is an error.
#[derive(Resource, Debug, Clone, Default)]
pub struct ClockFacePrefabs {
    pub hour_tick: Option<Prefab>,
    pub minute_tick: Option<Prefab>,
    pub hours_hand: Option<Prefab>,
    pub minutes_hand: Option<Prefab>,
    pub seconds_hand: Option<Prefab>,
}

/// All five prefabs, checked present.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPrefabs<'a> {
    pub hour_tick: &'a Prefab,
    pub minute_tick: &'a Prefab,
    hands: [&'a Prefab; 3],
}

impl ResolvedPrefabs<'_> {
    pub fn hand(&self, kind: HandKind) -> &Prefab {
        match kind {
            HandKind::Hours => self.hands[0],
            HandKind::Minutes => self.hands[1],
            HandKind::Seconds => self.hands[2],
        }
    }
}

impl ClockFacePrefabs {
    fn slot(&self, slot: PrefabSlot) -> Result<&Prefab, ClockFaceSetupError> {
        let prefab = match slot {
            PrefabSlot::HourTick => &self.hour_tick,
            PrefabSlot::MinuteTick => &self.minute_tick,
            PrefabSlot::HoursHand => &self.hours_hand,
            PrefabSlot::MinutesHand => &self.minutes_hand,
            PrefabSlot::SecondsHand => &self.seconds_hand,
        };
        prefab
            .as_ref()
            .ok_or(ClockFaceSetupError::MissingPrefab(slot))
    }

    /// Check every slot is filled. Reports the first empty slot.
    pub fn resolve(&self) -> Result<ResolvedPrefabs<'_>, ClockFaceSetupError> {
        Ok(ResolvedPrefabs {
            hour_tick: self.slot(PrefabSlot::HourTick)?,
            minute_tick: self.slot(PrefabSlot::MinuteTick)?,
            hands: [
                self.slot(PrefabSlot::HoursHand)?,
                self.slot(PrefabSlot::MinutesHand)?,
                self.slot(PrefabSlot::SecondsHand)?,
            ],
        })
    }
}

/// Layout settings shared by every clock face in the world.
#[derive(Resource, Debug, Clone, Default)]
pub struct ClockFaceSettings {
    pub config: ClockFaceConfig,
}

/// Where the clock reads the time of day. Defaults to the system clock.
#[derive(Resource, Debug)]
pub struct WallClock {
    source: Box<dyn TimeSource>,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new(SystemClock::new())
    }
}

impl WallClock {
    pub fn new(source: impl TimeSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn time_of_day(&self) -> NaiveTime {
        self.source.time_of_day()
    }
}
