//! Clock face configuration.
//!
//! `ClockFaceConfig` holds every tunable of the face layout. It is plain data
//! so hosts can load it from JSON or build it in code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::hands::{HandKind, Sweep};

/// Default radius of the hour tick ring.
pub const DEFAULT_HOUR_TICK_RADIUS: f32 = 4.0;
/// Default radius of the minute tick ring.
pub const DEFAULT_MINUTE_TICK_RADIUS: f32 = 4.5;

/// Offsets of each hand from the face plane toward the viewer (+Z).
///
/// Hours sit furthest back and seconds nearest, so the hands never
/// intersect each other or the face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandDepths {
    pub hours: f32,
    pub minutes: f32,
    pub seconds: f32,
}

impl Default for HandDepths {
    fn default() -> Self {
        Self {
            hours: 0.1,
            minutes: 0.2,
            seconds: 0.3,
        }
    }
}

impl HandDepths {
    pub fn get(&self, kind: HandKind) -> f32 {
        match kind {
            HandKind::Hours => self.hours,
            HandKind::Minutes => self.minutes,
            HandKind::Seconds => self.seconds,
        }
    }
}

/// Layout and motion settings for one clock face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockFaceConfig {
    /// Distance of hour ticks from the face center.
    pub hour_tick_radius: f32,
    /// Distance of minute ticks from the face center.
    pub minute_tick_radius: f32,
    /// Depth offsets of the hands.
    pub depths: HandDepths,
    /// Direction the hands travel.
    pub sweep: Sweep,
}

impl Default for ClockFaceConfig {
    fn default() -> Self {
        Self {
            hour_tick_radius: DEFAULT_HOUR_TICK_RADIUS,
            minute_tick_radius: DEFAULT_MINUTE_TICK_RADIUS,
            depths: HandDepths::default(),
            sweep: Sweep::default(),
        }
    }
}

impl ClockFaceConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!("Loaded clock face config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_radius("hour tick", self.hour_tick_radius)?;
        check_radius("minute tick", self.minute_tick_radius)?;

        let HandDepths {
            hours,
            minutes,
            seconds,
        } = self.depths;
        let finite = hours.is_finite() && minutes.is_finite() && seconds.is_finite();
        if !finite || hours >= minutes || minutes >= seconds {
            return Err(ConfigError::UnorderedDepths {
                hours,
                minutes,
                seconds,
            });
        }
        Ok(())
    }
}

fn check_radius(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRadius { name, value })
    }
}
