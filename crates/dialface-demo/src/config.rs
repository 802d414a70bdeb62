//! Application configuration for the demo.

use std::path::PathBuf;

use bevy::prelude::*;
use dialface_bevy::WallClock;
use dialface_core::time::parse_time_of_day;
use dialface_core::{ClockFaceConfig, ManualClock, SystemClock};

/// Default window width.
const DEFAULT_WIDTH: u32 = 900;
/// Default window height.
const DEFAULT_HEIGHT: u32 = 900;

/// Runtime configuration for the Dialface demo application.
#[derive(Resource, Clone, Debug)]
pub struct AppConfig {
    /// JSON file with a `ClockFaceConfig`, from `DIALFACE_CONFIG`.
    pub face_config_path: Option<PathBuf>,
    /// Frozen time of day, from `DIALFACE_FIXED_TIME` (`HH:MM:SS`).
    pub fixed_time: Option<String>,
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            face_config_path: std::env::var_os("DIALFACE_CONFIG").map(PathBuf::from),
            fixed_time: std::env::var("DIALFACE_FIXED_TIME").ok(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl AppConfig {
    /// Face layout from the config file, or defaults when unset or unreadable.
    pub fn face_config(&self) -> ClockFaceConfig {
        let Some(ref path) = self.face_config_path else {
            return ClockFaceConfig::default();
        };
        match ClockFaceConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default clock face config: {e}");
                ClockFaceConfig::default()
            }
        }
    }

    /// Frozen clock when `fixed_time` parses, the system clock otherwise.
    pub fn wall_clock(&self) -> WallClock {
        let Some(ref text) = self.fixed_time else {
            return WallClock::new(SystemClock::new());
        };
        match parse_time_of_day(text) {
            Some(time) => {
                tracing::info!("Clock frozen at {time}");
                WallClock::new(ManualClock::new(time))
            }
            None => {
                tracing::warn!("Ignoring DIALFACE_FIXED_TIME={text:?}, expected HH:MM:SS");
                WallClock::new(SystemClock::new())
            }
        }
    }
}
