//! Dialface Core — domain layer for the analog clock face.
//!
//! This crate contains the face geometry, tick layout, hand angle math,
//! time sources and configuration. No engine or framework dependencies.

pub mod config;
pub mod error;
pub mod geometry;
pub mod hands;
pub mod layout;
pub mod time;

// Re-exports for convenience.
pub use config::{ClockFaceConfig, HandDepths};
pub use error::ConfigError;
pub use hands::{HandAngles, HandKind, Sweep, hand_rotation};
pub use layout::{HandPlacement, TickKind, TickMark, hand_placements, hour_ticks, minute_ticks};
pub use time::{ManualClock, SystemClock, TimeSource};
