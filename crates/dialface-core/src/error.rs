use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} radius must be positive and finite, got {value}")]
    InvalidRadius { name: &'static str, value: f32 },
    #[error("hand depths must be finite and ordered hours < minutes < seconds, got {hours} / {minutes} / {seconds}")]
    UnorderedDepths {
        hours: f32,
        minutes: f32,
        seconds: f32,
    },
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
