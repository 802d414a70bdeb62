use dialface_core::ConfigError;

use crate::resources::PrefabSlot;

#[derive(Debug, thiserror::Error)]
pub enum ClockFaceSetupError {
    #[error("clock face prefab not assigned: {0}")]
    MissingPrefab(PrefabSlot),
    #[error("invalid clock face config: {0}")]
    Config(#[from] ConfigError),
}
