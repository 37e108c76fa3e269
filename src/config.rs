use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::motion::{MotionConfig, PresetTable};

/// Camera rig settings: motion tuning plus extra or overriding presets.
///
/// ```json
/// {
///   "motion": { "rate": 0.05, "position_tolerance": 0.005 },
///   "presets": { "gallery": { "position": [0, 7, 3], "look_at": [0, 7, 0] } }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub motion: MotionConfig,
    pub presets: PresetTable,
}

impl RigConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: RigConfig = serde_json::from_str(text).context("Failed to parse rig config")?;
        config.motion.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rig config: {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid rig config: {}", path.display()))
    }
}
