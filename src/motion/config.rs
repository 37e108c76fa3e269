use serde::{Deserialize, Serialize};

use super::MotionError;

/// How the per-update interpolation fraction is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Fixed fraction per call; apparent speed follows the frame rate
    #[default]
    PerFrame,
    /// Fraction scaled by elapsed time so the easing curve is the same at
    /// any frame rate
    TimeCorrected,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Share of the remaining gap closed per frame, in (0, 1]
    pub rate: f32,
    pub position_tolerance: f32,
    pub orientation_tolerance: f32,
    pub easing: Easing,
    /// Frame rate at which `TimeCorrected` matches `PerFrame` exactly
    pub reference_fps: f32,
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), MotionError> {
        if !(self.rate > 0.0 && self.rate <= 1.0) {
            return Err(MotionError::InvalidConfig(format!("rate must be in (0, 1], got {}", self.rate)));
        }
        if !(self.position_tolerance > 0.0 && self.orientation_tolerance > 0.0) {
            return Err(MotionError::InvalidConfig("tolerances must be positive".to_string()));
        }
        if !(self.reference_fps > 0.0) {
            return Err(MotionError::InvalidConfig(format!(
                "reference_fps must be positive, got {}",
                self.reference_fps
            )));
        }
        Ok(())
    }

    /// Fraction to apply for a frame lasting `delta_seconds`.
    pub fn fraction_for(&self, delta_seconds: f32) -> f32 {
        match self.easing {
            Easing::PerFrame => self.rate,
            Easing::TimeCorrected => {
                let frames = delta_seconds.max(0.0) * self.reference_fps;
                1.0 - (1.0 - self.rate).powf(frames)
            }
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            rate: 0.05,
            position_tolerance: 0.1,
            orientation_tolerance: 0.01,
            easing: Easing::PerFrame,
            reference_fps: 60.0,
        }
    }
}
