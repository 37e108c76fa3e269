//! Camera fly-to transitions between named views.

mod config;
mod controller;
mod preset;

use thiserror::Error;

pub use config::{Easing, MotionConfig};
pub use controller::{MotionController, MotionState};
pub use preset::{PresetTable, ViewPreset};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error("unknown camera preset '{0}'")]
    UnknownPreset(String),
    #[error("invalid motion config: {0}")]
    InvalidConfig(String),
}
