pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod motion;
pub mod picking;
pub mod portfolio;
pub mod scene;
pub mod types;

pub use camera::Camera;
pub use config::RigConfig;
pub use motion::{MotionConfig, MotionController, MotionError, ViewPreset};
pub use picking::{HitRouter, PickResult, PointerClick};
pub use portfolio::{ButtonAction, Portfolio, PortfolioOptions, Section};
pub use scene::{Mesh, NodeId, SceneGraph, Transform};
