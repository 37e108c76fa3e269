use glam::Vec3;
use log::{debug, warn};

use super::{MotionConfig, MotionError, PresetTable, ViewPreset};
use crate::camera::Camera;

/// The single in-flight camera target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub target_position: Vec3,
    pub target_look_at: Vec3,
    pub is_moving: bool,
}

/// Eases a camera toward a target position and look-at point.
///
/// Each step closes a fixed share of the remaining gap (exponential decay),
/// and the move ends once both the position error and the facing error
/// measured at the start of a step are under tolerance.
#[derive(Clone, Debug)]
pub struct MotionController {
    config: MotionConfig,
    presets: PresetTable,
    state: MotionState,
}

impl MotionController {
    pub fn new(config: MotionConfig) -> Result<Self, MotionError> {
        Self::with_presets(config, PresetTable::new())
    }

    pub fn with_presets(config: MotionConfig, presets: PresetTable) -> Result<Self, MotionError> {
        config.validate()?;
        Ok(Self {
            config,
            presets,
            state: MotionState::default(),
        })
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn presets(&self) -> &PresetTable {
        &self.presets
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        self.state.is_moving
    }

    /// Add or replace a preset. A move already heading to the old values
    /// keeps its target.
    pub fn define_preset(&mut self, name: impl Into<String>, position: Vec3, look_at: Vec3) -> Option<ViewPreset> {
        self.presets.insert(name, ViewPreset::new(position, look_at))
    }

    /// Start heading to `position` facing `look_at`, replacing any move in
    /// progress.
    pub fn move_to(&mut self, position: Vec3, look_at: Vec3) {
        debug!("camera move to {position} looking at {look_at}");
        self.state = MotionState {
            target_position: position,
            target_look_at: look_at,
            is_moving: true,
        };
    }

    /// Start a move to a named preset. Unknown names leave the current
    /// state untouched.
    pub fn move_to_preset(&mut self, name: &str) -> Result<ViewPreset, MotionError> {
        let Some(preset) = self.presets.get(name) else {
            warn!("unknown camera preset '{name}'");
            return Err(MotionError::UnknownPreset(name.to_string()));
        };
        self.move_to(preset.position, preset.look_at);
        Ok(preset)
    }

    /// One frame of motion using the configured rate. Returns whether the
    /// controller is still moving afterwards.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        self.step(camera, self.config.rate)
    }

    /// One frame of motion lasting `delta_seconds`, eased according to
    /// `MotionConfig::easing`.
    pub fn advance(&mut self, camera: &mut Camera, delta_seconds: f32) -> bool {
        let fraction = self.config.fraction_for(delta_seconds);
        self.step(camera, fraction)
    }

    fn step(&mut self, camera: &mut Camera, fraction: f32) -> bool {
        if !self.state.is_moving {
            return false;
        }

        let MotionState {
            target_position,
            target_look_at,
            ..
        } = self.state;

        let position_error = camera.position.distance(target_position);
        let wanted_facing = (target_look_at - camera.position).normalize_or_zero();
        let orientation_error = camera.forward().distance(wanted_facing);

        camera.position = camera.position.lerp(target_position, fraction);

        let current_look_at = camera.position + camera.forward();
        camera.look_at(current_look_at.lerp(target_look_at, fraction));

        if position_error < self.config.position_tolerance && orientation_error < self.config.orientation_tolerance {
            debug!("camera settled at {}", camera.position);
            self.state.is_moving = false;
        }

        self.state.is_moving
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self {
            config: MotionConfig::default(),
            presets: PresetTable::new(),
            state: MotionState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Easing;

    fn camera_at_seven() -> Camera {
        Camera::new(Vec3::new(0.0, 7.0, 0.0), 75.0, 1.0)
    }

    #[test]
    fn idle_update_leaves_camera_alone() {
        let mut controller = MotionController::default();
        let mut camera = camera_at_seven();
        let before = camera;

        assert!(!controller.update(&mut camera));
        assert_eq!(camera, before);
    }

    #[test]
    fn first_step_closes_five_percent() {
        let mut controller = MotionController::default();
        let mut camera = camera_at_seven();

        controller.move_to(Vec3::new(0.0, 7.0, -2.0), Vec3::new(0.0, 7.0, -4.0));
        assert!(controller.update(&mut camera));
        assert!((camera.position - Vec3::new(0.0, 7.0, -0.1)).length() < 1e-5);
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn new_move_replaces_target() {
        let mut controller = MotionController::default();
        controller.move_to(Vec3::X, Vec3::ZERO);
        controller.move_to(Vec3::Y, Vec3::Z);

        let state = controller.state();
        assert_eq!(state.target_position, Vec3::Y);
        assert_eq!(state.target_look_at, Vec3::Z);
        assert!(state.is_moving);
    }

    #[test]
    fn unknown_preset_is_a_no_op() {
        let mut controller = MotionController::default();
        controller.move_to(Vec3::X, Vec3::ZERO);
        let before = controller.state();

        let err = controller.move_to_preset("nowhere").unwrap_err();
        assert_eq!(err, MotionError::UnknownPreset("nowhere".to_string()));
        assert_eq!(controller.state(), before);
    }

    #[test]
    fn redefining_preset_does_not_retarget_active_move() {
        let mut controller = MotionController::default();
        controller.define_preset("v", Vec3::X, Vec3::ZERO);
        controller.move_to_preset("v").unwrap();

        let replaced = controller.define_preset("v", Vec3::Y, Vec3::ZERO);
        assert_eq!(replaced, Some(ViewPreset::new(Vec3::X, Vec3::ZERO)));
        assert_eq!(controller.state().target_position, Vec3::X);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = MotionConfig { rate: 0.0, ..Default::default() };
        assert!(matches!(MotionController::new(config), Err(MotionError::InvalidConfig(_))));
    }

    #[test]
    fn advance_with_reference_frame_matches_update() {
        let config = MotionConfig {
            easing: Easing::TimeCorrected,
            ..Default::default()
        };
        let mut timed = MotionController::new(config).unwrap();
        let mut framed = MotionController::default();
        let (mut a, mut b) = (camera_at_seven(), camera_at_seven());

        let target = Vec3::new(3.0, 7.0, -2.0);
        timed.move_to(target, Vec3::new(0.0, 6.0, -5.0));
        framed.move_to(target, Vec3::new(0.0, 6.0, -5.0));

        for _ in 0..10 {
            timed.advance(&mut a, 1.0 / 60.0);
            framed.update(&mut b);
        }
        assert!((a.position - b.position).length() < 1e-4);
        assert!((a.forward() - b.forward()).length() < 1e-4);
    }

    #[test]
    fn time_corrected_is_frame_rate_independent() {
        let config = MotionConfig {
            easing: Easing::TimeCorrected,
            ..Default::default()
        };
        let target = Vec3::new(0.0, 7.0, -2.0);
        let look = Vec3::new(0.0, 7.0, -4.0);

        let mut fast = MotionController::new(config).unwrap();
        let mut slow = MotionController::new(config).unwrap();
        let (mut a, mut b) = (camera_at_seven(), camera_at_seven());
        fast.move_to(target, look);
        slow.move_to(target, look);

        // Half a second at 120 fps against half a second at 30 fps
        for _ in 0..60 {
            fast.advance(&mut a, 1.0 / 120.0);
        }
        for _ in 0..15 {
            slow.advance(&mut b, 1.0 / 30.0);
        }
        assert!((a.position - b.position).length() < 1e-3);
    }
}
