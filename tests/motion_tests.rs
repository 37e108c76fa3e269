use glam::Vec3;
use portfolio_scene::motion::{Easing, MotionConfig, MotionController, PresetTable, ViewPreset};
use portfolio_scene::Camera;

fn start_camera() -> Camera {
    let mut camera = Camera::new(Vec3::new(0.0, 7.0, 0.0), 75.0, 16.0 / 9.0);
    camera.look_at(Vec3::new(0.0, 7.0, -2.0));
    camera
}

#[cfg(test)]
mod convergence_tests {
    use super::*;

    #[test]
    fn test_walk_forward_two_units_settles_on_frame_sixty() {
        let mut controller = MotionController::default();
        let mut camera = start_camera();
        controller.move_to(Vec3::new(0.0, 7.0, -2.0), Vec3::new(0.0, 7.0, -4.0));

        assert!(controller.update(&mut camera));
        assert!(
            (camera.position - Vec3::new(0.0, 7.0, -0.1)).length() < 1e-5,
            "First frame should close 5% of the gap, got {}",
            camera.position
        );

        for frame in 2..60 {
            assert!(controller.update(&mut camera), "Still moving on frame {}", frame);
        }
        assert!(!controller.update(&mut camera), "Should settle on frame 60");
        assert!(camera.position.distance(Vec3::new(0.0, 7.0, -2.0)) < 0.1);
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn test_distance_shrinks_every_frame() {
        let mut controller = MotionController::default();
        let mut camera = start_camera();
        let target = Vec3::new(4.0, 9.0, 6.0);
        controller.move_to(target, Vec3::new(0.0, 6.0, 0.0));

        let mut last = camera.position.distance(target);
        let mut frames = 0;
        while controller.update(&mut camera) {
            let now = camera.position.distance(target);
            assert!(now < last, "Distance grew from {} to {}", last, now);
            last = now;
            frames += 1;
            assert!(frames < 1000, "Move never settled");
        }
        assert!(camera.position.distance(target) < 0.1);
    }

    #[test]
    fn test_turns_to_face_target() {
        let mut controller = MotionController::default();
        let mut camera = start_camera();
        let look = Vec3::new(0.0, 6.0, 0.0);
        controller.move_to(Vec3::new(0.0, 7.0, 5.0), look);

        let mut frames = 0;
        while controller.update(&mut camera) {
            frames += 1;
            assert!(frames < 1000, "Move never settled");
        }

        let wanted = (look - camera.position).normalize();
        assert!(camera.forward().distance(wanted) < 0.02, "Facing {} wanted {}", camera.forward(), wanted);
    }

    #[test]
    fn test_settled_controller_is_idempotent() {
        let mut controller = MotionController::default();
        let mut camera = start_camera();
        controller.move_to(camera.position, camera.position + camera.forward());

        assert!(!controller.update(&mut camera), "Already there: stop on the first frame");
        let settled = camera;
        for _ in 0..5 {
            assert!(!controller.update(&mut camera));
        }
        assert_eq!(camera, settled);
    }
}

#[cfg(test)]
mod preset_tests {
    use super::*;

    #[test]
    fn test_preset_move_matches_direct_move() {
        let view = ViewPreset::new(Vec3::new(0.0, 7.3, 20.0), Vec3::new(0.0, 7.0, -1.0));
        let presets: PresetTable = [("screenView", view)].into_iter().collect();

        let mut by_name = MotionController::with_presets(MotionConfig::default(), presets).unwrap();
        let mut direct = MotionController::default();
        let (mut a, mut b) = (start_camera(), start_camera());

        assert_eq!(by_name.move_to_preset("screenView").unwrap(), view);
        direct.move_to(view.position, view.look_at);
        assert_eq!(by_name.state(), direct.state());

        for _ in 0..30 {
            by_name.update(&mut a);
            direct.update(&mut b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_preset_keeps_current_move() {
        let mut controller = MotionController::default();
        let mut camera = start_camera();
        controller.move_to(Vec3::new(0.0, 7.0, -2.0), Vec3::new(0.0, 7.0, -4.0));
        controller.update(&mut camera);

        assert!(controller.move_to_preset("building").is_err());
        assert!(controller.is_moving());
        assert_eq!(controller.state().target_position, Vec3::new(0.0, 7.0, -2.0));
    }

    #[test]
    fn test_retarget_mid_flight() {
        let mut controller = MotionController::default();
        let mut camera = start_camera();
        controller.move_to(Vec3::new(0.0, 7.0, -2.0), Vec3::new(0.0, 7.0, -4.0));
        for _ in 0..10 {
            controller.update(&mut camera);
        }

        let home = Vec3::new(0.0, 7.0, 5.0);
        controller.move_to(home, Vec3::new(0.0, 6.0, 0.0));
        let mut frames = 0;
        while controller.update(&mut camera) {
            frames += 1;
            assert!(frames < 1000, "Move never settled");
        }
        assert!(camera.position.distance(home) < 0.1);
    }
}

#[cfg(test)]
mod easing_tests {
    use super::*;

    #[test]
    fn test_time_corrected_long_frame_moves_further() {
        let config = MotionConfig {
            easing: Easing::TimeCorrected,
            ..Default::default()
        };
        let mut controller = MotionController::new(config).unwrap();
        let mut camera = start_camera();
        controller.move_to(Vec3::new(0.0, 7.0, -2.0), Vec3::new(0.0, 7.0, -4.0));

        // Two reference frames in one step
        controller.advance(&mut camera, 2.0 / 60.0);
        let expected = 2.0 * (1.0 - 0.95_f32 * 0.95);
        assert!((camera.position.z + expected).abs() < 1e-4, "Got {}", camera.position);
    }

    #[test]
    fn test_per_frame_ignores_delta() {
        let mut controller = MotionController::default();
        let mut camera = start_camera();
        controller.move_to(Vec3::new(0.0, 7.0, -2.0), Vec3::new(0.0, 7.0, -4.0));

        controller.advance(&mut camera, 0.5);
        assert!((camera.position.z + 0.1).abs() < 1e-5);
    }
}
