use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::Ray;
use crate::types::CameraUniform;

pub const DESKTOP_FOV_DEGREES: f32 = 75.0;
pub const MOBILE_FOV_DEGREES: f32 = 110.0;

const DEFAULT_NEAR: f32 = 0.1;
const DEFAULT_FAR: f32 = 1000.0;

/// Perspective camera stored as position plus yaw/pitch.
///
/// Yaw 0 faces +Z and yaw PI faces -Z; pitch is positive upward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(position: Vec3, fov_y_degrees: f32, aspect: f32) -> Self {
        Self {
            position,
            yaw: std::f32::consts::PI,
            pitch: 0.0,
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Horizontal right vector; stays defined when looking straight up or down.
    pub fn right(&self) -> Vec3 {
        Vec3::new(-self.yaw.cos(), 0.0, self.yaw.sin())
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Turn to face `target`. Keeps the current yaw when the target is
    /// directly above or below, and does nothing if it coincides with the
    /// camera position.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(dir) = (target - self.position).try_normalize() else {
            return;
        };

        self.pitch = dir.y.clamp(-1.0, 1.0).asin();
        if dir.x.abs() > 1e-6 || dir.z.abs() > 1e-6 {
            self.yaw = dir.x.atan2(dir.z);
        }
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Ray from the eye through a point in normalized device coordinates
    /// (x right, y up, both in [-1, 1]).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let half_height = (self.fov_y * 0.5).tan();
        let half_width = half_height * self.aspect;

        let direction = self.forward()
            + self.right() * (ndc.x * half_width)
            + self.up() * (ndc.y * half_height);

        Ray::new(self.position, direction)
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
            position: self.position.to_array(),
            _pad: 0.0,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DESKTOP_FOV_DEGREES, 16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn default_faces_negative_z() {
        let camera = Camera::default();
        assert!(approx(camera.forward(), Vec3::NEG_Z));
        assert!(approx(camera.right(), Vec3::X));
        assert!(approx(camera.up(), Vec3::Y));
    }

    #[test]
    fn look_at_sets_direction() {
        let mut camera = Camera::new(Vec3::new(0.0, 7.0, 0.0), DESKTOP_FOV_DEGREES, 1.0);
        camera.look_at(Vec3::new(3.0, 7.0, 0.0));
        assert!(approx(camera.forward(), Vec3::X));

        camera.look_at(Vec3::new(0.0, 8.0, -1.0));
        assert!(approx(camera.forward(), Vec3::new(0.0, 1.0, -1.0).normalize()));
    }

    #[test]
    fn look_straight_down_keeps_yaw() {
        let mut camera = Camera::new(Vec3::new(0.0, 7.0, 0.0), DESKTOP_FOV_DEGREES, 1.0);
        let yaw = camera.yaw;
        camera.look_at(Vec3::new(0.0, 6.0, 0.0));

        assert_eq!(camera.yaw, yaw);
        assert!(approx(camera.forward(), Vec3::NEG_Y));
        assert!(camera.up().is_finite());
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn look_at_own_position_is_ignored() {
        let mut camera = Camera::default();
        let before = camera;
        camera.look_at(camera.position);
        assert_eq!(camera, before);
    }

    #[test]
    fn center_ray_follows_forward() {
        let camera = Camera::new(Vec3::new(0.0, 7.0, 5.0), DESKTOP_FOV_DEGREES, 1.5);
        let ray = camera.ray_from_ndc(Vec2::ZERO);
        assert_eq!(ray.origin, camera.position);
        assert!(approx(ray.direction, Vec3::NEG_Z));
    }

    #[test]
    fn corner_ray_lands_on_frustum_edge() {
        // 90 degree fov, square aspect: top-right corner ray is (1, 1, -1)
        let camera = Camera::new(Vec3::ZERO, 90.0, 1.0);
        let ray = camera.ray_from_ndc(Vec2::ONE);
        assert!(approx(ray.direction, Vec3::new(1.0, 1.0, -1.0).normalize()));
    }

    #[test]
    fn ndc_ray_projects_back_to_ndc() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), DESKTOP_FOV_DEGREES, 16.0 / 9.0);
        let ndc = Vec2::new(0.3, -0.6);
        let point = camera.ray_from_ndc(ndc).at(10.0);

        let projected = (camera.projection_matrix() * camera.view_matrix()).project_point3(point);
        assert!((projected.x - ndc.x).abs() < 1e-4);
        assert!((projected.y - ndc.y).abs() < 1e-4);
    }

    #[test]
    fn set_aspect_ignores_empty_viewport() {
        let mut camera = Camera::default();
        camera.set_aspect(800.0, 0.0);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
        camera.set_aspect(800.0, 400.0);
        assert!((camera.aspect - 2.0).abs() < 1e-6);
    }
}
