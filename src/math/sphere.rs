use glam::Vec3;

/// Ray/sphere test. `ray_dir` does not need to be unit length; the returned
/// parameter is in units of `ray_dir`.
///
/// Returns the entry parameter, or the exit parameter when the origin is
/// inside and `allow_inside` is set.
pub fn intersect_sphere(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    radius: f32,
    allow_inside: bool,
) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_dir.dot(ray_dir);
    if a <= f32::EPSILON {
        return None;
    }
    let half_b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t = (-half_b - sqrt_d) / a;
    if t > 1e-4 {
        return Some(t);
    }

    let t = (-half_b + sqrt_d) / a;
    (allow_inside && t > 1e-4).then_some(t)
}
