use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::{intersect_aabb, intersect_sphere, intersect_triangle, Aabb, Ray};

/// Which faces of a mesh can be picked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Only surfaces facing the ray origin; clicks from inside a closed shape pass through
    #[default]
    Front,
    Double,
}

/// Pickable geometry in node-local space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Box(Aabb),
    Sphere { center: Vec3, radius: f32 },
    Triangles(Vec<[Vec3; 3]>),
}

/// Drawable primitive attached to a scene node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub shape: Shape,
    #[serde(default)]
    pub side: Side,
}

impl Mesh {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            side: Side::Front,
        }
    }

    pub fn cuboid(size: Vec3) -> Self {
        Self::new(Shape::Box(Aabb::from_center_size(Vec3::ZERO, size)))
    }

    pub fn sphere(radius: f32) -> Self {
        Self::new(Shape::Sphere {
            center: Vec3::ZERO,
            radius,
        })
    }

    /// Axis-aligned quad in the local XY plane facing +Z.
    pub fn quad(width: f32, height: f32) -> Self {
        let (hw, hh) = (width * 0.5, height * 0.5);
        let a = Vec3::new(-hw, -hh, 0.0);
        let b = Vec3::new(hw, -hh, 0.0);
        let c = Vec3::new(hw, hh, 0.0);
        let d = Vec3::new(-hw, hh, 0.0);
        Self::new(Shape::Triangles(vec![[a, b, c], [a, c, d]]))
    }

    pub fn double_sided(mut self) -> Self {
        self.side = Side::Double;
        self
    }

    /// Nearest hit parameter along a ray already expressed in this mesh's
    /// local space.
    pub fn intersect(&self, local_ray: &Ray) -> Option<f32> {
        if local_ray.direction == Vec3::ZERO {
            return None;
        }
        let double = self.side == Side::Double;
        match &self.shape {
            Shape::Box(aabb) => {
                if !double && aabb.contains(local_ray.origin) {
                    return None;
                }
                intersect_aabb(local_ray.origin, local_ray.direction, aabb.min, aabb.max)
            }
            Shape::Sphere { center, radius } => {
                intersect_sphere(local_ray.origin, local_ray.direction, *center, *radius, double)
            }
            Shape::Triangles(triangles) => triangles
                .iter()
                .filter_map(|&tri| intersect_triangle(local_ray.origin, local_ray.direction, tri, !double))
                .map(|hit| hit.t)
                .min_by(f32::total_cmp),
        }
    }
}
