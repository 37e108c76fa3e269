mod aabb;
mod ray;
mod sphere;
mod triangle;

pub use aabb::Aabb;
pub use ray::{intersect_aabb, Ray};
pub use sphere::intersect_sphere;
pub use triangle::{intersect_triangle, TriangleHit};
