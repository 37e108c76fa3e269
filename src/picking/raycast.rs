use glam::Vec3;

use crate::math::Ray;
use crate::scene::{NodeId, SceneGraph};

/// A ray hitting one drawable node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub node: NodeId,
    /// Distance from the ray origin in world units
    pub distance: f32,
    pub point: Vec3,
}

/// Test a world-space ray against the mesh on `id`, using the node's cached
/// world matrix. Nodes without a mesh, missing nodes and degenerate
/// (zero-scale) transforms never hit.
pub fn intersect_node(scene: &SceneGraph, id: NodeId, ray: &Ray) -> Option<Intersection> {
    let node = scene.node(id)?;
    let mesh = node.mesh()?;

    let world = node.world_matrix();
    if world.determinant().abs() < 1e-12 {
        return None;
    }

    let local_ray = ray.transformed(&world.inverse());
    let distance = mesh.intersect(&local_ray)?;

    Some(Intersection {
        node: id,
        distance,
        point: ray.at(distance),
    })
}

/// All hits against `nodes`, nearest first.
pub fn intersect_nodes(
    scene: &SceneGraph,
    nodes: impl IntoIterator<Item = NodeId>,
    ray: &Ray,
) -> Vec<Intersection> {
    let mut hits: Vec<Intersection> = nodes
        .into_iter()
        .filter_map(|id| intersect_node(scene, id, ray))
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Nearest hit against `nodes`.
pub fn nearest_intersection(
    scene: &SceneGraph,
    nodes: impl IntoIterator<Item = NodeId>,
    ray: &Ray,
) -> Option<Intersection> {
    nodes
        .into_iter()
        .filter_map(|id| intersect_node(scene, id, ray))
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
