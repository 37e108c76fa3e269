//! Pointer picking: screen clicks to registered scene objects.

mod raycast;
mod router;

pub use raycast::{intersect_node, intersect_nodes, nearest_intersection, Intersection};
pub use router::{HitRouter, PickResult, PointerClick};
