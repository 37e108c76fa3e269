mod graph;
mod mesh;
mod transform;

pub use graph::{Ancestors, Descendants, Node, NodeId, SceneError, SceneGraph};
pub use mesh::{Mesh, Shape, Side};
pub use transform::Transform;
