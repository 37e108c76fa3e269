use glam::Mat4;
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

use super::{Mesh, Transform};

new_key_type! {
    /// Handle to a node in a [`SceneGraph`]. Stale handles (removed nodes)
    /// are detected rather than aliased.
    pub struct NodeId;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("node {0:?} is not in the scene")]
    UnknownNode(NodeId),
    #[error("cannot copy {subtree:?} under {parent:?}, which lies inside it")]
    CycleDetected { subtree: NodeId, parent: NodeId },
}

#[derive(Clone, Debug)]
pub struct Node {
    name: String,
    transform: Transform,
    mesh: Option<Mesh>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    // Cached; only refreshed by `update_world_matrices`
    world: Mat4,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    pub fn is_drawable(&self) -> bool {
        self.mesh.is_some()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Last computed world matrix. May lag behind `transform` until the
    /// next `SceneGraph::update_world_matrices`.
    pub fn world_matrix(&self) -> Mat4 {
        self.world
    }
}

/// Arena-backed scene tree with explicit parent links.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, Node>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Insert a node under `parent`, or as a new root when `parent` is `None`.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        transform: Transform,
        mesh: Option<Mesh>,
        parent: Option<NodeId>,
    ) -> Result<NodeId, SceneError> {
        let parent_world = match parent {
            Some(parent_id) => self
                .nodes
                .get(parent_id)
                .map(|p| p.world)
                .ok_or(SceneError::UnknownNode(parent_id))?,
            None => Mat4::IDENTITY,
        };

        let id = self.nodes.insert(Node {
            name: name.into(),
            transform,
            mesh,
            parent,
            children: Vec::new(),
            world: parent_world * transform.to_matrix(),
        });

        match parent {
            Some(parent_id) => self.nodes[parent_id].children.push(id),
            None => self.roots.push(id),
        }

        Ok(id)
    }

    /// Replace the local transform. The cached world matrix is left stale.
    pub fn set_transform(&mut self, id: NodeId, transform: Transform) -> Result<(), SceneError> {
        let node = self.nodes.get_mut(id).ok_or(SceneError::UnknownNode(id))?;
        node.transform = transform;
        Ok(())
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> Result<(), SceneError> {
        let node = self.nodes.get_mut(id).ok_or(SceneError::UnknownNode(id))?;
        node.name = name.into();
        Ok(())
    }

    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find_map(|(id, node)| (node.name == name).then_some(id))
    }

    /// Pre-order walk of `id` and everything below it.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = if self.nodes.contains_key(id) { vec![id] } else { Vec::new() };
        Descendants { scene: self, stack }
    }

    /// Nodes carrying a mesh in the subtree rooted at `id` (inclusive).
    pub fn drawables_under(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(id).filter(|&n| self.nodes[n].is_drawable())
    }

    /// `id` followed by its parent chain up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            scene: self,
            next: self.nodes.contains_key(id).then_some(id),
        }
    }

    /// Recompute every cached world matrix from the roots down.
    pub fn update_world_matrices(&mut self) {
        let mut stack: Vec<(NodeId, Mat4)> = self.roots.iter().map(|&r| (r, Mat4::IDENTITY)).collect();

        while let Some((id, parent_world)) = stack.pop() {
            let node = &mut self.nodes[id];
            node.world = parent_world * node.transform.to_matrix();
            let world = node.world;
            stack.extend(node.children.iter().map(|&c| (c, world)));
        }
    }

    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        self.nodes.get(id).map(Node::world_matrix)
    }

    /// Remove `id` and its whole subtree.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), SceneError> {
        let parent = self.nodes.get(id).ok_or(SceneError::UnknownNode(id))?.parent;

        match parent {
            Some(parent_id) => {
                if let Some(p) = self.nodes.get_mut(parent_id) {
                    p.children.retain(|&c| c != id);
                }
            }
            None => self.roots.retain(|&r| r != id),
        }

        let doomed: Vec<NodeId> = self.descendants(id).collect();
        for node in doomed {
            self.nodes.remove(node);
        }
        Ok(())
    }

    /// Deep copy of the subtree at `source`, attached under `parent`. The
    /// copy starts with the source's local transform; callers reposition it.
    /// `parent` may not be `source` or one of its descendants.
    pub fn clone_subtree(&mut self, source: NodeId, parent: Option<NodeId>) -> Result<NodeId, SceneError> {
        if let Some(parent) = parent {
            if self.ancestors(parent).any(|a| a == source) {
                return Err(SceneError::CycleDetected { subtree: source, parent });
            }
        }
        self.copy_subtree(source, parent)
    }

    fn copy_subtree(&mut self, source: NodeId, parent: Option<NodeId>) -> Result<NodeId, SceneError> {
        let node = self.nodes.get(source).ok_or(SceneError::UnknownNode(source))?;
        let (name, transform, mesh) = (node.name.clone(), node.transform, node.mesh.clone());
        let children = node.children.clone();

        let copy = self.add_node(name, transform, mesh, parent)?;
        for child in children {
            self.copy_subtree(child, Some(copy))?;
        }
        Ok(copy)
    }
}

pub struct Descendants<'a> {
    scene: &'a SceneGraph,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.scene.nodes.get(id) {
            self.stack.extend(node.children.iter().rev());
        }
        Some(id)
    }
}

pub struct Ancestors<'a> {
    scene: &'a SceneGraph,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.scene.parent(id);
        Some(id)
    }
}
