use std::collections::{HashMap, HashSet};

use glam::Vec2;
use log::{debug, warn};

use super::raycast::{nearest_intersection, Intersection};
use crate::camera::Camera;
use crate::scene::{NodeId, SceneGraph};

/// A click in viewport pixels, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerClick {
    pub x: f32,
    pub y: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl PointerClick {
    pub fn new(x: f32, y: f32, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            x,
            y,
            viewport_width,
            viewport_height,
        }
    }

    /// Normalized device coordinates, y up. `None` for an empty viewport or
    /// non-finite input.
    pub fn to_ndc(&self) -> Option<Vec2> {
        let finite = [self.x, self.y, self.viewport_width, self.viewport_height]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            (self.x / self.viewport_width) * 2.0 - 1.0,
            -(self.y / self.viewport_height) * 2.0 + 1.0,
        ))
    }
}

/// What a successful dispatch resolved to.
#[derive(Clone, Debug, PartialEq)]
pub struct PickResult<A> {
    /// The registered object that owns the primitive that was hit
    pub root: NodeId,
    pub hit: Intersection,
    pub handler: A,
}

/// Maps interactive scene objects to handler messages and resolves pointer
/// clicks to the nearest one.
///
/// Registered objects may be groups: every drawable in a registered
/// subtree is pickable, and a hit is attributed to its nearest registered
/// ancestor.
#[derive(Clone, Debug)]
pub struct HitRouter<A> {
    handlers: HashMap<NodeId, A>,
}

impl<A> Default for HitRouter<A> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<A: Clone> HitRouter<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn is_registered(&self, object: NodeId) -> bool {
        self.handlers.contains_key(&object)
    }

    pub fn handler(&self, object: NodeId) -> Option<&A> {
        self.handlers.get(&object)
    }

    /// Associate `handler` with `object`, returning any handler it replaced.
    pub fn register(&mut self, object: NodeId, handler: A) -> Option<A> {
        self.handlers.insert(object, handler)
    }

    pub fn unregister(&mut self, object: NodeId) -> Option<A> {
        self.handlers.remove(&object)
    }

    /// Drop registrations whose node no longer exists in `scene`.
    pub fn prune(&mut self, scene: &SceneGraph) -> usize {
        let before = self.handlers.len();
        self.handlers.retain(|&id, _| scene.contains(id));
        before - self.handlers.len()
    }

    /// Resolve a click to the nearest registered object and return its
    /// handler. Misses, an empty registry or an empty viewport yield `None`.
    pub fn dispatch(&self, click: PointerClick, camera: &Camera, scene: &mut SceneGraph) -> Option<PickResult<A>> {
        let (root, hit) = self.resolve(click, camera, scene)?;
        let handler = self.handlers.get(&root)?.clone();
        Some(PickResult { root, hit, handler })
    }

    /// Like [`dispatch`](Self::dispatch) but hands the handler to `on_hit`
    /// by reference.
    pub fn dispatch_with<R>(
        &self,
        click: PointerClick,
        camera: &Camera,
        scene: &mut SceneGraph,
        on_hit: impl FnOnce(&A) -> R,
    ) -> Option<R> {
        let (root, _) = self.resolve(click, camera, scene)?;
        self.handlers.get(&root).map(on_hit)
    }

    fn resolve(&self, click: PointerClick, camera: &Camera, scene: &mut SceneGraph) -> Option<(NodeId, Intersection)> {
        if self.handlers.is_empty() {
            return None;
        }

        let Some(ndc) = click.to_ndc() else {
            warn!(
                "ignoring click ({}, {}) in viewport {}x{}",
                click.x, click.y, click.viewport_width, click.viewport_height
            );
            return None;
        };

        // Transforms may have changed since the last refresh
        scene.update_world_matrices();

        let ray = camera.ray_from_ndc(ndc);
        let candidates = self.interactive_drawables(scene);
        let hit = nearest_intersection(scene, candidates, &ray)?;

        let Some(root) = self.owner_of(scene, hit.node) else {
            warn!("hit node {:?} has no registered ancestor", hit.node);
            return None;
        };

        debug!(
            "click ({:.3}, {:.3}) hit {:?} at {:.3} owned by {:?}",
            ndc.x, ndc.y, hit.node, hit.distance, root
        );
        Some((root, hit))
    }

    /// Every drawable in every registered subtree, each listed once.
    pub fn interactive_drawables(&self, scene: &SceneGraph) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        self.handlers
            .keys()
            .flat_map(|&root| scene.drawables_under(root))
            .filter(|&id| seen.insert(id))
            .collect()
    }

    /// Nearest registered node on the path from `node` (inclusive) to the root.
    pub fn owner_of(&self, scene: &SceneGraph, node: NodeId) -> Option<NodeId> {
        scene.ancestors(node).find(|id| self.handlers.contains_key(id))
    }
}
