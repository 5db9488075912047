// core/transform.rs
//
// Transform hierarchy — an arena of nodes indexed by handle.
// Each node owns a local rotation + translation; world transforms are
// composed root-to-leaf by `propagate`, guarded by a dirty flag.
//
// Ownership is strictly tree-shaped: nodes are created with `insert` (root)
// or `insert_child`, and are never removed for the lifetime of the graph.

use glam::{Affine3A, Quat, Vec3};

/// Handle of a node in the transform arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Local transform data for a node in the hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct LocalTransform {
    /// Rotation relative to parent.
    pub rotation: Quat,
    /// Translation relative to parent, applied in the rotated frame's parent.
    pub translation: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            translation: Vec3::ZERO,
        }
    }
}

impl LocalTransform {
    pub fn new(rotation: Quat, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            translation: Vec3::ZERO,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            rotation: Quat::IDENTITY,
            translation,
        }
    }

    fn affine(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.rotation, self.translation)
    }
}

#[derive(Debug, Clone)]
struct TransformNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: LocalTransform,
    world: Affine3A,
}

/// Transform hierarchy graph over an arena of nodes.
#[derive(Debug, Default)]
pub struct TransformGraph {
    nodes: Vec<TransformNode>,
    /// Nodes with no parent (top-level).
    roots: Vec<NodeId>,
    /// Set when any local transform or the topology changes, cleared after propagate.
    dirty: bool,
}

impl TransformGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root node with the given local transform.
    pub fn insert(&mut self, local: LocalTransform) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TransformNode {
            parent: None,
            children: Vec::new(),
            local,
            world: local.affine(),
        });
        self.roots.push(id);
        self.dirty = true;
        id
    }

    /// Insert a node as a child of `parent`.
    pub fn insert_child(&mut self, parent: NodeId, local: LocalTransform) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TransformNode {
            parent: Some(parent),
            children: Vec::new(),
            local,
            world: Affine3A::IDENTITY,
        });
        self.nodes[parent.0 as usize].children.push(id);
        self.dirty = true;
        id
    }

    /// Set the local transform of a node.
    pub fn set_local(&mut self, id: NodeId, local: LocalTransform) {
        self.nodes[id.0 as usize].local = local;
        self.dirty = true;
    }

    /// Set only the local rotation of a node, keeping its translation.
    pub fn set_rotation(&mut self, id: NodeId, rotation: Quat) {
        self.nodes[id.0 as usize].local.rotation = rotation;
        self.dirty = true;
    }

    /// Get the local transform of a node.
    pub fn local(&self, id: NodeId) -> &LocalTransform {
        &self.nodes[id.0 as usize].local
    }

    /// Get the parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0 as usize].parent
    }

    /// Get the children of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0 as usize].children
    }

    /// World transform of a node, as of the last `propagate`.
    pub fn world_transform(&self, id: NodeId) -> Affine3A {
        self.nodes[id.0 as usize].world
    }

    /// World position of a node, as of the last `propagate`.
    pub fn world_position(&self, id: NodeId) -> Vec3 {
        Vec3::from(self.nodes[id.0 as usize].world.translation)
    }

    /// Recompute world transforms from roots down through the hierarchy.
    /// No-op if nothing changed since the last call.
    pub fn propagate(&mut self) {
        if !self.dirty {
            return;
        }

        let roots: Vec<NodeId> = self.roots.clone();
        for root in roots {
            self.propagate_recursive(root, Affine3A::IDENTITY);
        }

        self.dirty = false;
    }

    fn propagate_recursive(&mut self, id: NodeId, parent_world: Affine3A) {
        let idx = id.0 as usize;
        let world = parent_world * self.nodes[idx].local.affine();
        self.nodes[idx].world = world;

        let children: Vec<NodeId> = self.nodes[idx].children.clone();
        for child in children {
            self.propagate_recursive(child, world);
        }
    }

    /// Check if the hierarchy has pending changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of nodes in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
