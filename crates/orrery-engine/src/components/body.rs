use glam::{Quat, Vec3};
use crate::api::types::BodyId;
use crate::core::transform::NodeId;

/// Handles of the three-node chain carrying one body's orbit:
/// orbital-plane node → revolution-pivot node → body node.
#[derive(Debug, Clone, Copy)]
pub struct OrbitNodes {
    pub plane: NodeId,
    pub pivot: NodeId,
    pub body: NodeId,
}

/// Fat body struct — orbital parameters, angle accumulators, and the world
/// transform written back by propagation each tick.
/// Designed for simplicity over ECS purity.
#[derive(Debug, Clone)]
pub struct Body {
    /// Unique identifier.
    pub id: BodyId,
    /// Unique display name, stable for the process lifetime.
    pub name: String,
    /// Whether this body is active (inactive bodies are skipped by systems).
    pub active: bool,
    /// Visual radius in world units.
    pub radius: f32,
    /// Orbital radius — fixed offset from the revolution pivot. Must be > 0.
    pub distance: f32,
    /// Revolution angular velocity in radians per tick. Sign gives direction.
    pub revolution_rate: f32,
    /// Axial-spin angular velocity in radians per tick. Sign gives direction.
    pub spin_rate: f32,
    /// Orbital-plane tilt in radians. Immutable after construction.
    pub inclination: f32,
    /// Orbital-plane rotation about the reference normal, in radians.
    /// Immutable after construction.
    pub ascending_node: f32,
    /// Revolution accumulator, normalized into [0, 2π).
    pub revolution_angle: f32,
    /// Spin accumulator, normalized into [0, 2π). Affects orientation only.
    pub spin_angle: f32,
    /// World position, written back by transform propagation.
    pub pos: Vec3,
    /// World orientation, written back by transform propagation.
    pub orientation: Quat,
    /// Transform-chain handles, set when the body is attached to the hierarchy.
    pub nodes: Option<OrbitNodes>,
}

impl Body {
    /// Create a new body with the given ID and name, at rest at the origin.
    pub fn new(id: BodyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
            radius: 1.0,
            distance: 1.0,
            revolution_rate: 0.0,
            spin_rate: 0.0,
            inclination: 0.0,
            ascending_node: 0.0,
            revolution_angle: 0.0,
            spin_angle: 0.0,
            pos: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            nodes: None,
        }
    }

    // -- Builder pattern --

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_rates(mut self, revolution_rate: f32, spin_rate: f32) -> Self {
        self.revolution_rate = revolution_rate;
        self.spin_rate = spin_rate;
        self
    }

    pub fn with_inclination(mut self, inclination: f32) -> Self {
        self.inclination = inclination;
        self
    }

    pub fn with_ascending_node(mut self, ascending_node: f32) -> Self {
        self.ascending_node = ascending_node;
        self
    }
}
