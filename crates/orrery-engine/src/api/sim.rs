use crate::api::types::{BodyId, SimEvent};
use crate::components::body::Body;
use crate::core::scene::Scene;
use crate::core::time::Playback;
use crate::core::transform::TransformGraph;
use crate::input::queue::ControlQueue;
use crate::renderer::camera::{Camera3D, Viewport};
use crate::systems::orbit::attach_orbit_chain;

/// Configuration for the engine, provided by the simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Initial overlay viewport width in pixels.
    pub viewport_width: f32,
    /// Initial overlay viewport height in pixels.
    pub viewport_height: f32,
    /// Capacity hint for the label buffer (default: 64).
    pub max_labels: usize,
    /// Capacity hint for sim events per frame (default: 32).
    pub max_events: usize,
    /// Whether angle accumulation starts enabled (default: true).
    pub start_playing: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_labels: 64,
            max_events: 32,
            start_playing: true,
        }
    }
}

/// The core contract every simulation must fulfill.
pub trait Simulation {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Set up initial state: spawn bodies, aim the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-tick hook. Apply control events, emit sim events.
    /// Orbital advancement and label projection run after this returns.
    fn update(&mut self, ctx: &mut EngineContext, controls: &ControlQueue);
}

/// Mutable access to engine state, passed to Simulation::init and
/// Simulation::update.
pub struct EngineContext {
    pub scene: Scene,
    pub graph: TransformGraph,
    pub playback: Playback,
    pub camera: Camera3D,
    pub viewport: Viewport,
    pub events: Vec<SimEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            graph: TransformGraph::new(),
            playback: Playback::default(),
            camera: Camera3D::default(),
            viewport: Viewport::new(800.0, 600.0),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique body ID.
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit an event to be forwarded to the UI collaborator.
    pub fn emit_event(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Spawn a body with its orbit chain attached. Returns the BodyId.
    /// The manifest validation guarantees `distance > 0` for bodies that
    /// reach this point.
    pub fn spawn_orbiting(&mut self, mut body: Body) -> BodyId {
        let nodes = attach_orbit_chain(&mut self.graph, &body);
        body.nodes = Some(nodes);
        let id = body.id;
        self.scene.spawn(body);
        id
    }

    /// Overwrite a body's axial-spin rate by name. Future spin accumulation
    /// only; position and revolution are untouched. Unknown names are
    /// logged and ignored.
    pub fn set_spin_rate(&mut self, name: &str, rate: f32) {
        match self.scene.find_by_name_mut(name) {
            Some(body) => body.spin_rate = rate,
            None => log::warn!("spin-rate update for unknown body {name:?}"),
        }
    }

    /// Overwrite a body's revolution rate by name. Unknown names are
    /// logged and ignored.
    pub fn set_revolution_rate(&mut self, name: &str, rate: f32) {
        match self.scene.find_by_name_mut(name) {
            Some(body) => body.revolution_rate = rate,
            None => log::warn!("revolution-rate update for unknown body {name:?}"),
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
