//! Star system simulation — the eight planets on inclined, precessing
//! circular orbits, with playback and rate controls wired to the engine.

use orrery_engine::{
    Body, ControlEvent, ControlQueue, EngineContext, ManifestError, SimConfig, SimEvent,
    Simulation, SystemManifest, Viewport,
};

use crate::bodies;

// ── Sim event kinds to the UI layer ─────────────────────────────────

/// a = tick count, b = 1.0 while playing.
pub const EVENT_TIME_INFO: f32 = 1.0;

// ── Viewport defaults ───────────────────────────────────────────────

const VIEWPORT_W: f32 = 1280.0;
const VIEWPORT_H: f32 = 720.0;

pub struct StarSystem {
    manifest: SystemManifest,
    /// Ticks elapsed with playback active.
    ticks: u64,
}

impl StarSystem {
    /// Build the simulation from the static body table, failing fast on a
    /// configuration that violates the construction-time contract.
    pub fn new() -> Result<Self, ManifestError> {
        Self::from_manifest(bodies::system_manifest())
    }

    pub fn from_manifest(manifest: SystemManifest) -> Result<Self, ManifestError> {
        manifest.validate()?;
        Ok(Self { manifest, ticks: 0 })
    }
}

impl Simulation for StarSystem {
    fn config(&self) -> SimConfig {
        SimConfig {
            viewport_width: VIEWPORT_W,
            viewport_height: VIEWPORT_H,
            max_labels: self.manifest.bodies.len().max(1),
            ..SimConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        for (index, desc) in self.manifest.bodies.iter().enumerate() {
            let id = ctx.next_id();
            ctx.spawn_orbiting(
                Body::new(id, desc.name.clone())
                    .with_radius(desc.radius)
                    .with_distance(desc.distance)
                    .with_rates(desc.revolution_rate, desc.spin_rate)
                    .with_inclination(desc.inclination())
                    .with_ascending_node(desc.ascending_node(index)),
            );
        }

        log::info!(
            "spawned {} bodies around {}",
            ctx.scene.len(),
            self.manifest.star.name
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, controls: &ControlQueue) {
        for event in controls.iter() {
            match event {
                ControlEvent::SetSpinRate { body, rate } => ctx.set_spin_rate(body, *rate),
                ControlEvent::SetRevolutionRate { body, rate } => {
                    ctx.set_revolution_rate(body, *rate)
                }
                ControlEvent::TogglePlayback => ctx.playback.toggle(),
                ControlEvent::SetViewport { width, height } => {
                    ctx.viewport = Viewport::new(*width, *height)
                }
                ControlEvent::OrbitCamera { dx, dy } => ctx.camera.orbit(*dx, *dy),
                ControlEvent::ZoomCamera { delta } => ctx.camera.zoom(*delta),
            }
        }

        if ctx.playback.is_playing() {
            self.ticks += 1;
        }

        ctx.emit_event(SimEvent {
            kind: EVENT_TIME_INFO,
            a: self.ticks as f32,
            b: if ctx.playback.is_playing() { 1.0 } else { 0.0 },
            c: 0.0,
        });
    }
}
