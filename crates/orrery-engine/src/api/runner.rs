use crate::api::sim::{EngineContext, SimConfig, Simulation};
use crate::api::types::SimEvent;
use crate::core::time::{FixedTimestep, Playback};
use crate::input::queue::{ControlEvent, ControlQueue};
use crate::renderer::camera::Viewport;
use crate::renderer::labels::{LabelBuffer, LabelInstance};
use crate::systems::labels::build_label_buffer;
use crate::systems::orbit::tick_orbits;

/// Generic driver that wires up the engine loop.
///
/// One tick = fixed-timestep simulation steps (update + orbital advance)
/// followed by a label-buffer rebuild. Projection runs every tick whether
/// or not playback is active, so a paused scene stays interactive.
pub struct SimRunner<S: Simulation> {
    sim: S,
    ctx: EngineContext,
    controls: ControlQueue,
    labels: LabelBuffer,
    timestep: FixedTimestep,
    config: SimConfig,
    initialized: bool,
}

impl<S: Simulation> SimRunner<S> {
    pub fn new(sim: S) -> Self {
        let config = sim.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let labels = LabelBuffer::with_capacity(config.max_labels);

        let mut ctx = EngineContext::new();
        ctx.viewport = Viewport::new(config.viewport_width, config.viewport_height);
        ctx.playback = Playback::new(config.start_playing);
        ctx.events = Vec::with_capacity(config.max_events);

        Self {
            sim,
            ctx,
            controls: ControlQueue::new(),
            labels,
            timestep,
            config,
            initialized: false,
        }
    }

    /// Initialize the simulation. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.sim.config();
        self.ctx.viewport = Viewport::new(self.config.viewport_width, self.config.viewport_height);
        self.ctx.playback = Playback::new(self.config.start_playing);
        self.sim.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push a control event into the queue.
    pub fn push_control(&mut self, event: ControlEvent) {
        self.controls.push(event);
    }

    /// Run one frame tick: update the simulation, advance orbits, rebuild
    /// the label buffer.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.sim.update(&mut self.ctx, &self.controls);
            let playing = self.ctx.playback.is_playing();
            tick_orbits(&mut self.ctx.scene, &mut self.ctx.graph, playing);
        }

        // Drain input after update
        self.controls.drain();

        let view_proj = self.ctx.camera.view_projection(self.ctx.viewport);
        build_label_buffer(
            self.ctx.scene.iter(),
            &view_proj,
            self.ctx.viewport,
            &mut self.labels,
        );
    }

    /// The label buffer produced by the most recent tick.
    pub fn labels(&self) -> &LabelBuffer {
        &self.labels
    }

    /// Look up the most recent label record for a body by name.
    pub fn label_for(&self, name: &str) -> Option<LabelInstance> {
        let index = self.ctx.scene.iter().position(|b| b.name == name)?;
        self.labels
            .instances
            .iter()
            .copied()
            .find(|l| l.body == index as f32)
    }

    /// Events emitted by the simulation during the most recent tick.
    pub fn events(&self) -> &[SimEvent] {
        &self.ctx.events
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }

    pub fn viewport(&self) -> Viewport {
        self.ctx.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::Body;

    const DT: f32 = 1.0 / 60.0;

    /// Minimal simulation: one body, standard control handling.
    struct OneBody;

    impl Simulation for OneBody {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.spawn_orbiting(
                Body::new(id, "Earth")
                    .with_radius(3.2)
                    .with_distance(45.0)
                    .with_rates(0.01, 0.02),
            );
        }

        fn update(&mut self, ctx: &mut EngineContext, controls: &ControlQueue) {
            for event in controls.iter() {
                match event {
                    ControlEvent::SetSpinRate { body, rate } => ctx.set_spin_rate(body, *rate),
                    ControlEvent::TogglePlayback => ctx.playback.toggle(),
                    ControlEvent::SetViewport { width, height } => {
                        ctx.viewport = Viewport::new(*width, *height);
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn tick_advances_revolution_per_fixed_step() {
        let mut runner = SimRunner::new(OneBody);
        runner.init();

        for _ in 0..100 {
            runner.tick(DT);
        }

        let body = runner.context().scene.find_by_name("Earth").unwrap();
        assert!(
            (body.revolution_angle - 1.0).abs() < 1e-4,
            "revolution_angle = {}",
            body.revolution_angle
        );
    }

    #[test]
    fn toggle_playback_freezes_angles_but_labels_still_build() {
        let mut runner = SimRunner::new(OneBody);
        runner.init();
        runner.tick(DT);

        runner.push_control(ControlEvent::TogglePlayback);
        runner.tick(DT);
        let frozen = runner
            .context()
            .scene
            .find_by_name("Earth")
            .unwrap()
            .revolution_angle;

        for _ in 0..30 {
            runner.tick(DT);
        }

        let body = runner.context().scene.find_by_name("Earth").unwrap();
        assert_eq!(body.revolution_angle, frozen);
        assert_eq!(runner.labels().instance_count(), 1);
        assert_eq!(runner.label_for("Earth").unwrap().visible, 1.0);
    }

    #[test]
    fn spin_rate_control_event_reaches_the_body() {
        let mut runner = SimRunner::new(OneBody);
        runner.init();

        runner.push_control(ControlEvent::SetSpinRate {
            body: "Earth".into(),
            rate: 0.07,
        });
        runner.tick(DT);

        let body = runner.context().scene.find_by_name("Earth").unwrap();
        assert_eq!(body.spin_rate, 0.07);
        assert_eq!(body.revolution_rate, 0.01);
    }

    #[test]
    fn zero_viewport_hides_labels_until_restored() {
        let mut runner = SimRunner::new(OneBody);
        runner.init();

        runner.push_control(ControlEvent::SetViewport {
            width: 0.0,
            height: 0.0,
        });
        runner.tick(DT);
        assert_eq!(runner.label_for("Earth").unwrap().visible, 0.0);

        runner.push_control(ControlEvent::SetViewport {
            width: 800.0,
            height: 600.0,
        });
        runner.tick(DT);
        assert_eq!(runner.label_for("Earth").unwrap().visible, 1.0);
    }

    #[test]
    fn controls_drain_after_tick() {
        let mut runner = SimRunner::new(OneBody);
        runner.init();
        runner.push_control(ControlEvent::TogglePlayback);
        runner.tick(DT);
        runner.tick(DT);
        // A drained toggle must not flip playback again.
        assert!(!runner.context().playback.is_playing());
    }
}
