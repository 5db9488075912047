//! Headless driver loop: wait for the next frame signal, advance one tick,
//! emit label placements for the overlay consumer. Runs until the host
//! stops the process.

mod bodies;
mod game;

use std::time::{Duration, Instant};

use orrery_engine::SimRunner;

use crate::game::StarSystem;

/// Frame signal cadence (~60 Hz).
const FRAME: Duration = Duration::from_millis(16);
/// Log label placements every this many frames.
const REPORT_EVERY: u64 = 120;

fn main() {
    env_logger::init();

    let sim = match StarSystem::new() {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let mut runner = SimRunner::new(sim);
    runner.init();

    let mut last = Instant::now();
    let mut frame: u64 = 0;
    loop {
        std::thread::sleep(FRAME);
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        runner.tick(dt);
        frame += 1;

        if frame % REPORT_EVERY == 0 {
            report_labels(&runner);
        }
    }
}

fn report_labels(runner: &SimRunner<StarSystem>) {
    let scene = &runner.context().scene;
    for label in &runner.labels().instances {
        let name = scene
            .iter()
            .nth(label.body as usize)
            .map(|b| b.name.as_str())
            .unwrap_or("?");
        if label.visible > 0.5 {
            log::info!("{name}: ({:.0}, {:.0})", label.x, label.y);
        } else {
            log::info!("{name}: hidden");
        }
    }
}
