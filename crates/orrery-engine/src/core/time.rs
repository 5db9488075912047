/// Fixed timestep accumulator.
/// Ensures simulation ticks run at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Playback gate for angle accumulation.
///
/// Pausing freezes the orbital/spin accumulators only — propagation and
/// label projection keep running every tick so a paused scene stays
/// interactive.
#[derive(Debug, Clone, Copy)]
pub struct Playback {
    playing: bool,
}

impl Playback {
    pub fn new(playing: bool) -> Self {
        Self { playing }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self { playing: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(0.008); // half a frame
        assert_eq!(steps, 0);
        let steps = ts.accumulate(0.010); // over one frame total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0); // 60 frames worth, but capped at 10
        assert_eq!(steps, 10);
    }

    #[test]
    fn playback_toggle_round_trips() {
        let mut playback = Playback::default();
        assert!(playback.is_playing());
        playback.toggle();
        assert!(!playback.is_playing());
        playback.toggle();
        assert!(playback.is_playing());
    }

    #[test]
    fn pause_and_resume() {
        let mut playback = Playback::new(true);
        playback.pause();
        assert!(!playback.is_playing());
        playback.resume();
        assert!(playback.is_playing());
    }
}
