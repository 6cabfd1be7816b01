use tracing::debug;

pub const PROGRESS_END: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Stale,
    Advanced(f64),
    /// Hit the end; progress is back at zero and playback stopped.
    Finished,
}

/// Fake audio scrubber. No audio is decoded; progress simply advances per tick.
#[derive(Debug, Default)]
pub struct PlaybackSim {
    playing: bool,
    progress: f64,
    generation: u64,
}

impl PlaybackSim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Percentage in `[0, 100)`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn play(&mut self) -> u64 {
        self.playing = true;
        self.generation += 1;
        debug!(progress = self.progress, "Playback simulation started");
        self.generation
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
        self.playing
    }

    pub fn on_tick(&mut self, generation: u64, step: f64) -> TickOutcome {
        if !self.playing || generation != self.generation {
            return TickOutcome::Stale;
        }

        self.progress += step;
        if self.progress >= PROGRESS_END {
            self.progress = 0.0;
            self.playing = false;
            debug!("Playback simulation reached the end");
            return TickOutcome::Finished;
        }

        TickOutcome::Advanced(self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f64 = 0.5;

    #[test]
    fn starts_stopped_at_zero() {
        let sim = PlaybackSim::new();
        assert!(!sim.is_playing());
        assert_eq!(sim.progress(), 0.0);
    }

    #[test]
    fn twenty_seconds_of_ticks_end_exactly_at_boundary() {
        let mut sim = PlaybackSim::new();
        let run = sim.play();

        let mut last = TickOutcome::Stale;
        for _ in 0..200 {
            last = sim.on_tick(run, STEP);
        }

        assert_eq!(last, TickOutcome::Finished);
        assert_eq!(sim.progress(), 0.0);
        assert!(!sim.is_playing());
    }

    #[test]
    fn one_tick_short_of_the_end_is_still_playing() {
        let mut sim = PlaybackSim::new();
        let run = sim.play();
        for _ in 0..199 {
            sim.on_tick(run, STEP);
        }
        assert_eq!(sim.progress(), 99.5);
        assert!(sim.is_playing());
    }

    #[test]
    fn paused_sim_ignores_ticks() {
        let mut sim = PlaybackSim::new();
        let run = sim.play();
        sim.on_tick(run, STEP);
        sim.pause();
        sim.pause();

        for _ in 0..10 {
            assert_eq!(sim.on_tick(run, STEP), TickOutcome::Stale);
        }
        assert_eq!(sim.progress(), 0.5);
    }

    #[test]
    fn resume_keeps_progress_but_rejects_old_ticks() {
        let mut sim = PlaybackSim::new();
        let first = sim.play();
        sim.on_tick(first, STEP);
        assert!(!sim.toggle());
        assert!(sim.toggle());

        assert_eq!(sim.on_tick(first, STEP), TickOutcome::Stale);
        assert_eq!(sim.on_tick(sim.generation(), STEP), TickOutcome::Advanced(1.0));
    }
}
