use std::time::Instant;

use tracing::debug;

use super::{ReaderConfig, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Frame belongs to a stopped or superseded run.
    Stale,
    /// Throttled, or the frame only set the timing baseline.
    Skipped,
    Advanced(f64),
    /// Speed is zero; running but not moving.
    Idle,
    ReachedBottom,
}

/// Auto-scroll run state. The frame source is external: whoever schedules frames
/// feeds them through [`AutoScroll::on_frame`] tagged with the generation they
/// were scheduled for.
#[derive(Debug, Default)]
pub struct AutoScroll {
    running: bool,
    generation: u64,
    last_frame: Option<Instant>,
}

impl AutoScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begins a fresh run. Frames from any earlier run become stale.
    pub fn start(&mut self) -> u64 {
        self.running = true;
        self.generation += 1;
        self.last_frame = None;
        debug!(generation = self.generation, "Auto-scroll started");
        self.generation
    }

    /// Safe to call any number of times.
    pub fn stop(&mut self) {
        if self.running {
            debug!(generation = self.generation, "Auto-scroll stopped");
        }
        self.running = false;
        self.last_frame = None;
    }

    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    pub fn on_frame(
        &mut self,
        generation: u64,
        now: Instant,
        speed: i32,
        viewport: &mut Viewport,
        config: &ReaderConfig,
    ) -> FrameOutcome {
        if !self.running || generation != self.generation {
            return FrameOutcome::Stale;
        }

        let Some(last) = self.last_frame else {
            self.last_frame = Some(now);
            return FrameOutcome::Skipped;
        };

        if now.saturating_duration_since(last) < config.frame_throttle {
            return FrameOutcome::Skipped;
        }
        self.last_frame = Some(now);

        if viewport.is_at_bottom(config.bottom_tolerance) {
            self.stop();
            return FrameOutcome::ReachedBottom;
        }

        if speed <= 0 {
            return FrameOutcome::Idle;
        }

        let step = config.scroll_units_per_speed * f64::from(speed);
        viewport.scroll_by(step);
        FrameOutcome::Advanced(step)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_frame_only_sets_baseline() {
        let config = ReaderConfig::default();
        let mut vp = Viewport::new(1000.0, 100.0);
        let mut scroll = AutoScroll::new();
        let run = scroll.start();

        let t0 = Instant::now();
        assert_eq!(scroll.on_frame(run, t0, 3, &mut vp, &config), FrameOutcome::Skipped);
        assert_eq!(vp.offset(), 0.0);
    }

    #[test]
    fn speed_three_moves_point_nine_per_processed_frame() {
        let config = ReaderConfig::default();
        let mut vp = Viewport::new(1000.0, 100.0);
        let mut scroll = AutoScroll::new();
        let run = scroll.start();

        let t0 = Instant::now();
        scroll.on_frame(run, t0, 3, &mut vp, &config);

        for i in 1..=10u32 {
            let before = vp.offset();
            let outcome = scroll.on_frame(run, t0 + FRAME * i, 3, &mut vp, &config);
            let FrameOutcome::Advanced(step) = outcome else {
                panic!("expected movement, got {outcome:?}");
            };
            assert!(close(step, 0.9));
            assert!(close(vp.offset() - before, 0.9));
        }
        assert!(close(vp.offset(), 9.0));
    }

    #[test]
    fn frames_closer_than_throttle_are_skipped() {
        let config = ReaderConfig::default();
        let mut vp = Viewport::new(1000.0, 100.0);
        let mut scroll = AutoScroll::new();
        let run = scroll.start();

        let t0 = Instant::now();
        scroll.on_frame(run, t0, 5, &mut vp, &config);
        let early = t0 + Duration::from_millis(8);
        assert_eq!(scroll.on_frame(run, early, 5, &mut vp, &config), FrameOutcome::Skipped);
        assert_eq!(vp.offset(), 0.0);

        let on_time = t0 + FRAME;
        assert!(matches!(
            scroll.on_frame(run, on_time, 5, &mut vp, &config),
            FrameOutcome::Advanced(_)
        ));
    }

    #[test]
    fn terminates_immediately_when_already_at_bottom() {
        let config = ReaderConfig::default();
        let mut vp = Viewport::new(100.0, 100.0);
        let mut scroll = AutoScroll::new();
        let run = scroll.start();

        let t0 = Instant::now();
        scroll.on_frame(run, t0, 2, &mut vp, &config);
        assert_eq!(
            scroll.on_frame(run, t0 + FRAME, 2, &mut vp, &config),
            FrameOutcome::ReachedBottom
        );
        assert!(!scroll.is_running());
    }

    #[test]
    fn runs_until_bottom_then_stops() {
        let config = ReaderConfig::default();
        let mut vp = Viewport::new(110.0, 100.0);
        let mut scroll = AutoScroll::new();
        let run = scroll.start();

        let t0 = Instant::now();
        let mut now = t0;
        scroll.on_frame(run, now, 5, &mut vp, &config);
        for _ in 0..100 {
            now += FRAME;
            if scroll.on_frame(run, now, 5, &mut vp, &config) == FrameOutcome::ReachedBottom {
                break;
            }
        }

        assert!(!scroll.is_running());
        assert!(vp.is_at_bottom(config.bottom_tolerance));
        assert!(vp.offset() <= vp.max_offset());
    }

    #[test]
    fn speed_change_applies_on_next_frame() {
        let config = ReaderConfig::default();
        let mut vp = Viewport::new(1000.0, 100.0);
        let mut scroll = AutoScroll::new();
        let run = scroll.start();

        let t0 = Instant::now();
        scroll.on_frame(run, t0, 1, &mut vp, &config);
        scroll.on_frame(run, t0 + FRAME, 1, &mut vp, &config);
        let outcome = scroll.on_frame(run, t0 + FRAME * 2, 4, &mut vp, &config);
        assert!(matches!(outcome, FrameOutcome::Advanced(step) if close(step, 1.2)));
    }

    #[test]
    fn zero_speed_stays_running_without_moving() {
        let config = ReaderConfig::default();
        let mut vp = Viewport::new(1000.0, 100.0);
        let mut scroll = AutoScroll::new();
        let run = scroll.start();

        let t0 = Instant::now();
        scroll.on_frame(run, t0, 0, &mut vp, &config);
        assert_eq!(scroll.on_frame(run, t0 + FRAME, 0, &mut vp, &config), FrameOutcome::Idle);
        assert!(scroll.is_running());
        assert_eq!(vp.offset(), 0.0);
    }

    #[test]
    fn frames_after_stop_change_nothing() {
        let config = ReaderConfig::default();
        let mut vp = Viewport::new(1000.0, 100.0);
        let mut scroll = AutoScroll::new();
        let run = scroll.start();

        let t0 = Instant::now();
        scroll.on_frame(run, t0, 5, &mut vp, &config);
        scroll.stop();
        scroll.stop();

        for i in 1..50u32 {
            assert_eq!(
                scroll.on_frame(run, t0 + FRAME * i, 5, &mut vp, &config),
                FrameOutcome::Stale
            );
        }
        assert_eq!(vp.offset(), 0.0);
    }

    #[test]
    fn restart_invalidates_old_frames_and_resets_baseline() {
        let config = ReaderConfig::default();
        let mut vp = Viewport::new(1000.0, 100.0);
        let mut scroll = AutoScroll::new();
        let first = scroll.start();

        let t0 = Instant::now();
        scroll.on_frame(first, t0, 5, &mut vp, &config);
        scroll.stop();
        let second = scroll.start();
        assert_ne!(first, second);

        assert_eq!(
            scroll.on_frame(first, t0 + FRAME, 5, &mut vp, &config),
            FrameOutcome::Stale
        );
        assert_eq!(
            scroll.on_frame(second, t0 + FRAME * 2, 5, &mut vp, &config),
            FrameOutcome::Skipped
        );
    }
}
