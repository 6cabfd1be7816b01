use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// How often the frame scheduler fires while auto-scroll is running.
    pub frame_interval: Duration,
    /// Minimum spacing between two processed frames.
    pub frame_throttle: Duration,
    pub scroll_units_per_speed: f64,
    pub bottom_tolerance: f64,
    pub line_height: f64,
    pub playback_interval: Duration,
    pub playback_step: f64,
    pub ui_tick: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            frame_throttle: Duration::from_millis(16),
            scroll_units_per_speed: 0.3,
            bottom_tolerance: 1.0,
            line_height: 1.9,
            playback_interval: Duration::from_millis(100),
            playback_step: 0.5,
            ui_tick: Duration::from_millis(33),
        }
    }
}
