pub mod config;
pub mod playback;
pub mod scroll;
pub mod viewport;

pub use config::ReaderConfig;
pub use playback::{PlaybackSim, TickOutcome};
pub use scroll::{AutoScroll, FrameOutcome};
pub use viewport::Viewport;
