use std::time::Instant;

use crate::share::{ShareError, ShareOutcome};

/// Messages delivered to the UI loop from background tasks.
#[derive(Debug)]
pub enum Event {
    ScrollFrame {
        session: u64,
        generation: u64,
        at: Instant,
    },
    PlaybackTick {
        session: u64,
        generation: u64,
    },
    ShareFinished {
        title: String,
        result: Result<ShareOutcome, ShareError>,
    },
}
