//! embassy-time backed one-shot tick for the blink timer.
//!
//! Arming the tick only records a deadline. The UI task waits on that
//! deadline in the same `select` as the button channel, so ticks and
//! button presses reach the session one at a time.

use embassy_time::{Duration, Instant, Timer};

use crate::blink::TickScheduler;

#[derive(Clone, Copy, Debug, Default)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub const fn new() -> Self {
        Self { at: None }
    }

    /// Instant the pending tick is due, if one is armed.
    pub fn due(&self) -> Option<Instant> {
        self.at
    }
}

impl TickScheduler for Deadline {
    fn schedule_once(&mut self, period_ms: u32) {
        self.at = Some(Instant::now() + Duration::from_millis(u64::from(period_ms)));
    }

    fn cancel(&mut self) {
        self.at = None;
    }
}

/// Resolve when `due` passes; never resolves when nothing is armed.
pub async fn wait_until(due: Option<Instant>) {
    match due {
        Some(at) => Timer::at(at).await,
        None => core::future::pending::<()>().await,
    }
}
