//! Bounded blink-feedback timer.
//!
//! A single one-shot tick is kept armed while the bill field has edit
//! focus. Each tick toggles the focused sub-field and re-arms the timer
//! until the toggle budget runs out, after which the timer goes quiet
//! until the next user edit restarts the cycle.
//!
//! The controller only counts; arming and cancelling the actual tick is
//! delegated to a [`TickScheduler`] supplied by the platform.

/// One-shot timer facility provided by the host.
///
/// The host must deliver at most one tick per successful
/// [`schedule_once`](TickScheduler::schedule_once), serialized with
/// button events.
pub trait TickScheduler {
    /// Arm a single tick `period_ms` from now.
    fn schedule_once(&mut self, period_ms: u32);

    /// Drop any pending tick. A no-op when nothing is armed.
    fn cancel(&mut self);
}

/// Outcome of re-arming the blink timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rearm {
    /// Another tick is pending.
    Scheduled,
    /// Toggle budget used up; no tick is pending.
    Exhausted,
}

/// Toggle counter plus period for the blink cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkTimer {
    period_ms: u32,
    budget: u8,
    toggles: u8,
}

impl BlinkTimer {
    pub const fn new(period_ms: u32, budget: u8) -> Self {
        Self {
            period_ms,
            budget,
            toggles: 0,
        }
    }

    /// Cancel the pending tick and arm the next one.
    ///
    /// With `reset_budget` the toggle count restarts from zero and a tick
    /// is always armed. Otherwise one toggle is charged against the
    /// budget and the tick is only re-armed while budget remains.
    pub fn reschedule<S: TickScheduler>(&mut self, scheduler: &mut S, reset_budget: bool) -> Rearm {
        scheduler.cancel();

        if reset_budget {
            self.toggles = 0;
        } else {
            self.toggles = self.toggles.saturating_add(1);
            if self.toggles >= self.budget {
                return Rearm::Exhausted;
            }
        }

        scheduler.schedule_once(self.period_ms);
        Rearm::Scheduled
    }

    /// Toggles charged since the last reset.
    pub fn toggles(&self) -> u8 {
        self.toggles
    }

    pub fn is_exhausted(&self) -> bool {
        self.toggles >= self.budget
    }
}
