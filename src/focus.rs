//! Edit-focus state machine.
//!
//! Exactly one field has edit focus at a time. SELECT walks a fixed
//! cycle:
//!
//! ```text
//! TipPercent ──► BillDollars ──► BillCents ──┐
//!     ▲                                      │
//!     └──────────────────────────────────────┘
//! ```
//!
//! Each state decides what UP/DOWN change, what happens on entry, and
//! what a blink tick does. The shared values all live in [`Session`].

use crate::blink::TickScheduler;
use crate::money::{BlinkState, UNITS_PER_CENT, UNITS_PER_DOLLAR};
use crate::session::Session;
use crate::ui::{DisplaySink, Field};

/// Which field UP/DOWN currently adjust.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditFocus {
    /// Tip percentage, one percent per press.
    TipPercent,
    /// Whole dollars of the bill.
    BillDollars,
    /// Cents of the bill.
    BillCents,
}

impl EditFocus {
    /// State reached by a SELECT press.
    pub const fn next(self) -> Self {
        match self {
            EditFocus::TipPercent => EditFocus::BillDollars,
            EditFocus::BillDollars => EditFocus::BillCents,
            EditFocus::BillCents => EditFocus::TipPercent,
        }
    }

    /// Caption highlighted while this state is active.
    pub const fn emphasized_field(self) -> Field {
        match self {
            EditFocus::TipPercent => Field::TipPercent,
            EditFocus::BillDollars | EditFocus::BillCents => Field::Bill,
        }
    }

    /// Bill adjustment per UP/DOWN press, in tenths of a cent.
    pub const fn bill_step(self) -> Option<u32> {
        match self {
            EditFocus::TipPercent => None,
            EditFocus::BillDollars => Some(UNITS_PER_DOLLAR),
            EditFocus::BillCents => Some(UNITS_PER_CENT),
        }
    }

    /// Sub-field of the bill that blinks while this state is active.
    pub const fn blink_target(self) -> BlinkState {
        match self {
            EditFocus::TipPercent => BlinkState::None,
            EditFocus::BillDollars => BlinkState::Dollars,
            EditFocus::BillCents => BlinkState::Cents,
        }
    }

    /// Entry action: move caption emphasis and clear any blink.
    ///
    /// Only the bill states restart the blink budget. Entering tip
    /// percent leaves a still-armed tick running passively; it drains
    /// what is left of the budget without changing the display.
    pub(crate) fn enter<D: DisplaySink, S: TickScheduler>(self, session: &mut Session<D, S>) {
        let focused = self.emphasized_field();
        let other = match focused {
            Field::TipPercent => Field::Bill,
            _ => Field::TipPercent,
        };
        session.display_mut().set_emphasis(focused, true);
        session.display_mut().set_emphasis(other, false);

        session.set_blink(BlinkState::None);
        session.redisplay_bill();

        if self.bill_step().is_some() {
            session.restart_blink_cycle();
        }
    }

    pub(crate) fn increment<D: DisplaySink, S: TickScheduler>(self, session: &mut Session<D, S>) {
        match self.bill_step() {
            None => {
                let percent = session.tip_percent().saturating_add(1);
                session.set_tip_percent(percent);
            }
            Some(step) => {
                let bill = session.bill().saturating_add(step);
                session.set_bill(bill);
                session.set_blink(BlinkState::None);
                session.restart_blink_cycle();
            }
        }
    }

    pub(crate) fn decrement<D: DisplaySink, S: TickScheduler>(self, session: &mut Session<D, S>) {
        match self.bill_step() {
            None => {
                let percent = session.tip_percent().saturating_sub(1);
                session.set_tip_percent(percent);
            }
            Some(step) => {
                let bill = session.bill().saturating_sub(step);
                session.set_bill(bill);
                session.set_blink(BlinkState::None);
                session.restart_blink_cycle();
            }
        }
    }

    pub(crate) fn timer_tick<D: DisplaySink, S: TickScheduler>(self, session: &mut Session<D, S>) {
        let target = self.blink_target();
        let next = match (target, session.blink()) {
            // Tip percent focus only ever cancels a leftover blink.
            (BlinkState::None, BlinkState::None) => return,
            (_, BlinkState::None) => target,
            _ => BlinkState::None,
        };

        session.set_blink(next);
        session.redisplay_bill();
    }
}
