//! Tip calculator session: the values being edited, the active edit
//! focus, and the blink timer.
//!
//! A `Session` is driven by one caller at a time (button events and
//! blink ticks are serialized by the UI task), so it needs no locking.
//! Every mutation of the bill or tip percentage recomputes the tip and
//! total immediately; the display is refreshed after each handler.

use crate::blink::{BlinkTimer, Rearm, TickScheduler};
use crate::calc::{recalc_tip, recalc_total};
use crate::config::{BLINK_PERIOD_MS, BLINK_TOGGLE_BUDGET, INITIAL_BILL_AMOUNT, INITIAL_TIP_PERCENT};
use crate::focus::EditFocus;
use crate::money::{format_money, format_percent, BlinkState, Money};
use crate::ui::DisplaySink;

pub struct Session<D, S> {
    bill: Money,
    tip_percent: u32,
    tip: Money,
    total: Money,
    focus: EditFocus,
    blink: BlinkState,
    timer: BlinkTimer,
    display: D,
    scheduler: S,
}

impl<D: DisplaySink, S: TickScheduler> Session<D, S> {
    /// Session with the power-up values: $20.00 at 15%, editing dollars.
    pub fn new(display: D, scheduler: S) -> Self {
        Self::with_values(
            display,
            scheduler,
            Money::from_units(INITIAL_BILL_AMOUNT),
            INITIAL_TIP_PERCENT,
            EditFocus::BillDollars,
        )
    }

    pub fn with_values(
        display: D,
        scheduler: S,
        bill: Money,
        tip_percent: u32,
        focus: EditFocus,
    ) -> Self {
        let tip = recalc_tip(bill, tip_percent);
        Self {
            bill,
            tip_percent,
            tip,
            total: recalc_total(bill, tip),
            focus,
            blink: BlinkState::None,
            timer: BlinkTimer::new(BLINK_PERIOD_MS, BLINK_TOGGLE_BUDGET),
            display,
            scheduler,
        }
    }

    /// Populate every field and enter the initial focus state.
    pub fn start(&mut self) {
        self.redisplay_all();
        self.focus.enter(self);
    }

    /// Cancel any pending blink tick. The session stays usable.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel();
    }

    /// UP press.
    pub fn on_increment(&mut self) {
        self.focus.increment(self);
        self.redisplay_all();
    }

    /// DOWN press.
    pub fn on_decrement(&mut self) {
        self.focus.decrement(self);
        self.redisplay_all();
    }

    /// SELECT press: move to the next focus state and return it.
    pub fn on_confirm(&mut self) -> EditFocus {
        let next = self.focus.next();
        self.focus = next;
        next.enter(self);
        next
    }

    /// Blink timer expiry.
    ///
    /// Runs the active state's tick behaviour, then charges one toggle
    /// against the budget. Once the budget is spent the blink is forced
    /// off and no further tick is armed.
    pub fn on_tick(&mut self) -> Rearm {
        self.focus.timer_tick(self);

        let rearm = self.timer.reschedule(&mut self.scheduler, false);
        if rearm == Rearm::Exhausted {
            self.blink = BlinkState::None;
            self.redisplay_bill();
        }
        rearm
    }

    pub fn bill(&self) -> Money {
        self.bill
    }

    pub fn tip_percent(&self) -> u32 {
        self.tip_percent
    }

    pub fn tip_amount(&self) -> Money {
        self.tip
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn focus(&self) -> EditFocus {
        self.focus
    }

    pub fn blink(&self) -> BlinkState {
        self.blink
    }

    pub fn blink_timer(&self) -> &BlinkTimer {
        &self.timer
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub(crate) fn set_bill(&mut self, bill: Money) {
        self.bill = bill;
        self.recalculate();
    }

    pub(crate) fn set_tip_percent(&mut self, percent: u32) {
        self.tip_percent = percent;
        self.recalculate();
    }

    pub(crate) fn set_blink(&mut self, blink: BlinkState) {
        self.blink = blink;
    }

    /// Restart the blink cycle with a fresh toggle budget.
    pub(crate) fn restart_blink_cycle(&mut self) {
        self.timer.reschedule(&mut self.scheduler, true);
    }

    pub(crate) fn redisplay_bill(&mut self) {
        let text = format_money(self.bill.to_dollars_cents(), self.blink);
        self.display.set_bill_text(&text);
    }

    fn recalculate(&mut self) {
        self.tip = recalc_tip(self.bill, self.tip_percent);
        self.total = recalc_total(self.bill, self.tip);
    }

    fn redisplay_all(&mut self) {
        self.redisplay_bill();
        self.display
            .set_tip_percent_text(&format_percent(self.tip_percent));
        self.display
            .set_tip_amount_text(&format_money(self.tip.into(), BlinkState::None));
        self.display
            .set_total_text(&format_money(self.total.into(), BlinkState::None));
    }
}
