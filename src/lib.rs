//! Library interface for tipcalc.
//!
//! Everything that decides *what* the watch shows lives here as pure,
//! host-testable logic: the fixed-point money model, the tip calculator,
//! the edit-focus state machine, and the blink timer controller.
//!
//! Usage: `cargo test` runs the whole suite on the host.
//!
//! The embedded binary (`main.rs`, `#![no_std]` + `#![no_main]`) pulls
//! the hardware adapters in through the `embedded` feature.

#![cfg_attr(not(test), no_std)]

pub mod blink;
pub mod calc;
pub mod config;
pub mod error;
pub mod focus;
pub mod money;
pub mod session;
pub mod ui;

pub use blink::{BlinkTimer, Rearm, TickScheduler};
pub use error::Error;
pub use focus::EditFocus;
pub use money::{BlinkState, DollarsCents, Money};
pub use session::Session;
pub use ui::{ButtonEvent, DisplaySink, Field, Screen};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::calc::{recalc_tip, recalc_total, round_up};
    use super::money::{format_money, format_percent, write_money, write_percent};
    use super::ui::input_logic::{handle_button, repeats_while_held};
    use super::*;

    /// Scheduler that records every arm/cancel instead of keeping time.
    #[derive(Default)]
    struct ManualTicker {
        armed: Option<u32>,
        scheduled: usize,
        cancelled: usize,
    }

    impl TickScheduler for ManualTicker {
        fn schedule_once(&mut self, period_ms: u32) {
            self.armed = Some(period_ms);
            self.scheduled += 1;
        }

        fn cancel(&mut self) {
            self.armed = None;
            self.cancelled += 1;
        }
    }

    fn session() -> Session<Screen, ManualTicker> {
        let mut s = Session::new(Screen::new(), ManualTicker::default());
        s.start();
        s
    }

    fn session_with(bill: u32, tip_percent: u32, focus: EditFocus) -> Session<Screen, ManualTicker> {
        let mut s = Session::with_values(
            Screen::new(),
            ManualTicker::default(),
            Money::from_units(bill),
            tip_percent,
            focus,
        );
        s.start();
        s
    }

    // ════════════════════════════════════════════════════════════════════════
    // Money Model Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn money_splits_into_dollars_and_cents() {
        let dc = Money::from_units(21_375).to_dollars_cents();
        assert_eq!(dc.dollars, 21);
        assert_eq!(dc.cents, 37); // tenths digit dropped
    }

    #[test]
    fn money_truncation_bounds_hold() {
        for units in (0..50_000).step_by(7).chain([u32::MAX - 1, u32::MAX]) {
            let dc = Money::from_units(units).to_dollars_cents();
            let floor = u64::from(dc.dollars) * 1000 + u64::from(dc.cents) * 10;
            assert!(floor <= u64::from(units));
            assert!(u64::from(units) < floor + 10);
            assert!(dc.cents <= 99);
        }
    }

    #[test]
    fn money_from_dollars_cents() {
        assert_eq!(Money::from_dollars_cents(20, 0).units(), 20_000);
        assert_eq!(Money::from_dollars_cents(10, 75).units(), 10_750);
    }

    #[test]
    fn money_subtraction_clamps_at_zero() {
        assert_eq!(Money::from_units(5).saturating_sub(10), Money::ZERO);
        assert_eq!(Money::from_units(999).saturating_sub(1000), Money::ZERO);
        assert_eq!(Money::ZERO.saturating_sub(1000), Money::ZERO);
        assert_eq!(Money::from_units(1500).saturating_sub(1000).units(), 500);
    }

    #[test]
    fn money_addition_saturates() {
        assert_eq!(Money::from_units(u32::MAX).saturating_add(1000).units(), u32::MAX);
    }

    #[test]
    fn money_from_dollars_cents_saturates() {
        assert_eq!(Money::from_dollars_cents(5_000_000, 0).units(), u32::MAX);
        assert_eq!(Money::from_dollars_cents(4_294_967, 99).units(), u32::MAX);
        assert_eq!(Money::from_dollars_cents(0, u32::MAX).units(), u32::MAX);
    }

    #[test]
    fn format_money_shapes() {
        let dc = Money::from_dollars_cents(21, 0).to_dollars_cents();
        assert_eq!(format_money(dc, BlinkState::None).as_str(), "$21.00");
        assert_eq!(format_money(dc, BlinkState::Dollars).as_str(), ".00");
        assert_eq!(format_money(dc, BlinkState::Cents).as_str(), "$21.__");
    }

    #[test]
    fn format_money_pads_cents() {
        let dc = Money::from_dollars_cents(0, 5).to_dollars_cents();
        assert_eq!(format_money(dc, BlinkState::None).as_str(), "$0.05");
        assert_eq!(format_money(dc, BlinkState::Dollars).as_str(), ".05");
    }

    #[test]
    fn format_money_largest_amount_fits() {
        let dc = Money::from_units(u32::MAX).to_dollars_cents();
        assert_eq!(format_money(dc, BlinkState::None).as_str(), "$4294967.29");
    }

    #[test]
    fn write_money_reports_small_buffer() {
        let mut small: heapless::String<4> = heapless::String::new();
        let dc = Money::from_dollars_cents(123, 45).to_dollars_cents();
        assert_eq!(
            write_money(&mut small, dc, BlinkState::None),
            Err(Error::BufferOverflow)
        );
        assert!(small.is_empty());

        // The dollars-blinked shape is short enough.
        assert_eq!(write_money(&mut small, dc, BlinkState::Dollars), Ok(()));
        assert_eq!(small.as_str(), ".45");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(15).as_str(), "15%");
        assert_eq!(format_percent(0).as_str(), "0%");

        let mut tiny: heapless::String<2> = heapless::String::new();
        assert_eq!(write_percent(&mut tiny, 100), Err(Error::BufferOverflow));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Calculator Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn round_up_rules() {
        assert_eq!(round_up(1935, 10), 1940);
        assert_eq!(round_up(1940, 10), 1940);
        assert_eq!(round_up(1, 10), 10);
        assert_eq!(round_up(0, 10), 0);
        assert_eq!(round_up(1234, 0), 1234);
    }

    #[test]
    fn tip_is_always_whole_cents() {
        for bill in (0..30_000).step_by(37) {
            for percent in [0, 1, 7, 15, 18, 20, 33, 100, 250] {
                let tip = recalc_tip(Money::from_units(bill), percent);
                assert_eq!(tip.units() % 10, 0, "bill={} pct={}", bill, percent);
            }
        }
    }

    #[test]
    fn tip_rounds_up_not_to_nearest() {
        // 10.01 * 1% = 0.1001 -> raw 100 units, exact
        assert_eq!(recalc_tip(Money::from_units(10_010), 1).units(), 100);
        // 10.11 * 1% = 0.1011 -> raw 101 units -> 110
        assert_eq!(recalc_tip(Money::from_units(10_110), 1).units(), 110);
    }

    #[test]
    fn tip_does_not_wrap_on_large_inputs() {
        let tip = recalc_tip(Money::from_units(u32::MAX), 1000);
        assert_eq!(tip.units() % 10, 0);
        assert!(tip.units() > u32::MAX - 10);
    }

    #[test]
    fn total_is_bill_plus_tip() {
        let bill = Money::from_dollars_cents(9_999, 99);
        let tip = recalc_tip(bill, 100);
        assert_eq!(recalc_total(bill, tip).units(), bill.units() + tip.units());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Blink Timer Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn blink_timer_reset_always_arms() {
        let mut ticker = ManualTicker::default();
        let mut timer = BlinkTimer::new(500, 10);
        assert_eq!(timer.reschedule(&mut ticker, true), Rearm::Scheduled);
        assert_eq!(ticker.armed, Some(500));
        assert_eq!(timer.toggles(), 0);
    }

    #[test]
    fn blink_timer_exhausts_after_budget() {
        let mut ticker = ManualTicker::default();
        let mut timer = BlinkTimer::new(500, 10);
        timer.reschedule(&mut ticker, true);

        for _ in 0..9 {
            assert_eq!(timer.reschedule(&mut ticker, false), Rearm::Scheduled);
        }
        assert_eq!(timer.reschedule(&mut ticker, false), Rearm::Exhausted);
        assert!(timer.is_exhausted());
        assert_eq!(ticker.armed, None);
        assert_eq!(ticker.scheduled, 10);

        // A reset restores the full budget.
        assert_eq!(timer.reschedule(&mut ticker, true), Rearm::Scheduled);
        assert!(!timer.is_exhausted());
    }

    #[test]
    fn blink_timer_cancels_before_rearming() {
        let mut ticker = ManualTicker::default();
        let mut timer = BlinkTimer::new(500, 10);
        timer.reschedule(&mut ticker, true);
        timer.reschedule(&mut ticker, true);
        assert_eq!(ticker.cancelled, 2);
        assert_eq!(ticker.scheduled, 2);
    }

    // ════════════════════════════════════════════════════════════════════════
    // State Machine Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn session_starts_with_power_up_values() {
        let s = session();
        assert_eq!(s.bill().units(), 20_000);
        assert_eq!(s.tip_percent(), 15);
        assert_eq!(s.tip_amount().units(), 3_000);
        assert_eq!(s.total().units(), 23_000);
        assert_eq!(s.focus(), EditFocus::BillDollars);

        let screen = s.display();
        assert_eq!(screen.text(Field::Bill), "$20.00");
        assert_eq!(screen.text(Field::TipPercent), "15%");
        assert_eq!(screen.text(Field::TipAmount), "$3.00");
        assert_eq!(screen.text(Field::Total), "$23.00");
        assert!(screen.is_emphasized(Field::Bill));
        assert!(!screen.is_emphasized(Field::TipPercent));

        // Entering a bill state arms the blink timer.
        assert_eq!(s.scheduler().armed, Some(500));
    }

    #[test]
    fn three_confirms_close_the_cycle() {
        for start in [EditFocus::TipPercent, EditFocus::BillDollars, EditFocus::BillCents] {
            let mut s = session_with(20_000, 15, start);
            s.on_confirm();
            s.on_confirm();
            assert_ne!(s.focus(), start);
            s.on_confirm();
            assert_eq!(s.focus(), start);
        }
    }

    #[test]
    fn confirm_walks_the_fixed_order() {
        let mut s = session_with(20_000, 15, EditFocus::TipPercent);
        assert_eq!(s.on_confirm(), EditFocus::BillDollars);
        assert_eq!(s.on_confirm(), EditFocus::BillCents);
        assert_eq!(s.on_confirm(), EditFocus::TipPercent);
    }

    #[test]
    fn confirm_moves_emphasis() {
        let mut s = session_with(20_000, 15, EditFocus::BillCents);
        s.on_confirm();
        assert!(s.display().is_emphasized(Field::TipPercent));
        assert!(!s.display().is_emphasized(Field::Bill));

        s.on_confirm();
        assert!(s.display().is_emphasized(Field::Bill));
        assert!(!s.display().is_emphasized(Field::TipPercent));
    }

    #[test]
    fn tip_percent_steps_and_clamps() {
        let mut s = session_with(20_000, 1, EditFocus::TipPercent);
        s.on_increment();
        assert_eq!(s.tip_percent(), 2);
        assert_eq!(s.display().text(Field::TipPercent), "2%");

        for _ in 0..5 {
            s.on_decrement();
        }
        assert_eq!(s.tip_percent(), 0);
        assert_eq!(s.tip_amount(), Money::ZERO);
        assert_eq!(s.display().text(Field::Total), "$20.00");
        assert_eq!(s.bill().units(), 20_000);
    }

    #[test]
    fn bill_dollars_step_by_one_dollar() {
        let mut s = session();
        s.on_increment();
        assert_eq!(s.bill().units(), 21_000);
        assert_eq!(s.display().text(Field::Bill), "$21.00");
        assert_eq!(s.display().text(Field::TipAmount), "$3.15");
        assert_eq!(s.display().text(Field::Total), "$24.15");

        s.on_decrement();
        s.on_decrement();
        assert_eq!(s.bill().units(), 19_000);
    }

    #[test]
    fn bill_cents_step_by_one_cent() {
        let mut s = session_with(20_000, 15, EditFocus::BillCents);
        s.on_increment();
        assert_eq!(s.bill().units(), 20_010);
        assert_eq!(s.display().text(Field::Bill), "$20.01");
        s.on_decrement();
        s.on_decrement();
        assert_eq!(s.display().text(Field::Bill), "$19.99");
    }

    #[test]
    fn bill_decrement_clamps_at_zero() {
        let mut s = session_with(500, 15, EditFocus::BillDollars);
        s.on_decrement();
        assert_eq!(s.bill(), Money::ZERO);
        s.on_decrement();
        assert_eq!(s.bill(), Money::ZERO);

        let mut s = session_with(5, 15, EditFocus::BillCents);
        s.on_decrement();
        assert_eq!(s.bill(), Money::ZERO);
        assert_eq!(s.display().text(Field::Bill), "$0.00");
    }

    #[test]
    fn bill_edit_clears_blink_and_resets_budget() {
        let mut s = session();
        s.on_tick();
        s.on_tick();
        s.on_tick();
        assert_eq!(s.blink(), BlinkState::Dollars);
        assert_eq!(s.blink_timer().toggles(), 3);

        s.on_increment();
        assert_eq!(s.blink(), BlinkState::None);
        assert_eq!(s.blink_timer().toggles(), 0);
        assert_eq!(s.scheduler().armed, Some(500));
        assert_eq!(s.display().text(Field::Bill), "$21.00");
    }

    #[test]
    fn ticks_toggle_the_focused_sub_field() {
        let mut s = session();
        s.on_tick();
        assert_eq!(s.blink(), BlinkState::Dollars);
        assert_eq!(s.display().text(Field::Bill), ".00");
        s.on_tick();
        assert_eq!(s.blink(), BlinkState::None);
        assert_eq!(s.display().text(Field::Bill), "$20.00");

        s.on_confirm();
        assert_eq!(s.focus(), EditFocus::BillCents);
        s.on_tick();
        assert_eq!(s.blink(), BlinkState::Cents);
        assert_eq!(s.display().text(Field::Bill), "$20.__");
    }

    #[test]
    fn entering_tip_percent_cancels_blink() {
        let mut s = session_with(20_000, 15, EditFocus::BillCents);
        s.on_tick();
        assert_eq!(s.blink(), BlinkState::Cents);

        s.on_confirm();
        assert_eq!(s.focus(), EditFocus::TipPercent);
        assert_eq!(s.blink(), BlinkState::None);
        assert_eq!(s.display().text(Field::Bill), "$20.00");

        // Passive ticks never start a blink while tip percent has focus.
        s.on_tick();
        assert_eq!(s.blink(), BlinkState::None);
    }

    #[test]
    fn tip_percent_tick_clears_leftover_blink() {
        let mut s = session_with(20_000, 15, EditFocus::TipPercent);
        s.set_blink(BlinkState::Dollars);
        s.redisplay_bill();
        assert_eq!(s.display().text(Field::Bill), ".00");

        s.on_tick();
        assert_eq!(s.blink(), BlinkState::None);
        assert_eq!(s.display().text(Field::Bill), "$20.00");
    }

    #[test]
    fn entering_tip_percent_keeps_blink_budget_draining() {
        let mut s = session_with(20_000, 15, EditFocus::BillCents);
        for _ in 0..3 {
            s.on_tick();
        }
        s.on_confirm();
        assert_eq!(s.focus(), EditFocus::TipPercent);
        assert_eq!(s.blink_timer().toggles(), 3);

        for _ in 0..6 {
            assert_eq!(s.on_tick(), Rearm::Scheduled);
        }
        assert_eq!(s.on_tick(), Rearm::Exhausted);
        assert_eq!(s.scheduler().armed, None);
        assert_eq!(s.blink(), BlinkState::None);
    }

    #[test]
    fn blink_budget_terminates_after_ten_ticks() {
        let mut s = session();
        for tick in 1..10 {
            assert_eq!(s.on_tick(), Rearm::Scheduled, "tick {}", tick);
        }
        assert_eq!(s.on_tick(), Rearm::Exhausted);
        assert_eq!(s.blink(), BlinkState::None);
        assert_eq!(s.scheduler().armed, None);
        assert_eq!(s.display().text(Field::Bill), "$20.00");
    }

    #[test]
    fn shutdown_cancels_pending_tick() {
        let mut s = session();
        assert!(s.scheduler().armed.is_some());
        s.shutdown();
        assert_eq!(s.scheduler().armed, None);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Input Routing / Screen Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn buttons_route_to_focus_handlers() {
        let mut s = session();
        handle_button(&mut s, ButtonEvent::Up);
        assert_eq!(s.bill().units(), 21_000);
        handle_button(&mut s, ButtonEvent::Down);
        assert_eq!(s.bill().units(), 20_000);
        handle_button(&mut s, ButtonEvent::Select);
        assert_eq!(s.focus(), EditFocus::BillCents);
    }

    #[test]
    fn only_up_and_down_repeat() {
        assert!(repeats_while_held(ButtonEvent::Up));
        assert!(repeats_while_held(ButtonEvent::Down));
        assert!(!repeats_while_held(ButtonEvent::Select));
    }

    #[test]
    fn screen_tracks_changes() {
        let mut screen = Screen::new();
        assert!(!screen.take_dirty());

        screen.set_total_text("$1.00");
        assert!(screen.take_dirty());
        assert!(!screen.take_dirty());

        // Same text again is not a change.
        screen.set_total_text("$1.00");
        assert!(!screen.take_dirty());

        screen.set_emphasis(Field::Bill, true);
        assert!(screen.take_dirty());
        assert_eq!(screen.text(Field::Total), "$1.00");
    }

    #[test]
    fn field_labels() {
        assert_eq!(Field::Bill.label(), "Bill Amt");
        assert_eq!(Field::TipPercent.label(), "Tip %");
        assert_eq!(Field::TipAmount.label(), "Tip Amt:");
        assert_eq!(Field::Total.label(), "Total:");
    }
}
