//! GPIO button input with async debouncing and auto-repeat.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - UP     - increment the focused field (repeats while held)
//!   - DOWN   - decrement the focused field (repeats while held)
//!   - SELECT - move edit focus to the next field
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, and sends a `ButtonEvent` to the UI channel.

use crate::config::{
    BUTTON_DEBOUNCE_MS, BUTTON_REPEAT_DELAY_MS, BUTTON_REPEAT_INTERVAL_MS, UI_EVENT_QUEUE_DEPTH,
};
use crate::ui::input_logic::repeats_while_held;
use crate::ui::ButtonEvent;
use defmt::{debug, info};
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};

pub type ButtonSender = Sender<'static, CriticalSectionRawMutex, ButtonEvent, UI_EVENT_QUEUE_DEPTH>;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the event,
/// then either waits for release or, for UP/DOWN, keeps sending the
/// event at the repeat interval until the button is let go.
pub async fn button_task(pin: AnyPin, event: ButtonEvent, tx: ButtonSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);
    let repeat = repeats_while_held(event);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if !btn.is_low() {
            continue;
        }

        info!("Button: {}", event);
        tx.send(event).await;

        if repeat {
            let hold = Timer::after(Duration::from_millis(BUTTON_REPEAT_DELAY_MS));
            if let Either::Second(()) = select(btn.wait_for_rising_edge(), hold).await {
                debug!("Button: {} repeating", event);
                loop {
                    // Drop repeats the UI has not caught up with.
                    let _ = tx.try_send(event);
                    let interval = Timer::after(Duration::from_millis(BUTTON_REPEAT_INTERVAL_MS));
                    if let Either::First(()) = select(btn.wait_for_rising_edge(), interval).await {
                        break;
                    }
                }
            }
        } else {
            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
        }

        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}
