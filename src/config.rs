//! Application-wide constants and compile-time configuration.
//!
//! Timing parameters, start-up values, and hardware pin assignments
//! live here so they can be tuned in one place.

// Session

/// Bill amount on power-up, in tenths of a cent ($20.00).
pub const INITIAL_BILL_AMOUNT: u32 = 20_000;

/// Tip percentage on power-up.
pub const INITIAL_TIP_PERCENT: u32 = 15;

/// Capacity of every rendered text field (bytes).
///
/// The longest money rendering is `"$4294967.99"` (11 bytes), so this
/// leaves plenty of headroom.
pub const TEXT_BUFFER_LEN: usize = 32;

// Blink feedback

/// Period between two blink toggles (ms).
pub const BLINK_PERIOD_MS: u32 = 500;

/// Number of toggles after which the blink cycle stops on its own.
pub const BLINK_TOGGLE_BUDGET: u8 = 10;

// Buttons
//
// GPIO pin assignments (nRF52840-DK defaults).  The concrete
// `embassy_nrf::peripherals::*` pins are selected in `main.rs`.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button SELECT  → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 20;

/// How long UP/DOWN must be held before auto-repeat kicks in (ms).
pub const BUTTON_REPEAT_DELAY_MS: u64 = 400;

/// Auto-repeat interval while UP/DOWN is held (ms).
pub const BUTTON_REPEAT_INTERVAL_MS: u64 = 30;

/// Depth of the button → UI event queue.
pub const UI_EVENT_QUEUE_DEPTH: usize = 8;

// Display

/// SSD1306 panel width in pixels (128×64, I²C address 0x3C).
pub const DISPLAY_WIDTH: u32 = 128;

/// Height of one text row on the panel (pixels).
pub const DISPLAY_ROW_HEIGHT: u32 = 16;
