//! User interface subsystem - OLED display + physical buttons.
//!
//! The session state machine only talks to the outside world through
//! [`DisplaySink`]; the UI task owns the physical panel and redraws it
//! from a [`Screen`] model whenever that model changes.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 3 tactile switches with debouncing (UP, DOWN, SELECT)
//! - **Ticker**: embassy-time deadline backing the blink timer

pub mod input_logic;
mod screen;

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;
#[cfg(feature = "embedded")]
pub mod ticker;

pub use screen::Screen;

/// Physical button events (after debouncing).
///
///   - UP/DOWN: increment / decrement the focused field (auto-repeat)
///   - SELECT: move edit focus to the next field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Up,
    Down,
    Select,
}

/// Value fields on the watch face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Bill,
    TipPercent,
    TipAmount,
    Total,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Bill, Field::TipPercent, Field::TipAmount, Field::Total];

    /// Caption shown next to the value.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Bill => "Bill Amt",
            Field::TipPercent => "Tip %",
            Field::TipAmount => "Tip Amt:",
            Field::Total => "Total:",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Field::Bill => 0,
            Field::TipPercent => 1,
            Field::TipAmount => 2,
            Field::Total => 3,
        }
    }
}

/// Display adapter the session pushes its rendered values into.
pub trait DisplaySink {
    /// Replace the text of a value field.
    fn set_text(&mut self, field: Field, text: &str);

    /// Highlight or un-highlight the caption of `field`.
    fn set_emphasis(&mut self, field: Field, emphasized: bool);

    fn set_bill_text(&mut self, text: &str) {
        self.set_text(Field::Bill, text);
    }

    fn set_tip_percent_text(&mut self, text: &str) {
        self.set_text(Field::TipPercent, text);
    }

    fn set_tip_amount_text(&mut self, text: &str) {
        self.set_text(Field::TipAmount, text);
    }

    fn set_total_text(&mut self, text: &str) {
        self.set_text(Field::Total, text);
    }
}
