//! Fixed-point money model.
//!
//! Amounts are tracked as an integer count of tenths of a cent so that
//! repeated edits never accumulate floating-point drift.
//!
//! ```text
//! units   = 21_375
//! dollars = units / 1000         = 21
//! cents   = (units % 1000) / 10  = 37   (the tenths digit is dropped)
//! ```
//!
//! Rendering shapes, depending on which sub-field is blinked off:
//!
//! ```text
//! BlinkState::None     "$21.37"
//! BlinkState::Dollars  ".37"
//! BlinkState::Cents    "$21.__"
//! ```

use core::fmt::Write;

use heapless::String;

use crate::config::TEXT_BUFFER_LEN;
use crate::error::Error;

/// Tenths of a cent in one whole dollar.
pub const UNITS_PER_DOLLAR: u32 = 1000;

/// Tenths of a cent in one cent.
pub const UNITS_PER_CENT: u32 = 10;

/// Owned text for a single display field.
pub type FieldText = String<TEXT_BUFFER_LEN>;

/// A non-negative amount of money in tenths of a cent.
///
/// All arithmetic saturates: subtracting past zero clamps to zero and
/// adding past the representable maximum clamps there.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Money(u32);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Wrap a raw count of tenths of a cent.
    pub const fn from_units(units: u32) -> Self {
        Self(units)
    }

    /// Build an amount from whole dollars and cents, saturating at the
    /// largest representable amount.
    pub const fn from_dollars_cents(dollars: u32, cents: u32) -> Self {
        Self(
            dollars
                .saturating_mul(UNITS_PER_DOLLAR)
                .saturating_add(cents.saturating_mul(UNITS_PER_CENT)),
        )
    }

    /// Raw count of tenths of a cent.
    pub const fn units(self) -> u32 {
        self.0
    }

    pub const fn saturating_add(self, units: u32) -> Self {
        Self(self.0.saturating_add(units))
    }

    /// Subtract `units`, clamping at zero.
    pub const fn saturating_sub(self, units: u32) -> Self {
        Self(self.0.saturating_sub(units))
    }

    /// Split into whole dollars and whole cents, truncating the tenths digit.
    pub const fn to_dollars_cents(self) -> DollarsCents {
        DollarsCents {
            dollars: self.0 / UNITS_PER_DOLLAR,
            cents: (self.0 % UNITS_PER_DOLLAR) / UNITS_PER_CENT,
        }
    }
}

/// Display pair derived from a [`Money`] value. `cents` is always `0..=99`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DollarsCents {
    pub dollars: u32,
    pub cents: u32,
}

impl From<Money> for DollarsCents {
    fn from(money: Money) -> Self {
        money.to_dollars_cents()
    }
}

/// Which sub-field of the bill display is currently blinked off.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkState {
    /// Nothing hidden.
    #[default]
    None,
    /// Dollar digits (and the `$` sign) hidden.
    Dollars,
    /// Cent digits replaced by a placeholder.
    Cents,
}

/// Render `amount` into a caller-supplied buffer, masking one sub-field
/// according to `blink`.
///
/// The buffer is cleared first. If the rendering does not fit, the
/// buffer is left empty and [`Error::BufferOverflow`] is returned.
pub fn write_money<const N: usize>(
    out: &mut String<N>,
    amount: DollarsCents,
    blink: BlinkState,
) -> Result<(), Error> {
    out.clear();
    let result = match blink {
        BlinkState::None => write!(out, "${}.{:02}", amount.dollars, amount.cents),
        BlinkState::Dollars => write!(out, ".{:02}", amount.cents),
        BlinkState::Cents => write!(out, "${}.__", amount.dollars),
    };
    result.map_err(|_| {
        out.clear();
        Error::BufferOverflow
    })
}

/// Render `amount` into an owned field-sized string.
pub fn format_money(amount: DollarsCents, blink: BlinkState) -> FieldText {
    let mut text = FieldText::new();
    // A u32 dollar count plus "$.CC" always fits in TEXT_BUFFER_LEN.
    let _ = write_money(&mut text, amount, blink);
    text
}

/// Render a tip percentage as `"{percent}%"`.
pub fn write_percent<const N: usize>(out: &mut String<N>, percent: u32) -> Result<(), Error> {
    out.clear();
    write!(out, "{}%", percent).map_err(|_| {
        out.clear();
        Error::BufferOverflow
    })
}

pub fn format_percent(percent: u32) -> FieldText {
    let mut text = FieldText::new();
    let _ = write_percent(&mut text, percent);
    text
}
