//! Tip and total calculation on fixed-point amounts.
//!
//! The bill is tracked in tenths of a cent; the tip is always rounded
//! *up* to a whole cent, so the house never comes out short.

use crate::money::{Money, UNITS_PER_CENT};

/// Largest unit count that is still a whole number of cents.
const MAX_CENT_ALIGNED: u32 = u32::MAX - u32::MAX % UNITS_PER_CENT;

/// Round `value` up to the next multiple of `multiple`.
///
/// Values that are already a multiple are returned unchanged, and a
/// `multiple` of zero is a no-op rather than a division fault.
pub const fn round_up(value: u64, multiple: u64) -> u64 {
    if multiple == 0 {
        return value;
    }
    let remainder = value % multiple;
    if remainder == 0 {
        value
    } else {
        value.saturating_add(multiple - remainder)
    }
}

/// Tip for `bill` at `tip_percent`, rounded up to a whole cent.
///
/// The product is formed in 64 bits so large bills at large percentages
/// cannot wrap; the result saturates at the largest cent-aligned amount.
pub fn recalc_tip(bill: Money, tip_percent: u32) -> Money {
    let raw = u64::from(bill.units()) * u64::from(tip_percent) / 100;
    let rounded = round_up(raw, u64::from(UNITS_PER_CENT));
    Money::from_units(u32::try_from(rounded).unwrap_or(MAX_CENT_ALIGNED))
}

/// Total owed: bill plus tip.
pub fn recalc_total(bill: Money, tip: Money) -> Money {
    bill.saturating_add(tip.units())
}
