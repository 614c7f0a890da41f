//! Tiered order-amount synthesis.
//!
//! Order sizes follow a mixed-tier model: a tier is drawn by weight, then a
//! uniform whole-unit amount from the tier's range. This avoids a single
//! heavy-tailed distribution while still producing a realistic long tail of
//! large trades.

use orders_core::types::AmountTier;

use crate::rng::OrderRng;

/// Minor units per whole currency unit.
pub const MINOR_UNITS_PER_UNIT: i64 = 100;

/// Draws a buy amount in minor units for the given tier.
///
/// A whole-unit amount is drawn uniformly from
/// [`AmountTier::units_range`] and scaled to minor units, so buy amounts
/// are always a whole number of currency units.
///
/// # Examples
///
/// ```rust
/// use orders_core::types::AmountTier;
/// use orders_engine::{amount, OrderRng};
///
/// let mut rng = OrderRng::from_seed(42);
/// let cents = amount::draw_buy_amount_cents(AmountTier::Small, &mut rng);
/// assert!(cents >= 100 * 100 && cents <= 50_000 * 100);
/// assert_eq!(cents % 100, 0);
/// ```
pub fn draw_buy_amount_cents(tier: AmountTier, rng: &mut OrderRng) -> i64 {
    rng.int_inclusive(tier.units_range()) * MINOR_UNITS_PER_UNIT
}

/// Derives the sell amount in minor units from the buy amount and rate.
///
/// The fractional product is truncated toward zero, matching the reference
/// dataset. The result is therefore within one minor unit of
/// `round(buy_amount_cents * rate)`.
pub fn derive_sell_amount_cents(buy_amount_cents: i64, rate: f64) -> i64 {
    (buy_amount_cents as f64 * rate) as i64
}
