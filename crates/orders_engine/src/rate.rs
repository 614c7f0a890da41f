//! Exchange-rate synthesis with bounded random variation.
//!
//! A plausible market rate is derived from the configured per-currency
//! values against the base currency, then perturbed by ±2% uniform noise
//! and rounded to 7 decimal places.

use orders_core::config::GeneratorConfig;
use orders_core::types::Currency;

use crate::rng::OrderRng;

/// Half-width of the uniform rate perturbation (±2%).
pub const MAX_VARIATION: f64 = 0.02;

/// Decimal places the synthesised rate is rounded to.
pub const RATE_DECIMALS: u32 = 7;

/// Synthesises a sell-per-buy exchange rate for the given pair.
///
/// `base_rate = table[sell] / table[buy]`, perturbed by a uniform variation
/// in [-[`MAX_VARIATION`], [`MAX_VARIATION`]] and rounded to
/// [`RATE_DECIMALS`] places.
///
/// The same-currency case returns exactly 1.0. The pair selector never
/// produces it, but the function stays total over all currency pairs.
///
/// # Examples
///
/// ```rust
/// use orders_core::config::GeneratorConfig;
/// use orders_core::types::Currency;
/// use orders_engine::{rate, OrderRng};
///
/// let config = GeneratorConfig::default();
/// let mut rng = OrderRng::from_seed(42);
///
/// // EUR/USD: base rate 1.05, within ±2%
/// let r = rate::synthesise_rate(&config, Currency::EUR, Currency::USD, &mut rng);
/// assert!(r > 1.05 * 0.98 && r < 1.05 * 1.02);
/// ```
pub fn synthesise_rate(
    config: &GeneratorConfig,
    buy_currency: Currency,
    sell_currency: Currency,
    rng: &mut OrderRng,
) -> f64 {
    if buy_currency == sell_currency {
        return 1.0;
    }

    let base_rate = config.rate_vs_base(sell_currency) / config.rate_vs_base(buy_currency);
    let variation = rng.uniform_in(-MAX_VARIATION, MAX_VARIATION);
    round_rate(base_rate * (1.0 + variation))
}

/// Rounds a rate to [`RATE_DECIMALS`] decimal places.
pub fn round_rate(rate: f64) -> f64 {
    let scale = 10f64.powi(RATE_DECIMALS as i32);
    (rate * scale).round() / scale
}
