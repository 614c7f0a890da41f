//! Currency-pair selection biased toward the base currency.
//!
//! Real FX order flow concentrates around one reference currency; this
//! module reproduces that concentration while leaving a minority of
//! cross-pairs.

use orders_core::config::GeneratorConfig;
use orders_core::types::Currency;

use crate::rng::OrderRng;

/// Probability that a pair involves the base currency.
pub const BASE_PAIR_PROBABILITY: f64 = 0.7;

/// Selects an ordered `(buy, sell)` currency pair.
///
/// With probability [`BASE_PAIR_PROBABILITY`], one non-base currency is
/// drawn uniformly and paired with the base currency, the side chosen by a
/// fair coin. Otherwise two distinct non-base currencies are drawn without
/// replacement. The output currencies are always distinct.
///
/// Assumes a validated configuration (at least two non-base currencies).
///
/// # Examples
///
/// ```rust
/// use orders_core::config::GeneratorConfig;
/// use orders_engine::{pair, OrderRng};
///
/// let config = GeneratorConfig::default();
/// let mut rng = OrderRng::from_seed(42);
/// let (buy, sell) = pair::select_pair(&config, &mut rng);
/// assert_ne!(buy, sell);
/// ```
pub fn select_pair(config: &GeneratorConfig, rng: &mut OrderRng) -> (Currency, Currency) {
    let others = config.non_base_currencies();

    if rng.chance(BASE_PAIR_PROBABILITY) {
        let other = others[rng.index(others.len())];
        if rng.chance(0.5) {
            (config.base_currency, other)
        } else {
            (other, config.base_currency)
        }
    } else {
        // Two distinct draws without replacement: pick the second index
        // over the remaining slots and skip past the first.
        let first = rng.index(others.len());
        let mut second = rng.index(others.len() - 1);
        if second >= first {
            second += 1;
        }
        (others[first], others[second])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_pairs(n: usize) -> Vec<(Currency, Currency)> {
        let config = GeneratorConfig::default();
        let mut rng = OrderRng::from_seed(42);
        (0..n).map(|_| select_pair(&config, &mut rng)).collect()
    }

    #[test]
    fn test_pairs_always_distinct() {
        for (buy, sell) in draw_pairs(10_000) {
            assert_ne!(buy, sell);
        }
    }

    #[test]
    fn test_base_currency_share_near_seventy_percent() {
        let pairs = draw_pairs(50_000);
        let with_base = pairs
            .iter()
            .filter(|(b, s)| *b == Currency::EUR || *s == Currency::EUR)
            .count();
        let share = with_base as f64 / pairs.len() as f64;
        assert!((share - 0.7).abs() < 0.01, "share = {share}");
    }

    #[test]
    fn test_base_pair_sides_balanced() {
        let pairs = draw_pairs(50_000);
        let base_buy = pairs.iter().filter(|(b, _)| *b == Currency::EUR).count();
        let base_sell = pairs.iter().filter(|(_, s)| *s == Currency::EUR).count();
        let ratio = base_buy as f64 / (base_buy + base_sell) as f64;
        assert!((ratio - 0.5).abs() < 0.02, "ratio = {ratio}");
    }

    #[test]
    fn test_cross_pairs_never_involve_base() {
        // With a tiny universe every cross-pair outcome is enumerable.
        let config = GeneratorConfig {
            currencies: vec![Currency::EUR, Currency::USD, Currency::GBP, Currency::CHF],
            ..GeneratorConfig::default()
        };
        let mut rng = OrderRng::from_seed(42);
        let mut saw_cross = false;
        for _ in 0..10_000 {
            let (buy, sell) = select_pair(&config, &mut rng);
            if buy != Currency::EUR && sell != Currency::EUR {
                saw_cross = true;
                assert_ne!(buy, sell);
            }
        }
        assert!(saw_cross);
    }

    #[test]
    fn test_all_non_base_currencies_reachable() {
        let pairs = draw_pairs(50_000);
        let mut seen = std::collections::HashSet::new();
        for (buy, sell) in pairs {
            seen.insert(buy);
            seen.insert(sell);
        }
        assert_eq!(seen.len(), Currency::ALL.len());
    }
}
