//! Generator configuration.
//!
//! The "fixed currency universe + rate table" of the reference dataset is
//! represented as an explicit immutable configuration value passed into the
//! generator, never as module-level global state. This keeps the engine free
//! of hidden shared state and allows multiple independent configurations
//! (for example, in parallel test runs).
//!
//! Every field has a default matching the reference dataset and can be
//! overridden from a TOML file via serde.

use std::collections::BTreeMap;

use crate::types::{Currency, GeneratorError};

/// Immutable configuration for the order generator.
///
/// Weight tables are parallel to the fixed category arrays
/// ([`OrderType::ALL`](crate::types::OrderType::ALL),
/// [`OrderStatus::ALL`](crate::types::OrderStatus::ALL),
/// [`AmountTier::ALL`](crate::types::AmountTier::ALL)); a table of the wrong
/// length is rejected by [`validate`](GeneratorConfig::validate) before any
/// record is produced.
///
/// # Examples
///
/// ```
/// use orders_core::config::GeneratorConfig;
/// use orders_core::types::Currency;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.base_currency, Currency::EUR);
/// assert_eq!(config.order_type_weights, vec![0.3, 0.6, 0.1]);
/// assert!((config.rate_vs_base(Currency::JPY) - 162.0).abs() < 1e-12);
/// config.validate().unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Currency universe orders are drawn from.
    pub currencies: Vec<Currency>,

    /// Designated base currency most pairs involve.
    pub base_currency: Currency,

    /// Approximate value of each currency relative to the base currency.
    pub exchange_rates: BTreeMap<Currency, f64>,

    /// Weights for order types (forward, chain, spot).
    pub order_type_weights: Vec<f64>,

    /// Weights for statuses (open, closed_to_trading, completed).
    pub status_weights: Vec<f64>,

    /// Weights for amount tiers (small, medium, large, very_large).
    pub amount_tier_weights: Vec<f64>,

    /// Liquidity providers, chosen uniformly per record.
    pub liquidity_providers: Vec<String>,
}

impl Default for GeneratorConfig {
    /// Reference dataset defaults: EUR base over eight currencies, chains
    /// most common, half the orders still open.
    fn default() -> Self {
        Self {
            currencies: Currency::ALL.to_vec(),
            base_currency: Currency::EUR,
            exchange_rates: BTreeMap::from([
                (Currency::EUR, 1.0),
                (Currency::USD, 1.05),
                (Currency::CHF, 0.94),
                (Currency::GBP, 0.86),
                (Currency::DKK, 7.46),
                (Currency::SEK, 11.20),
                (Currency::NOK, 11.80),
                (Currency::JPY, 162.0),
            ]),
            order_type_weights: vec![0.3, 0.6, 0.1],
            status_weights: vec![0.5, 0.3, 0.2],
            amount_tier_weights: vec![0.3, 0.4, 0.2, 0.1],
            liquidity_providers: ["SIVB", "RBS", "SEB", "BARC", "CITI", "HSBC"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl GeneratorConfig {
    /// Returns the approximate value of `currency` relative to the base
    /// currency.
    ///
    /// Total over the whole [`Currency`] enum: currencies missing from the
    /// table fall back to 1.0, matching the original dataset generator.
    pub fn rate_vs_base(&self, currency: Currency) -> f64 {
        self.exchange_rates.get(&currency).copied().unwrap_or(1.0)
    }

    /// Currencies other than the base currency.
    pub fn non_base_currencies(&self) -> Vec<Currency> {
        self.currencies
            .iter()
            .copied()
            .filter(|c| *c != self.base_currency)
            .collect()
    }

    /// Validates the non-weight parts of the configuration.
    ///
    /// Weight tables are validated separately when the samplers are built;
    /// together the two checks make generator construction fail fast on any
    /// invalid input, before a single record is produced.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::InvalidConfig`] when the universe is empty or
    /// contains duplicates, the base currency is missing from the universe,
    /// fewer than two non-base currencies remain (the cross-pair branch
    /// needs two), a configured exchange rate is not a positive finite
    /// number, or no liquidity providers are configured.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.currencies.is_empty() {
            return Err(GeneratorError::InvalidConfig(
                "currency universe is empty".to_string(),
            ));
        }

        let mut seen = std::collections::BTreeSet::new();
        for currency in &self.currencies {
            if !seen.insert(currency) {
                return Err(GeneratorError::InvalidConfig(format!(
                    "duplicate currency in universe: {currency}"
                )));
            }
        }

        if !self.currencies.contains(&self.base_currency) {
            return Err(GeneratorError::InvalidConfig(format!(
                "base currency {} not in universe",
                self.base_currency
            )));
        }

        if self.non_base_currencies().len() < 2 {
            return Err(GeneratorError::InvalidConfig(
                "universe needs at least two non-base currencies".to_string(),
            ));
        }

        for (currency, rate) in &self.exchange_rates {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(GeneratorError::InvalidConfig(format!(
                    "exchange rate for {currency} must be positive and finite, got {rate}"
                )));
            }
        }

        if self.liquidity_providers.is_empty() {
            return Err(GeneratorError::InvalidConfig(
                "no liquidity providers configured".to_string(),
            ));
        }

        Ok(())
    }
}
