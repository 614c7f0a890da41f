//! Order category enums and the `OrderRecord` value type.
//!
//! This module provides:
//! - `OrderType`, `MarketDirection`, `OrderStatus`: categorical order fields
//! - `AmountTier`: order-size tiers with their whole-unit amount ranges
//! - `OrderRecord`: one fully-populated synthetic FX order
//!
//! Serialised field and variant names match the reference dataset schema
//! (snake_case variants, `fx_order_type` column).

use std::fmt;

use chrono::NaiveDate;

use super::currency::Currency;

/// Structural classification of an FX order.
///
/// # Examples
///
/// ```
/// use orders_core::types::order::OrderType;
///
/// assert_eq!(OrderType::Chain.as_str(), "chain");
/// assert_eq!(serde_json::to_string(&OrderType::Forward).unwrap(), "\"forward\"");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Forward-settling single order
    Forward,
    /// Chained order (most common in the reference dataset)
    Chain,
    /// Spot order
    Spot,
}

impl OrderType {
    /// All order types, in reference-dataset order.
    pub const ALL: [OrderType; 3] = [OrderType::Forward, OrderType::Chain, OrderType::Spot];

    /// Returns the snake_case name used in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Forward => "forward",
            OrderType::Chain => "chain",
            OrderType::Spot => "spot",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the record represents the buy or sell leg perspective.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketDirection {
    /// Buy-leg perspective
    Buy,
    /// Sell-leg perspective
    Sell,
}

impl MarketDirection {
    /// Both directions.
    pub const ALL: [MarketDirection; 2] = [MarketDirection::Buy, MarketDirection::Sell];

    /// Returns the snake_case name used in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketDirection::Buy => "buy",
            MarketDirection::Sell => "sell",
        }
    }
}

impl fmt::Display for MarketDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of an order.
///
/// Executed statuses (`ClosedToTrading`, `Completed`) carry an execution
/// date; `Open` never does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Still open for trading
    Open,
    /// Closed to further trading, not yet completed
    ClosedToTrading,
    /// Fully completed
    Completed,
}

impl OrderStatus {
    /// All statuses, in reference-dataset order.
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Open,
        OrderStatus::ClosedToTrading,
        OrderStatus::Completed,
    ];

    /// Returns the snake_case name used in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::ClosedToTrading => "closed_to_trading",
            OrderStatus::Completed => "completed",
        }
    }

    /// Whether this status implies the order has been executed.
    pub fn is_executed(&self) -> bool {
        matches!(self, OrderStatus::ClosedToTrading | OrderStatus::Completed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order-size tiers for amount synthesis.
///
/// Each tier maps to an inclusive range of whole currency units. The mixed-
/// tier model avoids a single heavy-tailed distribution while keeping a
/// realistic long tail of large trades.
///
/// # Examples
///
/// ```
/// use orders_core::types::order::AmountTier;
///
/// assert_eq!(AmountTier::Small.units_range(), 100..=50_000);
/// assert_eq!(*AmountTier::VeryLarge.units_range().end(), 100_000_000);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountTier {
    /// 100 – 50K units
    Small,
    /// 50K – 500K units
    Medium,
    /// 500K – 5M units
    Large,
    /// 5M – 100M units
    VeryLarge,
}

impl AmountTier {
    /// All tiers, smallest first.
    pub const ALL: [AmountTier; 4] = [
        AmountTier::Small,
        AmountTier::Medium,
        AmountTier::Large,
        AmountTier::VeryLarge,
    ];

    /// Inclusive range of whole currency units for this tier.
    pub fn units_range(&self) -> std::ops::RangeInclusive<i64> {
        match self {
            AmountTier::Small => 100..=50_000,
            AmountTier::Medium => 50_000..=500_000,
            AmountTier::Large => 500_000..=5_000_000,
            AmountTier::VeryLarge => 5_000_000..=100_000_000,
        }
    }

    /// Returns the snake_case name used in configuration tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            AmountTier::Small => "small",
            AmountTier::Medium => "medium",
            AmountTier::Large => "large",
            AmountTier::VeryLarge => "very_large",
        }
    }
}

impl fmt::Display for AmountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One synthetic FX order, created whole and never mutated.
///
/// Field names serialise to the reference dataset column names; dates
/// serialise as ISO 8601 via chrono.
///
/// # Invariants
///
/// Upheld by the engine, not by this type:
/// - `sell_amount_cents == trunc(buy_amount_cents * rate)`
/// - `buy_currency != sell_currency`
/// - `value_date` is 1–365 days after `creation_date`
/// - `execution_date` is present only for executed statuses and never
///   precedes `creation_date`
/// - the `currency`/`amount_cents` projection follows `market_direction`
///   (buy → buy leg, sell → sell leg)
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct OrderRecord {
    /// Unique-looking identifier, identical to `reference`.
    pub id: String,
    /// Order reference: `KCH-` prefix for chains, `K-` otherwise.
    pub reference: String,
    /// Structural order type.
    #[serde(rename = "fx_order_type")]
    pub order_type: OrderType,
    /// Record source tag, constant `"fx_order"` in this dataset.
    pub source: String,
    /// Date the order was created.
    pub creation_date: NaiveDate,
    /// Buy or sell leg perspective.
    pub market_direction: MarketDirection,
    /// Bought amount in minor units.
    pub buy_amount_cents: i64,
    /// Sold amount in minor units, derived from `buy_amount_cents * rate`.
    pub sell_amount_cents: i64,
    /// Currency bought.
    pub buy_currency: Currency,
    /// Currency sold.
    pub sell_currency: Currency,
    /// Direction-dependent primary amount in minor units.
    pub amount_cents: i64,
    /// Direction-dependent counter amount in minor units.
    pub counter_amount_cents: i64,
    /// Direction-dependent primary currency.
    pub currency: Currency,
    /// Direction-dependent counter currency.
    pub counter_currency: Currency,
    /// Contractual settlement date, always after `creation_date`.
    pub value_date: NaiveDate,
    /// Sell-per-buy exchange rate.
    pub rate: f64,
    /// Counterparty institution supplying the rate.
    pub liquidity_provider: String,
    /// Execution date, present only for executed statuses.
    pub execution_date: Option<NaiveDate>,
    /// Lifecycle status.
    pub status: OrderStatus,
}
