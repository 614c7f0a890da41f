//! Core currency, order, and error types.
//!
//! This module provides:
//! - `currency`: The fixed currency universe used by the generator
//! - `order`: Order category enums and the `OrderRecord` value type
//! - `error`: Structured error types for generator configuration
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Currency`] from `currency`
//! - [`AmountTier`], [`MarketDirection`], [`OrderRecord`], [`OrderStatus`], [`OrderType`] from `order`
//! - [`GeneratorError`] from `error`

pub mod currency;
pub mod error;
pub mod order;

// Re-export commonly used types at module level
pub use currency::Currency;
pub use error::GeneratorError;
pub use order::{AmountTier, MarketDirection, OrderRecord, OrderStatus, OrderType};
