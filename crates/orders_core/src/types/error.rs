//! Error types for structured error handling.
//!
//! This module provides:
//! - `GeneratorError`: Invalid-input errors from generator configuration
//! - `CurrencyError`: Errors from currency parsing
//!
//! Generation itself is total: once a configuration has passed validation,
//! no record-level draw can fail. Every variant here therefore belongs to
//! the invalid-input family and aborts a batch before any record is
//! produced.

use thiserror::Error;

/// Invalid-input errors raised while building a generator.
///
/// A misconfigured sampler would invalidate the statistical properties of
/// the whole run, so these errors are not recoverable and must abort the
/// batch rather than skip records.
///
/// # Variants
/// - `WeightLengthMismatch`: Category and weight lists differ in length
/// - `InvalidWeight`: A weight is negative or non-finite
/// - `ZeroWeightSum`: All weights are zero
/// - `InvalidConfig`: A configuration table is otherwise unusable
///
/// # Examples
/// ```
/// use orders_core::types::GeneratorError;
///
/// let err = GeneratorError::ZeroWeightSum;
/// assert_eq!(
///     format!("{}", err),
///     "weights must contain at least one positive value"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// Category and weight lists have different lengths.
    #[error("categories and weights have different lengths: {categories} vs {weights}")]
    WeightLengthMismatch {
        /// Number of categories provided
        categories: usize,
        /// Number of weights provided
        weights: usize,
    },

    /// A weight is negative, NaN, or infinite.
    #[error("invalid weight {weight} at index {index}")]
    InvalidWeight {
        /// Index of the offending weight
        index: usize,
        /// The offending weight value
        weight: f64,
    },

    /// Every weight is zero, leaving nothing to sample.
    #[error("weights must contain at least one positive value")]
    ZeroWeightSum,

    /// A configuration table is otherwise unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Currency-related errors.
///
/// Only reachable through parsing user-supplied configuration; the closed
/// [`Currency`](super::Currency) universe makes lookups during generation
/// total.
///
/// # Examples
/// ```
/// use orders_core::types::error::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
}
