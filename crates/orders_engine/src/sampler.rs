//! Weighted categorical sampling.
//!
//! This module provides [`CategoricalSampler`], a validated weighted
//! discrete choice over a finite ordered list of categories. A sampler is
//! built once per configuration (failing fast on any invalid weight table)
//! and then sampled once per record.

use rand::distributions::WeightedIndex;

use orders_core::types::GeneratorError;

use crate::rng::OrderRng;

/// Weighted discrete choice over a fixed category list.
///
/// Draws one category with probability proportional to its weight. Weights
/// need not sum to one; any positive total works. Construction rejects
/// mismatched lengths, negative or non-finite weights, and all-zero weight
/// tables, so sampling itself can never fail.
///
/// # Examples
///
/// ```rust
/// use orders_engine::{CategoricalSampler, OrderRng};
///
/// let sampler = CategoricalSampler::new(vec!["a", "b", "c"], &[0.3, 0.6, 0.1]).unwrap();
/// let mut rng = OrderRng::from_seed(42);
/// let drawn = sampler.sample(&mut rng);
/// assert!(["a", "b", "c"].contains(&drawn));
/// ```
#[derive(Clone, Debug)]
pub struct CategoricalSampler<T> {
    /// Ordered category list.
    categories: Vec<T>,
    /// Pre-built cumulative weight table.
    dist: WeightedIndex<f64>,
}

impl<T: Clone> CategoricalSampler<T> {
    /// Builds a sampler from parallel category and weight lists.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::WeightLengthMismatch`] when the lists differ in
    ///   length
    /// - [`GeneratorError::InvalidWeight`] when a weight is negative, NaN,
    ///   or infinite
    /// - [`GeneratorError::ZeroWeightSum`] when every weight is zero (or
    ///   both lists are empty)
    pub fn new(categories: Vec<T>, weights: &[f64]) -> Result<Self, GeneratorError> {
        if categories.len() != weights.len() {
            return Err(GeneratorError::WeightLengthMismatch {
                categories: categories.len(),
                weights: weights.len(),
            });
        }

        for (index, &weight) in weights.iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(GeneratorError::InvalidWeight { index, weight });
            }
        }

        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(GeneratorError::ZeroWeightSum);
        }

        // The checks above rule out every WeightedIndex failure mode.
        let dist = WeightedIndex::new(weights).map_err(|_| GeneratorError::ZeroWeightSum)?;

        Ok(Self { categories, dist })
    }

    /// Builds a uniform sampler (equal weight per category).
    ///
    /// # Errors
    ///
    /// [`GeneratorError::ZeroWeightSum`] when `categories` is empty.
    pub fn uniform(categories: Vec<T>) -> Result<Self, GeneratorError> {
        let weights = vec![1.0; categories.len()];
        Self::new(categories, &weights)
    }

    /// Draws one category with probability proportional to its weight.
    pub fn sample(&self, rng: &mut OrderRng) -> T {
        self.categories[rng.sample(&self.dist)].clone()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the sampler has no categories (never true for a built one).
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
