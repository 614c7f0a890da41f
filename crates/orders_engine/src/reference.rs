//! Order reference generation.
//!
//! References look unique but are only probabilistically so: no uniqueness
//! is enforced, matching the reference dataset.

use orders_core::types::OrderType;

use crate::rng::OrderRng;

/// Length of the random reference suffix.
pub const SUFFIX_LENGTH: usize = 8;

/// Generates an order reference for the given order type.
///
/// The reference is an 8-character uppercase-alphanumeric suffix prefixed
/// with `KCH-` for chain orders and `K-` otherwise.
///
/// # Collision probability
///
/// With a 36-character alphabet there are 36^8 ≈ 2.8e12 suffixes. By the
/// birthday bound, a 50,000-record batch contains at least one duplicate
/// reference with probability ≈ n²/(2·36^8) ≈ 4.4e-4. Collisions are
/// accepted, not prevented; consumers needing collision-free identifiers
/// must deduplicate downstream.
///
/// # Examples
///
/// ```rust
/// use orders_core::types::OrderType;
/// use orders_engine::{reference, OrderRng};
///
/// let mut rng = OrderRng::from_seed(42);
/// let chain = reference::generate_reference(OrderType::Chain, &mut rng);
/// assert!(chain.starts_with("KCH-"));
///
/// let spot = reference::generate_reference(OrderType::Spot, &mut rng);
/// assert!(spot.starts_with("K-") && !spot.starts_with("KCH-"));
/// ```
pub fn generate_reference(order_type: OrderType, rng: &mut OrderRng) -> String {
    let suffix = rng.reference_suffix(SUFFIX_LENGTH);
    match order_type {
        OrderType::Chain => format!("KCH-{suffix}"),
        OrderType::Forward | OrderType::Spot => format!("K-{suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_prefix() {
        let mut rng = OrderRng::from_seed(42);
        for _ in 0..100 {
            let r = generate_reference(OrderType::Chain, &mut rng);
            assert!(r.starts_with("KCH-"));
            assert_eq!(r.len(), "KCH-".len() + SUFFIX_LENGTH);
        }
    }

    #[test]
    fn test_non_chain_prefix() {
        let mut rng = OrderRng::from_seed(42);
        for order_type in [OrderType::Forward, OrderType::Spot] {
            let r = generate_reference(order_type, &mut rng);
            assert!(r.starts_with("K-"));
            assert!(!r.starts_with("KCH-"));
            assert_eq!(r.len(), "K-".len() + SUFFIX_LENGTH);
        }
    }

    #[test]
    fn test_suffix_charset() {
        let mut rng = OrderRng::from_seed(42);
        for _ in 0..1_000 {
            let r = generate_reference(OrderType::Forward, &mut rng);
            let suffix = r.strip_prefix("K-").unwrap();
            assert!(suffix
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_references_mostly_unique() {
        // Uniqueness is probabilistic only; 10k draws from 2.8e12 suffixes
        // should not collide under a fixed seed.
        let mut rng = OrderRng::from_seed(42);
        let refs: std::collections::HashSet<String> = (0..10_000)
            .map(|_| generate_reference(OrderType::Chain, &mut rng))
            .collect();
        assert_eq!(refs.len(), 10_000);
    }
}
