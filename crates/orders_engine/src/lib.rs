//! # orders_engine: Synthetic FX Order Record Generator
//!
//! ## Engine Layer Role
//!
//! orders_engine composes five sub-algorithms into whole, internally-
//! consistent [`OrderRecord`](orders_core::types::OrderRecord)s:
//!
//! - [`sampler`]: weighted categorical sampling (order type, status, tier)
//! - [`pair`]: currency-pair selection biased toward the base currency
//! - [`rate`]: exchange-rate synthesis with bounded random variation
//! - [`amount`]: tiered order-amount synthesis in minor units
//! - [`dates`]: status-conditioned date sequencing
//!
//! plus [`reference`] for order references and [`generator`] for assembly.
//!
//! ## Determinism
//!
//! All randomness flows through an explicit [`OrderRng`] handle; the
//! generation date is injected at construction. A fixed seed therefore
//! reproduces a batch exactly, and [`OrderGenerator::generate_parallel`]
//! derives an independent stream per chunk so parallel output is
//! deterministic too.
//!
//! ## Usage Examples
//!
//! ```rust
//! use orders_core::config::GeneratorConfig;
//! use orders_engine::{OrderGenerator, OrderRng};
//!
//! let generator = OrderGenerator::new(GeneratorConfig::default()).unwrap();
//! let mut rng = OrderRng::from_seed(42);
//!
//! let records = generator.generate(100, &mut rng);
//! assert_eq!(records.len(), 100);
//! assert!(records.iter().all(|r| r.buy_currency != r.sell_currency));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod amount;
pub mod dates;
pub mod generator;
pub mod pair;
pub mod rate;
pub mod reference;
pub mod rng;
pub mod sampler;

pub use generator::OrderGenerator;
pub use rng::OrderRng;
pub use sampler::CategoricalSampler;
