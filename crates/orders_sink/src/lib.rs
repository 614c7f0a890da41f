//! # orders_sink: Persistence and Reporting for Order Batches
//!
//! ## Sink Layer Role
//!
//! orders_sink takes fully-generated batches from the engine and hands them
//! downstream:
//!
//! - [`parquet`]: snappy-compressed Parquet files matching the reference
//!   dataset schema
//! - [`jsonl`]: line-delimited JSON for quick inspection and piping
//! - [`report`]: batch summaries (counts, ranges) for operator output
//!
//! Sinks never mutate records; a batch either writes completely or the
//! error propagates and no partial output is committed as a dataset.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use orders_core::config::GeneratorConfig;
//! use orders_engine::{OrderGenerator, OrderRng};
//! use orders_sink::{parquet, report::BatchSummary};
//!
//! let generator = OrderGenerator::new(GeneratorConfig::default()).unwrap();
//! let mut rng = OrderRng::from_seed(42);
//! let records = generator.generate(50_000, &mut rng);
//!
//! parquet::write_parquet("orders.parquet", &records).unwrap();
//! println!("{}", BatchSummary::from_records(&records));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod jsonl;
pub mod parquet;
pub mod report;

pub use error::SinkError;
pub use report::BatchSummary;
