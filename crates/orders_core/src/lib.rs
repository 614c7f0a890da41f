//! # orders_core: Foundation Types for Synthetic FX Order Data
//!
//! ## Foundation Layer Role
//!
//! orders_core is the bottom layer of the workspace, providing:
//! - Currency types for the fixed generation universe (`types::currency`)
//! - Order record and category types (`types::order`)
//! - Error types: `GeneratorError` (`types::error`)
//! - Generator configuration: `GeneratorConfig` (`config`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other workspace crates, with
//! minimal external dependencies:
//! - chrono: Date arithmetic and ISO 8601 serialisation
//! - serde: Serialisation of records and configuration
//! - thiserror: Structured error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use orders_core::config::GeneratorConfig;
//! use orders_core::types::Currency;
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.base_currency, Currency::EUR);
//! assert!(config.validate().is_ok());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod types;
