//! HTTP server for browsing generated order datasets.
//!
//! Serves the contents of a dataset directory over HTTP with a permissive
//! CORS policy so that browser-based tooling (notebooks, dashboards) can
//! fetch Parquet or JSONL files directly from another origin.
//!
//! The server exposes:
//!
//! - `GET /health` - liveness probe with version and uptime
//! - any other path - static files resolved against the configured root

#![deny(missing_docs)]

pub mod config;
pub mod routes;
pub mod server;

/// Crate version as reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
