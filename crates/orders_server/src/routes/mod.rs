//! Route definitions and router assembly.

pub mod health;

use crate::config::ServerConfig;
use axum::http::Method;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared state passed to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Resolved server configuration.
    pub config: Arc<ServerConfig>,
    /// Process start time, used for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    /// Creates the shared state for a given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}

/// Builds the application router.
///
/// Requests not matched by an explicit route fall through to a static-file
/// service rooted at the configured directory. Every response carries
/// permissive CORS headers so browser clients on other origins can fetch
/// dataset files, and `OPTIONS` preflights are answered without touching
/// the filesystem.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any);

    let files = ServeDir::new(state.config.root_dir.clone());

    Router::new()
        .merge(health::routes())
        .fallback_service(files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
