//! Converge Release Service
//!
//! Serves the download information the landing page and the desktop app need:
//!
//! - `GET /api/releases?type=latest` resolves the newest installer URL through
//!   an ordered list of sources (configured URL, Supabase storage bucket,
//!   GitHub releases).
//! - `GET /api/releases?type=appcast` proxies the appcast feed from the bucket.
//! - `GET /install` serves the shell install script from disk.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::debug;

pub mod analytics;
pub mod config;
pub mod error;
pub mod github;
pub mod handlers;
pub mod service;
pub mod storage;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_support;

use service::AppState;

/// Create the axum router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/releases", get(handlers::releases_handler))
        .route("/install", get(handlers::install_script_handler))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Initialize the release service and return the router
pub fn init_release_service(config: ReleaseConfig) -> Result<Router> {
    debug!("Initializing release service");

    let state = Arc::new(AppState::new(config).context("Failed to create release service state")?);

    Ok(create_router(state))
}

// Re-export commonly used types
pub use config::{GithubConfig, ReleaseConfig, StorageConfig};
pub use error::{ErrorResponse, ReleaseServiceError};
pub use types::{ReleaseDescriptor, ReleaseQuery, ReleaseQueryKind, ReleaseSource};
