//! Converge landing page
//!
//! Renders the marketing page once at startup and serves it together with
//! the browser script, the stylesheet and the screenshot assets.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::debug;

pub mod animation;
pub mod config;
pub mod content;
pub mod handlers;
pub mod page;

pub use animation::AnimationSettings;
pub use config::LandingConfig;

pub struct LandingState {
    page: String,
    public_dir: PathBuf,
}

impl LandingState {
    pub fn new(config: &LandingConfig) -> Result<Self> {
        let page = page::render_page(config, &AnimationSettings::new())
            .context("Failed to serialize animation settings")?
            .into_string();
        debug!("Rendered landing page ({} bytes)", page.len());

        Ok(Self {
            page,
            public_dir: config.public_dir.clone(),
        })
    }
}

pub fn create_router(state: Arc<LandingState>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/static/landing.js", get(handlers::script_handler))
        .route("/static/landing.css", get(handlers::stylesheet_handler))
        .nest_service("/assets", ServeDir::new(&state.public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn init_landing(config: &LandingConfig) -> Result<Router> {
    debug!("Initializing landing page from {}", config.public_dir.display());

    let state = Arc::new(LandingState::new(config)?);

    Ok(create_router(state))
}
