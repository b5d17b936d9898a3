use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use tracing::instrument;

use crate::LandingState;

pub(crate) static SCRIPT: &str = include_str!("../assets/landing.js");
pub(crate) static STYLESHEET: &str = include_str!("../assets/landing.css");

const STATIC_CACHE_CONTROL: &str = "public, max-age=3600";

#[instrument(skip_all)]
pub async fn index_handler(State(state): State<Arc<LandingState>>) -> Html<String> {
    Html(state.page.clone())
}

pub async fn script_handler() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, STATIC_CACHE_CONTROL),
        ],
        SCRIPT,
    )
}

pub async fn stylesheet_handler() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, STATIC_CACHE_CONTROL),
        ],
        STYLESHEET,
    )
}
