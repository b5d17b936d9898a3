use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use tracing::{debug, instrument, warn};

use crate::{
    analytics,
    service::AppState,
    types::{ReleaseQuery, ReleaseQueryKind},
};

pub const APPCAST_CONTENT_TYPE: &str = "application/xml";
pub const INSTALL_SCRIPT_CONTENT_TYPE: &str = "text/x-shellscript";
pub const INSTALL_SCRIPT_DISPOSITION: &str = "inline; filename=install.sh";

/// `GET /api/releases?type=latest|appcast`
///
/// Reads raw query pairs; a repeated `type` keeps its first value.
#[instrument(skip_all)]
pub async fn releases_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = ReleaseQuery::from_pairs(&pairs);
    debug!("Releases request: type={:?}", query.kind);
    let kind = match query.kind() {
        Ok(kind) => kind,
        Err(e) => return e.into_response(),
    };

    match kind {
        ReleaseQueryKind::Latest => latest_release(&state).await,
        ReleaseQueryKind::Appcast => appcast(&state).await,
    }
}

async fn latest_release(state: &AppState) -> Response {
    match state.resolve_latest().await {
        Ok(release) => {
            debug!(
                "Resolved release: source={}, version={:?}",
                release.source, release.version
            );
            analytics::track_release_lookup(release.source.as_str(), release.version.as_deref());
            (StatusCode::OK, Json(release)).into_response()
        }
        Err(e) => {
            warn!("Release lookup failed: {}", e);
            analytics::track_release_lookup_failed(&state.configured_tiers(), e.kind());
            e.into_response()
        }
    }
}

async fn appcast(state: &AppState) -> Response {
    match state.appcast().await {
        Ok(feed) => {
            analytics::track_appcast_request(true);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, APPCAST_CONTENT_TYPE)],
                feed,
            )
                .into_response()
        }
        Err(e) => {
            analytics::track_appcast_request(false);
            e.into_response()
        }
    }
}

/// `GET /install`
#[instrument(skip(state))]
pub async fn install_script_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.install_script().await {
        Ok(script) => {
            analytics::track_install_script_request(true);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, INSTALL_SCRIPT_CONTENT_TYPE),
                    (header::CONTENT_DISPOSITION, INSTALL_SCRIPT_DISPOSITION),
                ],
                script,
            )
                .into_response()
        }
        Err(e) => {
            analytics::track_install_script_request(false);
            e.into_response()
        }
    }
}
