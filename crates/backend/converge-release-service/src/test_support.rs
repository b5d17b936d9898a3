//! In-process stand-ins for the storage bucket and the GitHub API.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;

use crate::config::{GithubConfig, ReleaseConfig, StorageConfig};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
}

#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<RecordedRequest>>>);

impl Recorder {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.0.lock().unwrap().clone()
    }
}

async fn record(State(recorder): State<Recorder>, req: Request, next: Next) -> Response {
    recorder.0.lock().unwrap().push(RecordedRequest {
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
        headers: req.headers().clone(),
    });
    next.run(req).await
}

/// Serve `router` on an ephemeral local port; returns its base URL.
pub async fn spawn(router: Router) -> (String, Recorder) {
    let recorder = Recorder::default();
    let app = router.layer(middleware::from_fn_with_state(recorder.clone(), record));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), recorder)
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Storage bucket answering the listing with `status` and `listing`, and
/// serving `appcast` (if any) as the public appcast object.
pub fn storage_router(status: StatusCode, listing: Value, appcast: Option<&'static str>) -> Router {
    Router::new()
        .route(
            "/storage/v1/object/list/{bucket}",
            get(move || {
                let listing = listing.clone();
                async move { (status, Json(listing)) }
            }),
        )
        .route(
            "/storage/v1/object/public/{bucket}/appcast.xml",
            get(move || async move {
                match appcast {
                    Some(feed) => (StatusCode::OK, feed).into_response(),
                    None => (StatusCode::NOT_FOUND, "Object not found").into_response(),
                }
            }),
        )
}

/// Storage bucket whose listing only answers after `delay`.
pub fn slow_storage_router(delay: Duration) -> Router {
    Router::new().route(
        "/storage/v1/object/list/{bucket}",
        get(move || async move {
            tokio::time::sleep(delay).await;
            Json(serde_json::json!([{"name": "Pomodoro-9.9.dmg"}]))
        }),
    )
}

/// GitHub API answering the latest release with `status` and `release`.
pub fn github_router(status: StatusCode, release: Value) -> Router {
    Router::new().route(
        "/repos/{owner}/{repo}/releases/latest",
        get(move || {
            let release = release.clone();
            async move { (status, Json(release)) }
        }),
    )
}

pub fn storage_config(base_url: &str) -> StorageConfig {
    StorageConfig {
        base_url: base_url.to_string(),
        bucket: "releases".to_string(),
        anon_key: Some("anon-key".to_string()),
    }
}

pub fn github_config(base_url: &str, token: Option<&str>) -> GithubConfig {
    GithubConfig::parse_repo("rckbrcls/converge", token.map(str::to_string), base_url).unwrap()
}

pub fn base_config() -> ReleaseConfig {
    ReleaseConfig {
        install_script_path: "/nonexistent/install.sh".into(),
        ..ReleaseConfig::default()
    }
}
