use std::net::SocketAddr;

use anyhow::Context;
use axum::{Router, http::HeaderValue};
use converge_landing::{LandingConfig, init_landing};
use converge_release_service::{ReleaseConfig, init_release_service};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Configuration for running the site server.
pub struct ServerConfig {
    pub http_addr: SocketAddr,
    pub release: ReleaseConfig,
    pub landing: LandingConfig,
    /// Comma separated list of origins allowed to call the API from a browser
    pub cors_allowed_origins: String,
    /// When this receiver gets a value, the server shuts down gracefully.
    pub shutdown: tokio::sync::watch::Receiver<()>,
}

impl ServerConfig {
    /// Build every section of the configuration from one `lookup`, which
    /// yields trimmed, non-empty values. The landing page gets the same
    /// direct download URL the release API resolves first.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        shutdown: tokio::sync::watch::Receiver<()>,
    ) -> anyhow::Result<Self> {
        let release =
            ReleaseConfig::from_lookup(&lookup).context("Invalid release configuration")?;
        let landing = LandingConfig {
            direct_download_url: release.direct_download_url.clone(),
            ..LandingConfig::from_lookup(&lookup)
        };

        let http_addr = lookup("HTTP_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse::<SocketAddr>()
            .context("Invalid HTTP_ADDR format")?;
        let cors_allowed_origins =
            lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| landing.site_url.clone());

        Ok(Self {
            http_addr,
            release,
            landing,
            cors_allowed_origins,
            shutdown,
        })
    }
}

fn build_cors(allowed_origins: &str) -> CorsLayer {
    let allowed: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<HeaderValue>().ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Assemble the landing page, the release API and the health probe.
pub fn build_router(
    release: ReleaseConfig,
    landing: &LandingConfig,
    cors_allowed_origins: &str,
) -> anyhow::Result<Router> {
    let release_router = init_release_service(release)?;
    let landing_router = init_landing(landing)?;

    let health_route = Router::new().route(
        "/health",
        axum::routing::get(|| async { axum::http::StatusCode::OK }),
    );

    Ok(landing_router
        .merge(release_router)
        .merge(health_route)
        .layer(build_cors(cors_allowed_origins)))
}

pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    if let Some(posthog_key) = std::env::var("POSTHOG_API_KEY")
        .ok()
        .filter(|s| !s.is_empty())
    {
        match posthog_rs::init_global(posthog_key.as_str()).await {
            Ok(()) => tracing::info!("PostHog analytics initialized"),
            Err(e) => tracing::warn!("Failed to initialize PostHog: {}", e),
        }
    } else {
        tracing::info!("POSTHOG_API_KEY not set, analytics disabled");
    }

    let http_router = build_router(
        config.release,
        &config.landing,
        &config.cors_allowed_origins,
    )?;

    tracing::info!("Starting HTTP server at {}", config.http_addr);

    let mut http_shutdown = config.shutdown.clone();
    let http_listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(
        http_listener,
        http_router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        let _ = http_shutdown.changed().await;
        tracing::info!("Shutting down HTTP server...");
    })
    .await
    .inspect_err(|e| tracing::error!("HTTP server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use super::*;

    fn router() -> Router {
        let release = ReleaseConfig {
            direct_download_url: Some("https://cdn.example/Converge.dmg".into()),
            ..ReleaseConfig::default()
        };
        build_router(release, &LandingConfig::default(), "https://converge.example").unwrap()
    }

    async fn status_of(uri: &str) -> StatusCode {
        router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn page_and_api_share_the_download_url() {
        let (_tx, rx) = tokio::sync::watch::channel(());
        let config = ServerConfig::from_lookup(
            |key| match key {
                "NEXT_PUBLIC_DMG_DOWNLOAD_URL" => Some("https://cdn.example/Converge.dmg".into()),
                "SITE_URL" => Some("https://converge.example".into()),
                "HTTP_ADDR" => Some("127.0.0.1:8080".into()),
                _ => None,
            },
            rx,
        )
        .unwrap();

        assert_eq!(
            config.release.direct_download_url.as_deref(),
            Some("https://cdn.example/Converge.dmg")
        );
        assert_eq!(
            config.landing.direct_download_url,
            config.release.direct_download_url
        );
        assert_eq!(config.http_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_allowed_origins, "https://converge.example");
    }

    #[test]
    fn bad_listen_address_is_rejected() {
        let (_tx, rx) = tokio::sync::watch::channel(());
        let result = ServerConfig::from_lookup(
            |key| (key == "HTTP_ADDR").then(|| "not-an-address".to_string()),
            rx,
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn all_surfaces_are_mounted() {
        assert_eq!(status_of("/").await, StatusCode::OK);
        assert_eq!(status_of("/health").await, StatusCode::OK);
        assert_eq!(status_of("/api/releases?type=latest").await, StatusCode::OK);
        assert_eq!(status_of("/static/landing.js").await, StatusCode::OK);
        assert_eq!(status_of("/nope").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/releases?type=latest")
                    .header(header::ORIGIN, "https://converge.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://converge.example"
        );
    }
}
