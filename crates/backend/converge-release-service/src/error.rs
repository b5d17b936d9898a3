use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ReleaseServiceError {
    #[error("Invalid type parameter: {0}")]
    InvalidQueryType(String),

    #[error("No release source produced a download URL")]
    ReleaseNotFound,

    #[error("Storage backend not configured")]
    StorageNotConfigured,

    #[error("Appcast not found: {0}")]
    AppcastNotFound(String),

    #[error("Failed to fetch appcast: {0}")]
    AppcastFetch(String),

    #[error("Failed to read install script: {0}")]
    InstallScript(#[from] std::io::Error),

    /// Raised while building `ReleaseConfig` at startup. No request path
    /// produces it; if one did it would surface as a generic 500.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ReleaseServiceError {
    /// Short machine-friendly name used in analytics events.
    pub fn kind(&self) -> &'static str {
        match self {
            ReleaseServiceError::InvalidQueryType(_) => "invalid_type",
            ReleaseServiceError::ReleaseNotFound => "release_not_found",
            ReleaseServiceError::StorageNotConfigured => "storage_not_configured",
            ReleaseServiceError::AppcastNotFound(_) => "appcast_not_found",
            ReleaseServiceError::AppcastFetch(_) => "appcast_fetch_failed",
            ReleaseServiceError::InstallScript(_) => "install_script_unreadable",
            ReleaseServiceError::Config(_) => "config",
        }
    }
}

impl IntoResponse for ReleaseServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ReleaseServiceError::InvalidQueryType(t) => {
                warn!("Invalid releases type parameter: {}", t);
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid type parameter. Use 'latest' or 'appcast'",
                )
            }
            ReleaseServiceError::ReleaseNotFound => {
                warn!("No release source produced a download URL");
                (
                    StatusCode::NOT_FOUND,
                    "No release URL found. Configure DMG_DOWNLOAD_URL, SUPABASE_URL, or GITHUB_REPO",
                )
            }
            ReleaseServiceError::StorageNotConfigured => {
                warn!("Appcast requested without a storage backend");
                (StatusCode::BAD_REQUEST, "Supabase not configured")
            }
            ReleaseServiceError::AppcastNotFound(url) => {
                warn!("Appcast not found at {}", url);
                (StatusCode::NOT_FOUND, "Appcast not found")
            }
            ReleaseServiceError::AppcastFetch(e) => {
                error!("Error fetching appcast: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch appcast")
            }
            ReleaseServiceError::InstallScript(e) => {
                error!("Error reading install script: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to read install script",
                )
            }
            ReleaseServiceError::Config(e) => {
                error!("Error in releases API: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_owned(),
            }),
        )
            .into_response()
    }
}
