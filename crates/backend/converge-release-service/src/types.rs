//! Data types and structures for the release service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ReleaseServiceError;

/// Which fallback tier produced a release descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseSource {
    Environment,
    Supabase,
    Github,
}

impl ReleaseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseSource::Environment => "environment",
            ReleaseSource::Supabase => "supabase",
            ReleaseSource::Github => "github",
        }
    }
}

impl std::fmt::Display for ReleaseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Response for `GET /api/releases?type=latest`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDescriptor {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub source: ReleaseSource,
}

/// Query parameters for the releases endpoint
#[derive(Debug, Default)]
pub struct ReleaseQuery {
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseQueryKind {
    Latest,
    Appcast,
}

impl ReleaseQuery {
    /// Build from raw query pairs. A repeated `type` key keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            kind: pairs
                .iter()
                .find(|(key, _)| key == "type")
                .map(|(_, value)| value.clone()),
        }
    }

    /// A missing or empty `type` means `latest`.
    pub fn kind(&self) -> Result<ReleaseQueryKind, ReleaseServiceError> {
        match self.kind.as_deref().filter(|raw| !raw.is_empty()) {
            None => Ok(ReleaseQueryKind::Latest),
            Some(raw) => raw.parse(),
        }
    }
}

impl std::str::FromStr for ReleaseQueryKind {
    type Err = ReleaseServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(ReleaseQueryKind::Latest),
            "appcast" => Ok(ReleaseQueryKind::Appcast),
            other => Err(ReleaseServiceError::InvalidQueryType(other.to_string())),
        }
    }
}

// ============================================================================
// Upstream payloads
// ============================================================================

/// Entry of a Supabase storage bucket listing. Does not contain all fields.
#[derive(Deserialize, Debug, Clone)]
pub struct StorageObject {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A release asset. Does not contain all fields.
#[derive(Deserialize, Debug, Clone)]
pub struct GithubAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// A GitHub release. Does not contain all fields.
///
/// See <https://docs.github.com/en/rest/releases/releases#get-the-latest-release>
#[derive(Deserialize, Debug, Clone)]
pub struct GithubRelease {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub assets: Vec<GithubAsset>,
}

impl GithubRelease {
    /// First asset whose name ends with `extension`.
    pub fn installer_asset(&self, extension: &str) -> Option<&GithubAsset> {
        self.assets.iter().find(|a| a.name.ends_with(extension))
    }
}
