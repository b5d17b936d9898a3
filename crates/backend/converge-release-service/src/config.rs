use std::{path::PathBuf, time::Duration};

use url::Url;

use crate::error::ReleaseServiceError;

pub const DEFAULT_BUCKET_NAME: &str = "releases";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_FILE_PREFIX: &str = "Pomodoro-";
pub const DEFAULT_FILE_EXTENSION: &str = ".dmg";
pub const DEFAULT_INSTALL_SCRIPT_PATH: &str = "public/install.sh";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Supabase storage bucket holding installers and the appcast feed.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Base URL without trailing slash, e.g. `https://xyz.supabase.co`
    pub base_url: String,
    pub bucket: String,
    pub anon_key: Option<String>,
}

/// GitHub repository whose latest release is used as the last fallback.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub owner: String,
    pub repo: String,
    pub token: Option<String>,
    pub api_base: String,
}

impl GithubConfig {
    /// Parse an `owner/name` repository identifier.
    pub fn parse_repo(
        slug: &str,
        token: Option<String>,
        api_base: impl Into<String>,
    ) -> Result<Self, ReleaseServiceError> {
        match slug.trim().split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                    token,
                    api_base: trim_base(&api_base.into()),
                })
            }
            _ => Err(ReleaseServiceError::Config(format!(
                "GITHUB_REPO '{slug}' must be in the form 'owner/name'"
            ))),
        }
    }

    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    pub direct_download_url: Option<String>,
    pub storage: Option<StorageConfig>,
    pub github: Option<GithubConfig>,
    /// Installer filename prefix used for the bucket listing and version extraction
    pub file_prefix: String,
    /// Installer extension, e.g. `.dmg`
    pub file_extension: String,
    pub upstream_timeout: Duration,
    pub install_script_path: PathBuf,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            direct_download_url: None,
            storage: None,
            github: None,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            install_script_path: PathBuf::from(DEFAULT_INSTALL_SCRIPT_PATH),
        }
    }
}

impl ReleaseConfig {
    /// Build the configuration from `lookup`, which maps a variable name to
    /// its value. Blank values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ReleaseServiceError> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let direct_download_url =
            var("DMG_DOWNLOAD_URL").or_else(|| var("NEXT_PUBLIC_DMG_DOWNLOAD_URL"));

        let storage = match var("SUPABASE_URL") {
            Some(base_url) => {
                Url::parse(&base_url).map_err(|e| {
                    ReleaseServiceError::Config(format!(
                        "SUPABASE_URL '{base_url}' is not a valid URL: {e}"
                    ))
                })?;
                Some(StorageConfig {
                    base_url: trim_base(&base_url),
                    bucket: var("SUPABASE_BUCKET_NAME")
                        .unwrap_or_else(|| DEFAULT_BUCKET_NAME.to_string()),
                    anon_key: var("SUPABASE_ANON_KEY"),
                })
            }
            None => None,
        };

        let github = match var("GITHUB_REPO") {
            Some(slug) => Some(GithubConfig::parse_repo(
                &slug,
                var("GITHUB_TOKEN"),
                var("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            )?),
            None => None,
        };

        let upstream_timeout = match var("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.parse().map_err(|_| {
                ReleaseServiceError::Config(format!(
                    "UPSTREAM_TIMEOUT_SECS '{raw}' is not a whole number of seconds"
                ))
            })?),
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        Ok(Self {
            direct_download_url,
            storage,
            github,
            file_prefix: var("RELEASE_FILE_PREFIX")
                .unwrap_or_else(|| DEFAULT_FILE_PREFIX.to_string()),
            file_extension: var("RELEASE_FILE_EXTENSION")
                .unwrap_or_else(|| DEFAULT_FILE_EXTENSION.to_string()),
            upstream_timeout,
            install_script_path: var("INSTALL_SCRIPT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALL_SCRIPT_PATH)),
        })
    }
}

/// Read an environment variable, treating blank values as unset.
pub fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
