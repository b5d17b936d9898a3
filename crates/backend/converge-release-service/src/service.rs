//! Release resolution: the ordered fallback chain, appcast lookup and the
//! install script read.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};

use crate::{
    config::ReleaseConfig,
    error::ReleaseServiceError,
    github::GithubClient,
    storage::StorageClient,
    types::{ReleaseDescriptor, ReleaseSource},
    utils::VersionPattern,
};

pub const APPCAST_OBJECT: &str = "appcast.xml";

/// Application state shared by all handlers. Immutable after construction.
#[derive(Clone)]
pub struct AppState {
    direct_download_url: Option<String>,
    storage: Option<StorageClient>,
    github: Option<GithubClient>,
    file_prefix: String,
    file_extension: String,
    version_pattern: VersionPattern,
    install_script_path: PathBuf,
}

impl AppState {
    #[instrument(skip_all)]
    pub fn new(config: ReleaseConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let version_pattern = VersionPattern::new(&config.file_prefix, &config.file_extension)
            .context("Failed to compile installer version pattern")?;

        debug!(
            direct = config.direct_download_url.is_some(),
            storage = config.storage.is_some(),
            github = config.github.is_some(),
            "Release sources configured"
        );

        Ok(Self {
            direct_download_url: config.direct_download_url,
            storage: config
                .storage
                .map(|storage| StorageClient::new(http.clone(), storage)),
            github: config.github.map(|github| GithubClient::new(http, github)),
            file_prefix: config.file_prefix,
            file_extension: config.file_extension,
            version_pattern,
            install_script_path: config.install_script_path,
        })
    }

    /// Resolve the latest installer download. Tiers are tried in order:
    /// configured URL, storage bucket, GitHub releases. A failing tier is
    /// logged and the next one is tried.
    #[instrument(skip(self))]
    pub async fn resolve_latest(&self) -> Result<ReleaseDescriptor, ReleaseServiceError> {
        if let Some(url) = &self.direct_download_url {
            debug!("Using configured download URL");
            return Ok(ReleaseDescriptor {
                url: url.clone(),
                version: None,
                source: ReleaseSource::Environment,
            });
        }

        if let Some(storage) = &self.storage {
            match self.lookup_storage(storage).await {
                Ok(Some(descriptor)) => return Ok(descriptor),
                Ok(None) => debug!("Storage bucket {} has no installer", storage.bucket()),
                Err(e) => warn!("Error fetching from Supabase: {:#}", e),
            }
        }

        if let Some(github) = &self.github {
            match self.lookup_github(github).await {
                Ok(Some(descriptor)) => return Ok(descriptor),
                Ok(None) => debug!(
                    "Latest release of {} has no {} asset",
                    github.repo_slug(),
                    self.file_extension
                ),
                Err(e) => warn!("Error fetching from GitHub: {:#}", e),
            }
        }

        Err(ReleaseServiceError::ReleaseNotFound)
    }

    async fn lookup_storage(&self, storage: &StorageClient) -> Result<Option<ReleaseDescriptor>> {
        let Some(object) = storage.latest_object(&self.file_prefix).await? else {
            return Ok(None);
        };
        debug!(
            "Latest storage object: {} (id {:?}, created {:?})",
            object.name, object.id, object.created_at
        );

        Ok(Some(ReleaseDescriptor {
            url: storage.public_url(&object.name),
            version: self.version_pattern.extract(&object.name),
            source: ReleaseSource::Supabase,
        }))
    }

    async fn lookup_github(&self, github: &GithubClient) -> Result<Option<ReleaseDescriptor>> {
        let release = github.latest_release().await?;

        Ok(release
            .installer_asset(&self.file_extension)
            .map(|asset| ReleaseDescriptor {
                url: asset.browser_download_url.clone(),
                version: Some(release.tag_name.clone()),
                source: ReleaseSource::Github,
            }))
    }

    /// Names of the tiers this instance will consult, in order.
    pub fn configured_tiers(&self) -> Vec<&'static str> {
        let mut tiers = Vec::new();
        if self.direct_download_url.is_some() {
            tiers.push(ReleaseSource::Environment.as_str());
        }
        if self.storage.is_some() {
            tiers.push(ReleaseSource::Supabase.as_str());
        }
        if self.github.is_some() {
            tiers.push(ReleaseSource::Github.as_str());
        }
        tiers
    }

    /// Fetch the appcast feed from the storage bucket.
    #[instrument(skip(self))]
    pub async fn appcast(&self) -> Result<String, ReleaseServiceError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or(ReleaseServiceError::StorageNotConfigured)?;

        match storage.fetch_public_text(APPCAST_OBJECT).await {
            Ok(Some(feed)) => {
                debug!("Fetched appcast ({} bytes)", feed.len());
                Ok(feed)
            }
            Ok(None) => Err(ReleaseServiceError::AppcastNotFound(
                storage.public_url(APPCAST_OBJECT),
            )),
            Err(e) => Err(ReleaseServiceError::AppcastFetch(format!("{:#}", e))),
        }
    }

    /// Read the install script from disk on every call.
    #[instrument(skip(self), fields(path = %self.install_script_path.display()))]
    pub async fn install_script(&self) -> Result<Vec<u8>, ReleaseServiceError> {
        let script = tokio::fs::read(&self.install_script_path).await?;
        debug!("Read install script ({} bytes)", script.len());
        Ok(script)
    }
}
