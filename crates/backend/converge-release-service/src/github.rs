//! GitHub releases API client

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use tracing::{debug, instrument};

use crate::{config::GithubConfig, types::GithubRelease, utils::join_url};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const GITHUB_USER_AGENT: &str = "converge-release-service";

#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    config: GithubConfig,
}

impl GithubClient {
    pub fn new(http: reqwest::Client, config: GithubConfig) -> Self {
        Self { http, config }
    }

    pub fn repo_slug(&self) -> String {
        self.config.slug()
    }

    #[instrument(skip(self), fields(repo = %self.config.slug()))]
    pub async fn latest_release(&self) -> Result<GithubRelease> {
        let url = join_url(
            &self.config.api_base,
            &[
                "repos",
                &self.config.owner,
                &self.config.repo,
                "releases/latest",
            ],
        );
        debug!("Fetching latest release from {}", url);

        let mut req = self
            .http
            .get(&url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, GITHUB_USER_AGENT);
        if let Some(token) = &self.config.token {
            req = req.header(AUTHORIZATION, format!("token {}", token));
        }

        let release: GithubRelease = req
            .send()
            .await
            .with_context(|| format!("Failed to reach releases API: {}", url))?
            .error_for_status()
            .context("Releases API returned an error status")?
            .json()
            .await
            .context("Failed to decode latest release")?;

        debug!(
            "Latest release {} ({}) has {} assets",
            release.tag_name,
            release.name.as_deref().unwrap_or("untitled"),
            release.assets.len()
        );
        Ok(release)
    }
}
