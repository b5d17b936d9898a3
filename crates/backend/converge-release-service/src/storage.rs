//! Supabase storage bucket client

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::{config::StorageConfig, types::StorageObject, utils::join_url};

const LIST_PATH: &str = "storage/v1/object/list";
const PUBLIC_PATH: &str = "storage/v1/object/public";

#[derive(Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    config: StorageConfig,
}

impl StorageClient {
    pub fn new(http: reqwest::Client, config: StorageConfig) -> Self {
        Self { http, config }
    }

    pub fn bucket(&self) -> &str {
        &self.config.bucket
    }

    /// Public download URL of an object in the bucket
    pub fn public_url(&self, name: &str) -> String {
        join_url(
            &self.config.base_url,
            &[PUBLIC_PATH, &self.config.bucket, name],
        )
    }

    /// Most recently created object whose name starts with `prefix`
    #[instrument(skip(self), fields(bucket = %self.config.bucket))]
    pub async fn latest_object(&self, prefix: &str) -> Result<Option<StorageObject>> {
        let url = join_url(&self.config.base_url, &[LIST_PATH, &self.config.bucket]);
        debug!("Listing storage objects at {}", url);

        let objects: Vec<StorageObject> = self
            .http
            .get(&url)
            .query(&[
                ("prefix", prefix),
                ("sortBy", "created_at"),
                ("order", "desc"),
                ("limit", "1"),
            ])
            .header("apikey", self.config.anon_key.as_deref().unwrap_or(""))
            .send()
            .await
            .with_context(|| format!("Failed to list storage bucket: {}", url))?
            .error_for_status()
            .context("Storage listing returned an error status")?
            .json()
            .await
            .context("Failed to decode storage listing")?;

        debug!("Storage listing returned {} objects", objects.len());
        Ok(objects.into_iter().next())
    }

    /// Fetch a public object as text. Returns `None` when the bucket answers
    /// with a non-success status.
    #[instrument(skip(self), fields(bucket = %self.config.bucket))]
    pub async fn fetch_public_text(&self, name: &str) -> Result<Option<String>> {
        let url = self.public_url(name);
        debug!("Fetching public object {}", url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch public object: {}", url))?;

        if !resp.status().is_success() {
            debug!("Public object {} answered {}", url, resp.status());
            return Ok(None);
        }

        let body = resp
            .text()
            .await
            .context("Failed to read public object body")?;
        Ok(Some(body))
    }
}
