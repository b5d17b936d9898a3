use std::path::PathBuf;

pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PROJECT_URL: &str = "https://github.com/rckbrcls/converge";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Clone)]
pub struct LandingConfig {
    /// Public origin of the site, used to build the install command
    pub site_url: String,
    pub project_url: String,
    /// Rendered straight into the download buttons when set; otherwise the
    /// browser asks `/api/releases?type=latest`.
    pub direct_download_url: Option<String>,
    /// Directory served under `/assets`
    pub public_dir: PathBuf,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            project_url: DEFAULT_PROJECT_URL.to_string(),
            direct_download_url: None,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl LandingConfig {
    /// Build from `lookup`, which yields trimmed, non-empty values.
    ///
    /// `direct_download_url` is left unset; the caller copies it from the
    /// release configuration so the page and the API agree.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            site_url: lookup("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            project_url: lookup("PROJECT_URL").unwrap_or_else(|| DEFAULT_PROJECT_URL.to_string()),
            direct_download_url: None,
            public_dir: lookup("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
        }
    }

    pub fn install_command(&self) -> String {
        format!("curl -fsSL {}/install | bash", self.site_url)
    }
}
