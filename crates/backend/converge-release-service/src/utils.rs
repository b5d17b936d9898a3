//! Utility functions for installer filename parsing

use regex::Regex;
use tracing::debug;

/// Matches `<prefix><major>.<minor><extension>` anywhere in a filename.
#[derive(Debug, Clone)]
pub struct VersionPattern {
    regex: Regex,
}

impl VersionPattern {
    pub fn new(prefix: &str, extension: &str) -> Result<Self, regex::Error> {
        let pattern = format!(
            r"{}([0-9]+\.[0-9]+){}",
            regex::escape(prefix),
            regex::escape(extension)
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Extract version from an installer filename,
    /// e.g. "Pomodoro-1.0.dmg" -> "1.0"
    pub fn extract(&self, filename: &str) -> Option<String> {
        let version = self
            .regex
            .captures(filename)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());
        debug!("Extracted version {:?} from {}", version, filename);
        version
    }
}

/// Join path segments onto a base URL without doubling slashes.
pub fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(segment.trim_matches('/'));
    }
    url
}
