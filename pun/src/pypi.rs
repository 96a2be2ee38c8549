use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use update_notifier_core::Version;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("package '{0}' not found on PyPI")]
    NotFound(String),
    #[error("PyPI request for '{name}' failed: {source}")]
    Request {
        name: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("PyPI request for '{name}' failed with status {status}")]
    BadStatus { name: String, status: StatusCode },
    #[error("no parseable versions found for package '{0}'")]
    NoVersions(String),
}

/// Client for querying the PyPI JSON API
pub struct PyPiClient {
    client: reqwest::Client,
    base_url: String,
}

/// PyPI JSON API response structure (release map only, the rest is ignored)
#[derive(Debug, Deserialize)]
struct IndexResponse {
    releases: HashMap<String, Vec<ReleaseFile>>,
}

#[derive(Debug, Deserialize)]
struct ReleaseFile {
    yanked: Option<bool>,
}

impl PyPiClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("pip-update-notifier/", env!("CARGO_PKG_VERSION")))
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: "https://pypi.org/pypi".to_string(),
        }
    }

    pub fn with_index_url(mut self, url: &str) -> Self {
        // Remove trailing slash if present
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Determine the latest published version of a package: the maximum of
    /// all non-yanked releases under parsed version ordering. The index's own
    /// enumeration order is never trusted.
    pub async fn latest_version(&self, name: &str) -> Result<Version, ResolveError> {
        let url = format!("{}/{}/json", self.base_url, name);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ResolveError::Request {
                name: name.to_string(),
                source: e,
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ResolveError::NotFound(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(ResolveError::BadStatus {
                name: name.to_string(),
                status: response.status(),
            });
        }

        let index_data: IndexResponse =
            response.json().await.map_err(|e| ResolveError::Request {
                name: name.to_string(),
                source: e,
            })?;

        let latest = select_latest(&index_data.releases)
            .ok_or_else(|| ResolveError::NoVersions(name.to_string()))?;

        debug!(package = name, latest = %latest, "resolved latest version");
        Ok(latest)
    }
}

impl Default for PyPiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the maximum parseable, non-yanked version from a release map
fn select_latest(releases: &HashMap<String, Vec<ReleaseFile>>) -> Option<Version> {
    releases
        .iter()
        .filter(|(_, files)| {
            // Skip releases with no files and fully yanked releases
            !files.is_empty() && !files.iter().all(|f| f.yanked.unwrap_or(false))
        })
        .filter_map(|(version_str, _)| Version::from_str(version_str).ok())
        .max()
}
