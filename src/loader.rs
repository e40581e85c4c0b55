//! Hierarchy document loading.
//!
//! One fetch per session: no retry, no cancellation, no overlapping loads.

use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::HttpSettings;
use crate::domain::HierarchyNode;

/// Where the hierarchy document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Fetched over HTTP(S)
    Url(Url),
    /// Read from the local filesystem
    File(PathBuf),
}

impl DocumentSource {
    /// Classify a location spec: anything parsing as an http(s) URL is
    /// fetched, everything else is treated as a file path.
    pub fn parse(spec: &str) -> Self {
        match Url::parse(spec) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Url(url),
            _ => Self::File(PathBuf::from(spec)),
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Failures of the single load attempt. All are terminal: no retry.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The fetch completed but the server signaled failure
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// Status-less network failure (offline, refused, timed out)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body could not be interpreted as a hierarchy document
    #[error("cannot parse hierarchy document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Performs the single startup fetch of the hierarchy document.
#[derive(Debug, Clone)]
pub struct HierarchyLoader {
    client: Client,
}

impl HierarchyLoader {
    pub fn new() -> Self {
        Self::with_settings(&HttpSettings::default())
    }

    pub fn with_settings(settings: &HttpSettings) -> Self {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(&settings.user_agent)
            .build()
            .expect("failed to create HTTP client");
        Self { client }
    }

    /// Load and parse the hierarchy document from the given source.
    #[instrument(skip(self), fields(source = %source))]
    pub async fn load(&self, source: &DocumentSource) -> LoadResult<HierarchyNode> {
        match source {
            DocumentSource::Url(url) => self.fetch(url).await,
            DocumentSource::File(path) => Self::read_file(path),
        }
    }

    async fn fetch(&self, url: &Url) -> LoadResult<HierarchyNode> {
        debug!("fetching hierarchy document");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        let root = serde_json::from_str(&body)?;
        info!("loaded hierarchy document ({} bytes)", body.len());
        Ok(root)
    }

    fn read_file(path: &Path) -> LoadResult<HierarchyNode> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Default for HierarchyLoader {
    fn default() -> Self {
        Self::new()
    }
}
