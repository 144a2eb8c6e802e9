//! Package index retrieval.

use qli_schema::{IndexError, PackageIndex};
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Errors retrieving an `Updates.xml`.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request did not complete.
    #[error("Failed to fetch {url}: {source}")]
    Http {
        /// Requested URL.
        url: String,
        /// Transport error.
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Failed to fetch {url}: HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status.
        status: StatusCode,
    },

    /// The body is not a readable index.
    #[error("Invalid package index at {url}: {source}")]
    Index {
        /// Requested URL.
        url: String,
        /// Parse error.
        source: IndexError,
    },
}

/// Download and parse the package index at `url`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails, the status is not 2xx, or
/// the body is not a well-formed index.
pub async fn fetch_index(client: &Client, url: &str) -> Result<PackageIndex, FetchError> {
    tracing::debug!(url, "fetching package index");

    let http = |source| FetchError::Http {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(http)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let bytes = response.bytes().await.map_err(http)?;
    let index = PackageIndex::from_bytes(&bytes).map_err(|source| FetchError::Index {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!(packages = index.packages().len(), "parsed package index");
    Ok(index)
}
