//! Streaming archive download with progress reporting.

use std::path::Path;

use futures::StreamExt;
use reqwest::Client;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::Reporter;

/// Errors downloading an archive.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Transport failure or non-2xx response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Writing the downloaded file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Download `url` into `dest`, reporting progress under `archive`.
///
/// Returns the number of bytes written. A partially written `dest` is removed
/// on failure.
///
/// # Errors
///
/// Returns a [`DownloadError`] on transport errors, non-2xx responses, or
/// write failures.
pub async fn download_archive<R: Reporter + ?Sized>(
    client: &Client,
    url: &str,
    dest: &Path,
    archive: &str,
    reporter: &R,
) -> Result<u64, DownloadError> {
    tracing::debug!(url, dest = %dest.display(), "downloading archive");

    let result = stream_to_file(client, url, dest, archive, reporter).await;
    if result.is_err() {
        tokio::fs::remove_file(dest).await.ok();
    }
    result
}

async fn stream_to_file<R: Reporter + ?Sized>(
    client: &Client,
    url: &str,
    dest: &Path,
    archive: &str,
    reporter: &R,
) -> Result<u64, DownloadError> {
    let response = client.get(url).send().await?.error_for_status()?;

    let total_size = response.content_length();
    reporter.downloading(archive, 0, total_size);

    let mut file = File::create(dest).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
        reporter.downloading(archive, downloaded, total_size);
    }

    file.flush().await?;
    Ok(downloaded)
}
