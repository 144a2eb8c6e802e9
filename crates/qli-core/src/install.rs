//! Archive installation.
//!
//! Archives are installed one at a time, in index order: download into a
//! staging directory inside the install directory, unpack with the
//! [`Extractor`], delete the download. Later archives overwrite files from
//! earlier ones.

use std::io;
use std::path::Path;

use reqwest::Client;
use thiserror::Error;

use crate::Reporter;
use crate::io::download::{DownloadError, download_archive};
use crate::io::extract::{ExtractError, Extractor};

/// Prefix of the staging directory created inside the install directory.
const STAGING_PREFIX: &str = ".qli-download-";

/// Errors installing archives.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// An archive could not be downloaded.
    #[error("Failed to download {archive}: {source}")]
    Download {
        /// Archive filename.
        archive: String,
        /// Underlying failure.
        source: DownloadError,
    },

    /// An archive could not be unpacked.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The archive name from the index is not a plain filename.
    #[error("Refusing to install archive with unsafe name '{0}'")]
    UnsafeName(String),

    /// A filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// One archive to install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSource {
    /// Filename as listed in the index.
    pub name: String,
    /// Download URL.
    pub url: String,
}

/// Make sure `path` is a directory.
///
/// Creates it when missing. A non-directory already at `path` is deleted and
/// replaced without confirmation.
///
/// # Errors
///
/// Returns an IO error if the path cannot be inspected, removed or created.
pub fn prepare_install_dir(path: &Path) -> io::Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "replacing non-directory at install path");
            std::fs::remove_file(path)?;
            std::fs::create_dir(path)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => std::fs::create_dir_all(path),
        Err(e) => Err(e),
    }
}

/// Installs archives into a directory.
#[derive(Debug)]
pub struct ArchiveInstaller<'a, R: Reporter + ?Sized> {
    client: &'a Client,
    extractor: &'a Extractor,
    reporter: &'a R,
}

impl<'a, R: Reporter + ?Sized> ArchiveInstaller<'a, R> {
    /// Create an installer.
    pub fn new(client: &'a Client, extractor: &'a Extractor, reporter: &'a R) -> Self {
        Self {
            client,
            extractor,
            reporter,
        }
    }

    /// Install `archives` into `install_dir`, in order.
    ///
    /// `install_dir` must exist (see [`prepare_install_dir`]). Stops at the
    /// first failure. Returns the number of archives installed.
    ///
    /// # Errors
    ///
    /// Returns an [`ArchiveError`] for the first archive that fails to
    /// download or unpack.
    pub async fn install(
        &self,
        install_dir: &Path,
        archives: &[ArchiveSource],
    ) -> Result<usize, ArchiveError> {
        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(install_dir)?;

        for archive in archives {
            let file_name = Path::new(&archive.name)
                .file_name()
                .filter(|f| *f == archive.name.as_str())
                .ok_or_else(|| ArchiveError::UnsafeName(archive.name.clone()))?;
            let local = staging.path().join(file_name);

            download_archive(
                self.client,
                &archive.url,
                &local,
                &archive.name,
                self.reporter,
            )
            .await
            .map_err(|source| ArchiveError::Download {
                archive: archive.name.clone(),
                source,
            })?;

            self.reporter.extracting(&archive.name);
            self.extractor.extract(&local, install_dir).await?;

            std::fs::remove_file(&local)?;
            self.reporter.installed(&archive.name);
            tracing::info!(archive = %archive.name, "installed archive");
        }

        staging.close()?;
        Ok(archives.len())
    }
}
