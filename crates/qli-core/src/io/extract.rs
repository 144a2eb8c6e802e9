//! Archive extraction through an external 7-Zip executable.
//!
//! Qt ships its archives as `.7z`, which is unpacked by shelling out to the
//! `7z` tool rather than linking a decoder.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;

/// Extractor location per host platform (`std::env::consts::OS`).
const EXTRACTORS: &[(&str, &str)] = &[("windows", r"C:\Program Files\7-Zip\7z.exe")];

/// Extractor used on platforms missing from [`EXTRACTORS`]; found on `PATH`.
const DEFAULT_EXTRACTOR: &str = "7z";

/// Extract with full paths, overwrite everything, answer yes to prompts.
const EXTRACT_ARGS: &[&str] = &["x", "-aoa", "-y"];

/// Errors running the extractor.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The executable does not exist or is not on `PATH`.
    #[error("'{0}' not found")]
    NotFound(String),

    /// The process could not be started.
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        /// Program that was run.
        program: String,
        /// OS error.
        source: std::io::Error,
    },

    /// The extractor exited with a failure status.
    #[error("{program} failed on {archive} ({status}): {stderr}")]
    Failed {
        /// Program that was run.
        program: String,
        /// Archive being extracted.
        archive: String,
        /// Exit status description.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },
}

/// The external archive extraction tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extractor {
    program: PathBuf,
}

impl Extractor {
    /// Use `program` as the extractor.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The extractor for the given platform name.
    pub fn for_platform(os: &str) -> Self {
        let program = EXTRACTORS
            .iter()
            .find(|(platform, _)| *platform == os)
            .map_or(DEFAULT_EXTRACTOR, |(_, program)| *program);
        Self::new(program)
    }

    /// The extractor for the platform this binary runs on.
    pub fn for_current_platform() -> Self {
        Self::for_platform(std::env::consts::OS)
    }

    /// Configured program.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Resolve the program to an absolute executable path.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::NotFound`] if the program cannot be found.
    pub fn resolve(&self) -> Result<Self, ExtractError> {
        let program = which::which(&self.program)
            .map_err(|_| ExtractError::NotFound(self.program.display().to_string()))?;
        tracing::debug!(program = %program.display(), "resolved extractor");
        Ok(Self { program })
    }

    /// Unpack `archive` into `dest`, overwriting existing files.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractError`] if the tool cannot be started or exits
    /// unsuccessfully.
    pub async fn extract(&self, archive: &Path, dest: &Path) -> Result<(), ExtractError> {
        let program = self.program.display().to_string();
        tracing::debug!(%program, archive = %archive.display(), dest = %dest.display(), "extracting");

        let output = match Command::new(&self.program)
            .args(EXTRACT_ARGS)
            .arg(archive)
            .current_dir(dest)
            .stdin(Stdio::null())
            .output()
            .await
        {
            Ok(o) => o,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ExtractError::NotFound(program));
            }
            Err(source) => return Err(ExtractError::Spawn { program, source }),
        };

        if !output.status.success() {
            return Err(ExtractError::Failed {
                program,
                archive: archive.display().to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
