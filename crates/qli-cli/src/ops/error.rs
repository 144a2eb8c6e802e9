//! Domain-specific errors for install operations

use qli_core::install::ArchiveError;
use qli_core::io::extract::ExtractError;
use qli_core::io::index::FetchError;
use qli_core::repo::RepositoryError;
use qli_schema::{MatchError, SelectionError};
use thiserror::Error;

/// Exit status for invalid arguments.
pub const EXIT_USAGE: u8 = 1;

/// Exit status for runs that fail after the arguments were accepted.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error(transparent)]
    Usage(#[from] SelectionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Extractor(#[from] ExtractError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{context}: {message}")]
    Context {
        context: &'static str,
        message: String,
    },
}

impl InstallError {
    /// Create an error with context for better debugging.
    pub fn context(ctx: &'static str, msg: impl std::fmt::Display) -> Self {
        Self::Context {
            context: ctx,
            message: msg.to_string(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::Repository(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }

    /// Whether the usage text should follow the message.
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::Repository(_))
    }

    /// Follow-up actions printed below the message.
    pub fn suggested_actions(&self) -> Vec<String> {
        match self {
            Self::Fetch(FetchError::Status { status, .. }) if status.as_u16() == 404 => vec![
                "Check that this Qt version is published for the requested host and target"
                    .to_string(),
            ],
            Self::Fetch(FetchError::Http { .. }) | Self::Archive(ArchiveError::Download { .. }) => {
                vec![
                    "Check your internet connection".to_string(),
                    "Consider using a mirror with --base".to_string(),
                ]
            }
            Self::Match(MatchError::NoPackage { .. }) => vec![
                "Check the architecture name; `qli --help` lists known names".to_string(),
            ],
            Self::Extractor(ExtractError::NotFound(_))
            | Self::Archive(ArchiveError::Extract(ExtractError::NotFound(_))) => vec![
                "Install 7-Zip (p7zip on Linux) so that `7z` is on PATH".to_string(),
                "Or point --sevenzip (QLI_SEVENZIP) at the 7z executable".to_string(),
            ],
            Self::Archive(ArchiveError::Extract(ExtractError::Failed { .. })) => vec![
                "Re-run with RUST_LOG=qli_core=debug to see the extractor invocation".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}
