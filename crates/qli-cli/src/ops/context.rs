//! Shared installation context.
//!
//! Everything the pipeline needs besides the selection itself: the HTTP
//! client, the repository, the extractor and where to install.

use crate::Cli;
use crate::ops::InstallError;
use qli_core::Reporter;
use qli_core::io::extract::Extractor;
use qli_core::{Repository, io};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Groups common state used during installation operations.
#[derive(Clone)]
pub struct Context {
    pub client: reqwest::Client,
    pub repository: Repository,
    pub extractor: Extractor,
    /// Absolute directory `Qt<version>` is created in.
    pub output_dir: PathBuf,
    /// Module filter; empty installs every archive.
    pub archives: Vec<String>,
    pub dry_run: bool,
    pub reporter: Arc<dyn Reporter>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("repository", &self.repository)
            .field("extractor", &self.extractor)
            .field("output_dir", &self.output_dir)
            .field("archives", &self.archives)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Build the context from parsed command-line options.
    pub fn from_cli(cli: &Cli, reporter: Arc<dyn Reporter>) -> Result<Self, InstallError> {
        let repository = Repository::new(&cli.base)?;
        let client = io::http_client(Duration::from_secs(cli.timeout))
            .map_err(InstallError::Client)?;
        let extractor = cli
            .sevenzip
            .as_ref()
            .map_or_else(Extractor::for_current_platform, Extractor::new);
        let output_dir = std::path::absolute(&cli.outputdir)?;

        Ok(Self {
            client,
            repository,
            extractor,
            output_dir,
            archives: cli
                .archives
                .iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
            dry_run: cli.dry_run,
            reporter,
        })
    }
}
