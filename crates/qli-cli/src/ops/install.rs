//! The install pipeline.
//!
//! Fetch the index, match the package, install its archives, write `qt.conf`.
//! Nothing touches the disk until the package has been matched, so a bad
//! selection never leaves an empty `Qt<version>` behind.

use std::path::PathBuf;

use qli_core::install::{ArchiveInstaller, ArchiveSource, prepare_install_dir};
use qli_core::io::index::fetch_index;
use qli_core::{paths, qtconf};
use qli_schema::{MatchedPackage, Selection};

use crate::ops::{Context, InstallError};

/// Outcome of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSummary {
    pub package: String,
    pub install_dir: PathBuf,
    /// Archives that were (or, for dry runs, would be) installed.
    pub archives: Vec<ArchiveSource>,
    /// `None` for dry runs.
    pub qt_conf: Option<PathBuf>,
}

/// Install `selection` as configured by `ctx`.
pub async fn install(ctx: &Context, selection: &Selection) -> Result<InstallSummary, InstallError> {
    let reporter = &ctx.reporter;
    let index_url = ctx.repository.index_url(selection);
    tracing::info!(url = %index_url, "fetching index");

    let index = fetch_index(&ctx.client, &index_url).await?;
    let mut package = index.find(selection)?;
    if !ctx.archives.is_empty() {
        package.retain_modules(&ctx.archives)?;
    }
    tracing::info!(
        package = %package.name,
        convention = ?package.convention,
        archives = package.archives.len(),
        "matched package"
    );

    let install_dir = paths::install_dir(&ctx.output_dir, &selection.version);
    let archives = archive_sources(ctx, selection, &package);

    reporter.section(&format!(
        "Downloading Qt {} for arch {}",
        selection.version, selection.arch
    ));
    reporter.detail("HOST", selection.host.as_str());
    reporter.detail("TARGET", selection.target.as_str());
    reporter.detail("ARCH", selection.arch.name());
    if !package.description.is_empty() {
        reporter.detail("Package", &package.description);
    }
    reporter.detail(
        "Source URL",
        &ctx.repository.archives_url(selection, &package),
    );
    reporter.detail("into", &install_dir.display().to_string());

    if ctx.dry_run {
        for archive in &archives {
            reporter.info(&archive.url);
        }
        reporter.warning("Dry run: nothing was downloaded");
        return Ok(InstallSummary {
            package: package.name,
            install_dir,
            archives,
            qt_conf: None,
        });
    }

    let extractor = ctx.extractor.resolve()?;
    prepare_install_dir(&install_dir)
        .map_err(|e| InstallError::context("Failed to prepare install directory", e))?;

    let installer = ArchiveInstaller::new(&ctx.client, &extractor, &**reporter);
    installer.install(&install_dir, &archives).await?;

    let qt_conf = qtconf::write_qt_conf(&install_dir, &selection.version, &selection.arch)
        .map_err(|e| InstallError::context("Failed to write qt.conf", e))?;

    reporter.success("Finished installation");
    Ok(InstallSummary {
        package: package.name,
        install_dir,
        archives,
        qt_conf: Some(qt_conf),
    })
}

fn archive_sources(
    ctx: &Context,
    selection: &Selection,
    package: &MatchedPackage,
) -> Vec<ArchiveSource> {
    package
        .archives
        .iter()
        .map(|name| ArchiveSource {
            name: name.clone(),
            url: ctx.repository.archive_url(selection, package, name),
        })
        .collect()
}
