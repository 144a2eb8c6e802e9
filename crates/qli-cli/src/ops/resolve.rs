//! Argument resolution.

use crate::Cli;
use crate::ops::InstallError;
use qli_schema::Selection;

/// Validate the positional arguments into a [`Selection`].
pub fn resolve_selection(cli: &Cli) -> Result<Selection, InstallError> {
    let selection = Selection::resolve(
        &cli.qt_version,
        &cli.host,
        &cli.target,
        cli.arch.as_deref(),
    )?;

    tracing::debug!(
        version = %selection.version,
        host = %selection.host,
        target = %selection.target,
        arch = %selection.arch,
        "resolved selection"
    );
    Ok(selection)
}
