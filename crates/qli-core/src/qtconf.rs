//! `qt.conf` for relocated installs.
//!
//! Qt binaries carry the prefix they were built with. A `qt.conf` next to them
//! pointing one directory up makes tools like `qmake` find the unpacked tree.

use std::path::{Path, PathBuf};

use qli_schema::{Arch, QtVersion};

use crate::paths::qt_conf_path;

/// Contents of the generated `qt.conf`.
pub const QT_CONF: &str = "[Paths]\nPrefix=..\n";

/// Write `qt.conf` into the `bin` directory of an installed arch.
///
/// Existing files are overwritten; missing directories are created.
/// Returns the path written.
///
/// # Errors
///
/// Returns an IO error if the directory or file cannot be written.
pub fn write_qt_conf(
    install_dir: &Path,
    version: &QtVersion,
    arch: &Arch,
) -> std::io::Result<PathBuf> {
    let path = qt_conf_path(install_dir, version, arch);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, QT_CONF)?;

    tracing::debug!(path = %path.display(), "wrote qt.conf");
    Ok(path)
}
