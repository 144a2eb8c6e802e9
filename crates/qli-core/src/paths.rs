//! On-disk layout of an installation.

use std::path::{Path, PathBuf};

use qli_schema::{Arch, QtVersion};

/// Install directory for `version` under `root`: `<root>/Qt<version>`.
pub fn install_dir(root: &Path, version: &QtVersion) -> PathBuf {
    root.join(format!("Qt{version}"))
}

/// Binary directory of an installed arch: `<install>/<version>/<arch dir>/bin`.
pub fn bin_dir(install_dir: &Path, version: &QtVersion, arch: &Arch) -> PathBuf {
    install_dir
        .join(version.to_string())
        .join(arch.dir())
        .join("bin")
}

/// Location of the generated `qt.conf`.
pub fn qt_conf_path(install_dir: &Path, version: &QtVersion, arch: &Arch) -> PathBuf {
    bin_dir(install_dir, version, arch).join("qt.conf")
}
