//! Shared helpers for driving the `qli` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Index served for `6.0.0 linux desktop`.
pub const INDEX: &str = r"<Updates>
 <PackageUpdate>
  <Name>qt.qt5.600.gcc_64</Name>
  <Description>Qt 6.0.0 for gcc 64-bit</Description>
  <Version>6.0.0-0-202012071158</Version>
  <DownloadableArchives>qtbase-Linux-x64.7z, qtsvg-Linux-x64.7z</DownloadableArchives>
 </PackageUpdate>
</Updates>";

/// Path of the index for `6.0.0 linux desktop` under the repository root.
pub const INDEX_PATH: &str = "/linux_x64/desktop/qt5_600/Updates.xml";

/// A `qli` command isolated from the caller's `QLI_*` environment.
pub fn qli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qli"));
    for var in ["QLI_BASE_URL", "QLI_OUTPUT_DIR", "QLI_SEVENZIP", "QLI_TIMEOUT"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Run `qli` against `base`, installing under `out`.
pub fn run(base: &str, out: &Path, args: &[&str]) -> Output {
    qli()
        .args(args)
        .arg("--base")
        .arg(base)
        .arg("--outputdir")
        .arg(out)
        .arg("--quiet")
        .output()
        .expect("failed to run qli")
}

/// Write an executable shell script standing in for `7z`.
#[cfg(unix)]
pub fn fake_7z(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let program = dir.join("7z");
    std::fs::write(&program, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();
    program
}

/// Captured stderr as text.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
