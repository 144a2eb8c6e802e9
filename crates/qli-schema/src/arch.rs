//! Target architectures and their on-disk directory names.
//!
//! Known names, per host/target:
//!
//! ```text
//! linux/desktop    gcc_64
//! mac/desktop      clang_64
//! mac/ios          ios
//! windows/desktop  win64_msvc2017_64, win64_msvc2015_64, win32_msvc2015, win32_mingw53
//! android          android_x86, android_armv7
//! ```

use crate::platform::{Host, Target};

/// Prefix carried by Windows arch names but not by their install directories.
const WINDOWS_PREFIX: &str = "win";

/// Length of the `win64_` / `win32_` prefix stripped from the directory name.
const WINDOWS_PREFIX_LEN: usize = 6;

/// Default arch for a (host, target) pair when the user gives none.
const DEFAULT_ARCHES: &[(Host, Target, &str)] = &[
    (Host::Linux, Target::Desktop, "gcc_64"),
    (Host::Mac, Target::Desktop, "clang_64"),
    (Host::Mac, Target::Ios, "ios"),
];

/// A target architecture.
///
/// `name` is the identifier used in repository package names; `dir` is the
/// directory the archives unpack into. They differ only for Windows arches,
/// e.g. `win64_msvc2017_64` installs into `msvc2017_64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arch {
    name: String,
    dir: String,
}

impl Arch {
    /// Build an arch from a user-supplied name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let dir = if name.starts_with(WINDOWS_PREFIX) {
            name.get(WINDOWS_PREFIX_LEN..).unwrap_or_default().to_string()
        } else {
            name.clone()
        };
        Self { name, dir }
    }

    /// The default arch for `host`/`target`, if the pair has one.
    pub fn default_for(host: Host, target: Target) -> Option<Self> {
        DEFAULT_ARCHES
            .iter()
            .find(|(h, t, _)| *h == host && *t == target)
            .map(|(_, _, name)| Self::new(*name))
    }

    /// Identifier used in package names.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory name inside the versioned install tree.
    pub fn dir(&self) -> &str {
        &self.dir
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
