//! Qt release versions.

use std::fmt;

/// A Qt release version in the strict `X.Y.Z` form.
///
/// Pre-release and build suffixes are rejected: the repository only publishes
/// plain releases under `qt5_<XYZ>` directories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QtVersion(semver::Version);

impl QtVersion {
    /// Parse a version string.
    ///
    /// # Errors
    ///
    /// Returns the rejected input if it is not three dot-separated numbers.
    pub fn parse(s: &str) -> Result<Self, String> {
        match semver::Version::parse(s) {
            Ok(v) if v.pre.is_empty() && v.build.is_empty() => Ok(Self(v)),
            _ => Err(s.to_string()),
        }
    }

    /// The version with its dots removed (`5.12.10` -> `51210`).
    ///
    /// Used both in the repository directory (`qt5_<compact>`) and in package
    /// names (`qt.qt5.<compact>.<arch>`).
    pub fn compact(&self) -> String {
        format!("{}{}{}", self.0.major, self.0.minor, self.0.patch)
    }
}

impl fmt::Display for QtVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for QtVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
