//! Qt online repository layout.
//!
//! ```text
//! <base>/<host>_<x64|x86>/<target>/qt5_<XYZ>/Updates.xml
//! <base>/<host>_<x64|x86>/<target>/qt5_<XYZ>/<package>/<full-version><archive>
//! ```

use qli_schema::{MatchedPackage, Selection};
use thiserror::Error;

/// Official Qt repository root.
pub const DEFAULT_BASE_URL: &str = "https://download.qt.io/online/qtsdkrepository/";

/// Name of the package index in every repository directory.
pub const INDEX_FILE: &str = "Updates.xml";

/// Errors configuring a [`Repository`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The base is not an http(s) URL.
    #[error("The repository base must be an http(s) url, got '{0}'")]
    InvalidBase(String),
}

/// A Qt repository mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    base: String,
}

impl Default for Repository {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Repository {
    /// Create a repository rooted at `base`.
    ///
    /// A trailing `/` is appended when missing.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::InvalidBase`] unless `base` starts with
    /// `http://` or `https://`.
    pub fn new(base: &str) -> Result<Self, RepositoryError> {
        let base = base.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(RepositoryError::InvalidBase(base.to_string()));
        }

        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self { base })
    }

    /// Repository root, always ending in `/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Directory holding the index and package directories for `selection`.
    pub fn packages_url(&self, selection: &Selection) -> String {
        format!(
            "{}{}/{}/qt5_{}/",
            self.base,
            selection.host.repo_dir(),
            selection.target,
            selection.version.compact()
        )
    }

    /// URL of the `Updates.xml` for `selection`.
    pub fn index_url(&self, selection: &Selection) -> String {
        format!("{}{INDEX_FILE}", self.packages_url(selection))
    }

    /// Directory holding the archives of a matched package.
    pub fn archives_url(&self, selection: &Selection, package: &MatchedPackage) -> String {
        format!("{}{}/", self.packages_url(selection), package.name)
    }

    /// Download URL of one archive of a matched package.
    ///
    /// The repository prefixes archive filenames with the package's full
    /// version, without a separator.
    pub fn archive_url(
        &self,
        selection: &Selection,
        package: &MatchedPackage,
        archive: &str,
    ) -> String {
        format!(
            "{}{}{archive}",
            self.archives_url(selection, package),
            package.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qli_schema::PackageIndex;

    fn selection(version: &str, host: &str, target: &str, arch: Option<&str>) -> Selection {
        Selection::resolve(version, host, target, arch).unwrap()
    }

    #[test]
    fn test_index_url() {
        let repo = Repository::default();
        assert_eq!(
            repo.index_url(&selection("5.12.6", "linux", "desktop", None)),
            "https://download.qt.io/online/qtsdkrepository/linux_x64/desktop/qt5_5126/Updates.xml"
        );
        assert_eq!(
            repo.index_url(&selection("5.12.6", "windows", "android", Some("android_armv7"))),
            "https://download.qt.io/online/qtsdkrepository/windows_x86/android/qt5_5126/Updates.xml"
        );
    }

    #[test]
    fn test_index_url_is_deterministic() {
        let repo = Repository::default();
        let sel = selection("6.0.0", "mac", "ios", None);
        assert_eq!(repo.index_url(&sel), repo.index_url(&sel.clone()));
    }

    #[test]
    fn test_base_normalization() {
        let repo = Repository::new("http://mirror.example.com/qt").unwrap();
        assert_eq!(repo.base(), "http://mirror.example.com/qt/");

        let repo = Repository::new("https://mirror.example.com/qt/").unwrap();
        assert_eq!(repo.base(), "https://mirror.example.com/qt/");

        assert_eq!(
            Repository::new("not_a_url").unwrap_err(),
            RepositoryError::InvalidBase("not_a_url".to_string())
        );
    }

    #[test]
    fn test_archive_urls_follow_matched_convention() {
        let repo = Repository::new("http://mirror.example.com").unwrap();
        let sel = selection("6.0.0", "linux", "desktop", None);

        let index = PackageIndex::parse(
            r"<Updates><PackageUpdate>
  <Name>qt.qt5.600.gcc_64</Name>
  <Version>6.0.0-0-202012071158</Version>
  <DownloadableArchives>a.7z, b.7z</DownloadableArchives>
</PackageUpdate></Updates>",
        )
        .unwrap();
        let pkg = index.find(&sel).unwrap();

        assert_eq!(
            repo.archives_url(&sel, &pkg),
            "http://mirror.example.com/linux_x64/desktop/qt5_600/qt.qt5.600.gcc_64/"
        );
        assert_eq!(
            repo.archive_url(&sel, &pkg, "a.7z"),
            "http://mirror.example.com/linux_x64/desktop/qt5_600/qt.qt5.600.gcc_64/6.0.0-0-202012071158a.7z"
        );

        let index = PackageIndex::parse(
            r"<Updates><PackageUpdate>
  <Name>qt.600.gcc_64</Name>
  <Version>6.0.0-0-202012071158</Version>
  <DownloadableArchives>a.7z</DownloadableArchives>
</PackageUpdate></Updates>",
        )
        .unwrap();
        let pkg = index.find(&sel).unwrap();
        assert_eq!(
            repo.archives_url(&sel, &pkg),
            "http://mirror.example.com/linux_x64/desktop/qt5_600/qt.600.gcc_64/"
        );
    }
}
