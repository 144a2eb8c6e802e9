//! Qt repository package index (`Updates.xml`).
//!
//! Each repository directory publishes an `Updates.xml` listing its packages:
//!
//! ```xml
//! <Updates>
//!   <ApplicationName>{AnyApplication}</ApplicationName>
//!   <PackageUpdate>
//!     <Name>qt.qt5.5150.gcc_64</Name>
//!     <Description>Qt 5.15.0 Prebuilt Components for Linux</Description>
//!     <Version>5.15.0-0-202005140804</Version>
//!     <DownloadableArchives>qtbase-Linux.7z, qtsvg-Linux.7z</DownloadableArchives>
//!   </PackageUpdate>
//! </Updates>
//! ```
//!
//! Only the fields needed to pick a package and locate its archives are read;
//! everything else in the document is ignored.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use thiserror::Error;

use crate::selection::Selection;

/// Errors reading an index document.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The body is not valid UTF-8.
    #[error("Index is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The body is not a well-formed `Updates.xml` document.
    #[error("Malformed package index: {0}")]
    Malformed(#[from] quick_xml::DeError),
}

/// Errors selecting a package from a parsed index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// No entry carries either of the expected package names.
    #[error("No package named {} or {} in the index", .candidates[0], .candidates[1])]
    NoPackage {
        /// The names that were looked for.
        candidates: [String; 2],
    },

    /// The matched entry lacks a required field.
    #[error("Error while parsing package information! Package {package} has no {field}")]
    MissingField {
        /// Matched package name.
        package: String,
        /// Name of the missing XML element.
        field: &'static str,
    },

    /// An archive filter left nothing to install.
    #[error("None of the requested archives ({}) exist in package {package}", .requested.join(", "))]
    NoArchivesSelected {
        /// Matched package name.
        package: String,
        /// Module names that were requested.
        requested: Vec<String>,
    },
}

#[derive(Debug, Deserialize)]
struct UpdatesDocument {
    #[serde(rename = "PackageUpdate", default)]
    packages: Vec<PackageUpdate>,
}

/// One `<PackageUpdate>` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageUpdate {
    /// Package identifier, e.g. `qt.qt5.5150.gcc_64`.
    #[serde(rename = "Name", default)]
    pub name: String,

    /// Human-readable description.
    #[serde(rename = "Description", default)]
    pub description: Option<String>,

    /// Full release version, e.g. `5.15.0-0-202005140804`.
    #[serde(rename = "Version", default)]
    pub version: Option<String>,

    /// Comma-separated archive filenames.
    #[serde(rename = "DownloadableArchives", default)]
    pub downloadable_archives: Option<String>,
}

impl PackageUpdate {
    /// The archive list split into filenames, in document order.
    pub fn archives(&self) -> Vec<String> {
        self.downloadable_archives
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// How a package name is spelled in the repository.
///
/// Qt 5 era indexes use a `qt5` family infix (`qt.qt5.5150.gcc_64`); newer
/// ones drop it (`qt.600.gcc_64`). Both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingConvention {
    /// `qt.qt5.<version>.<arch>`
    Qt5Family,
    /// `qt.<version>.<arch>`
    Plain,
}

impl NamingConvention {
    /// Conventions in lookup order.
    pub const ALL: [Self; 2] = [Self::Qt5Family, Self::Plain];

    /// The package name this convention gives `selection`.
    pub fn package_name(&self, selection: &Selection) -> String {
        let version = selection.version.compact();
        let arch = selection.arch.name();
        match self {
            Self::Qt5Family => format!("qt.qt5.{version}.{arch}"),
            Self::Plain => format!("qt.{version}.{arch}"),
        }
    }
}

/// The entry chosen for a selection, with its required fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPackage {
    /// Package name as it appears in the index.
    pub name: String,
    /// Which naming convention matched.
    pub convention: NamingConvention,
    /// Full release version; archive URLs are prefixed with it.
    pub version: String,
    /// Description, empty when the index has none.
    pub description: String,
    /// Archive filenames, in install order.
    pub archives: Vec<String>,
}

impl MatchedPackage {
    /// Module part of an archive filename (text before the first `-`).
    pub fn module_name(archive: &str) -> &str {
        archive.split('-').next().unwrap_or(archive)
    }

    /// Keep only archives whose module is in `modules`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NoArchivesSelected`] if nothing is left.
    pub fn retain_modules(&mut self, modules: &[String]) -> Result<(), MatchError> {
        self.archives
            .retain(|a| modules.iter().any(|m| m == Self::module_name(a)));

        if self.archives.is_empty() {
            return Err(MatchError::NoArchivesSelected {
                package: self.name.clone(),
                requested: modules.to_vec(),
            });
        }
        Ok(())
    }
}

/// Walk the whole document; the deserializer stops at the root's end tag.
fn check_single_root(xml: &str) -> Result<(), quick_xml::DeError> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut closed = false;

    loop {
        let event = reader.read_event()?;
        if closed && is_content(&event) {
            return Err(quick_xml::DeError::Custom(
                "unexpected content after the root element".to_string(),
            ));
        }
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                closed = depth == 0;
            }
            Event::Empty(_) => closed = depth == 0,
            Event::Eof => return Ok(()),
            _ => {}
        }
    }
}

/// Elements, character data and non-blank text.
fn is_content(event: &Event<'_>) -> bool {
    match event {
        Event::Start(_) | Event::Empty(_) | Event::CData(_) => true,
        Event::Text(text) => !text.iter().all(u8::is_ascii_whitespace),
        _ => false,
    }
}

/// A parsed `Updates.xml`.
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    packages: Vec<PackageUpdate>,
}

impl PackageIndex {
    /// Parse an index document.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Malformed`] if the document is not well-formed,
    /// including content after the root element.
    pub fn parse(xml: &str) -> Result<Self, IndexError> {
        check_single_root(xml)?;
        let doc: UpdatesDocument = quick_xml::de::from_str(xml)?;
        Ok(Self {
            packages: doc.packages,
        })
    }

    /// Parse an index from a raw HTTP body.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if the body is not UTF-8 or not well-formed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IndexError> {
        Self::parse(std::str::from_utf8(bytes)?)
    }

    /// All entries, in document order.
    pub fn packages(&self) -> &[PackageUpdate] {
        &self.packages
    }

    /// Find the package for `selection`.
    ///
    /// The first entry whose name matches either [`NamingConvention`] wins.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NoPackage`] if nothing matches, or
    /// [`MatchError::MissingField`] if the match has no version or no archives.
    pub fn find(&self, selection: &Selection) -> Result<MatchedPackage, MatchError> {
        let candidates = NamingConvention::ALL.map(|c| (c, c.package_name(selection)));

        let (entry, convention) = self
            .packages
            .iter()
            .find_map(|p| {
                candidates
                    .iter()
                    .find(|(_, name)| *name == p.name)
                    .map(|(c, _)| (p, *c))
            })
            .ok_or_else(|| MatchError::NoPackage {
                candidates: candidates.clone().map(|(_, name)| name),
            })?;

        let version = entry
            .version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| MatchError::MissingField {
                package: entry.name.clone(),
                field: "Version",
            })?;

        let archives = entry.archives();
        if archives.is_empty() {
            return Err(MatchError::MissingField {
                package: entry.name.clone(),
                field: "DownloadableArchives",
            });
        }

        Ok(MatchedPackage {
            name: entry.name.clone(),
            convention,
            version: version.to_string(),
            description: entry.description.clone().unwrap_or_default(),
            archives,
        })
    }
}
