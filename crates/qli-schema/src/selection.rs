//! The validated install selection.

use thiserror::Error;

use crate::arch::Arch;
use crate::platform::{Host, Target};
use crate::version::QtVersion;

/// Errors raised while turning raw arguments into a [`Selection`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The version is not of the form `X.Y.Z`.
    #[error("Invalid version: '{0}'! Please use the form '5.X.Y'.")]
    InvalidVersion(String),

    /// The host is not one of the known hosts.
    #[error("{0}")]
    UnknownHost(String),

    /// The target is not one of the known targets.
    #[error("{0}")]
    UnknownTarget(String),

    /// The repository does not publish this target for this host.
    #[error("Target '{target}' is not available on host '{host}'.")]
    UnsupportedCombination {
        /// Requested host.
        host: Host,
        /// Requested target.
        target: Target,
    },

    /// No arch was given and the host/target pair has no default.
    #[error("Please supply a target architecture.")]
    MissingArch,
}

/// What to install: a Qt version for a host/target/arch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Qt release.
    pub version: QtVersion,
    /// Host system.
    pub host: Host,
    /// Build target.
    pub target: Target,
    /// Target architecture.
    pub arch: Arch,
}

impl Selection {
    /// Validate raw arguments into a selection.
    ///
    /// An empty `arch` counts as omitted; omitted arches fall back to
    /// [`Arch::default_for`].
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] for a malformed version, an unknown host or
    /// target, an unsupported host/target pair, or an arch that cannot be
    /// resolved.
    pub fn resolve(
        version: &str,
        host: &str,
        target: &str,
        arch: Option<&str>,
    ) -> Result<Self, SelectionError> {
        let version = QtVersion::parse(version).map_err(SelectionError::InvalidVersion)?;
        let host: Host = host.parse().map_err(SelectionError::UnknownHost)?;
        let target: Target = target.parse().map_err(SelectionError::UnknownTarget)?;

        if !target.is_supported_on(host) {
            return Err(SelectionError::UnsupportedCombination { host, target });
        }

        let arch = match arch.filter(|a| !a.is_empty()) {
            Some(name) => Arch::new(name),
            None => Arch::default_for(host, target).ok_or(SelectionError::MissingArch)?,
        };

        Ok(Self {
            version,
            host,
            target,
            arch,
        })
    }
}
