//! Shared types for qli.
//!
//! - [`Selection`]: the validated (version, host, target, arch) tuple.
//! - [`index`]: the `Updates.xml` wire format served by the Qt repository, and
//!   matching a selection against it.

pub mod arch;
pub mod index;
pub mod platform;
pub mod selection;
pub mod version;

// Re-exports
pub use arch::Arch;
pub use index::{IndexError, MatchError, MatchedPackage, NamingConvention, PackageIndex};
pub use platform::{Host, Target};
pub use selection::{Selection, SelectionError};
pub use version::QtVersion;
