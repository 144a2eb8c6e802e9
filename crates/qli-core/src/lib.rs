//! Core library for qli.
//!
//! Everything between a validated [`Selection`](qli_schema::Selection) and an
//! installed Qt tree:
//!
//! - [`repo`]: repository URL layout
//! - [`io`]: index fetch, archive download and extraction (network, subprocess)
//! - [`install`]: install directory handling and the per-archive install loop
//! - [`qtconf`]: the `qt.conf` written after installation
//! - [`reporter`]: progress reporting seam for front ends

pub mod install;
pub mod io;
pub mod paths;
pub mod qtconf;
pub mod repo;
pub mod reporter;

pub use reporter::{NullReporter, Reporter};
pub use repo::Repository;

/// User Agent string for repository requests
pub const USER_AGENT: &str = concat!("qli/", env!("CARGO_PKG_VERSION"));
