//! Install operations.
//!
//! [`resolve`] turns command-line input into a [`qli_schema::Selection`] and a
//! [`Context`]; [`install`] runs the pipeline for them.

pub mod context;
pub mod error;
pub mod install;
pub mod resolve;

pub use context::Context;
pub use error::InstallError;
pub use install::{InstallSummary, install};
pub use resolve::resolve_selection;
