//! qli - install prebuilt Qt SDK components
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Downloads the archives of one Qt package from the Qt online repository and
//! unpacks them with 7-Zip.
//!
//! # Pipeline
//!
//! Resolve arguments → fetch `Updates.xml` → match the package → install each
//! archive → write `qt.conf`. Every stage runs to completion before the next
//! starts, and any failure ends the run with exit status 1.
//!
//! # Directory Layout
//!
//! ```text
//! <outputdir>/Qt<version>/
//! └── <version>/<arch dir>/
//!     ├── bin/qt.conf   # Prefix=..
//!     ├── include/
//!     └── lib/
//! ```

pub mod ops;
pub mod ui;

use clap::Parser;
use std::path::PathBuf;

pub use qli_core::repo::DEFAULT_BASE_URL;

/// Known architecture names, shown after `--help`.
pub const ARCH_HELP: &str = "\
Architectures:
  linux/desktop:    gcc_64 (default)
  mac/desktop:      clang_64 (default)
  mac/ios:          ios (default)
  windows/desktop:  win64_msvc2017_64, win64_msvc2015_64,
                    win32_msvc2015, win32_mingw53
  android:          android_x86, android_armv7";

#[derive(Debug, Parser)]
#[command(name = "qli")]
#[command(author, version, about = "Install prebuilt Qt SDK components")]
#[command(arg_required_else_help = true, after_help = ARCH_HELP)]
pub struct Cli {
    /// Qt version in the format of "5.X.Y"
    pub qt_version: String,

    /// Host system: linux, mac, windows
    pub host: String,

    /// Target: desktop, android, ios
    pub target: String,

    /// Target architecture (optional for linux/desktop, mac/desktop, mac/ios)
    pub arch: Option<String>,

    /// Repository root to download from
    #[arg(short, long, env = "QLI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base: String,

    /// Directory to create Qt<version> in
    #[arg(short = 'O', long, env = "QLI_OUTPUT_DIR", default_value = ".")]
    pub outputdir: PathBuf,

    /// 7-Zip executable used to unpack archives
    #[arg(long, env = "QLI_SEVENZIP")]
    pub sevenzip: Option<PathBuf>,

    /// Connection timeout in seconds
    #[arg(long, env = "QLI_TIMEOUT", default_value_t = 60)]
    pub timeout: u64,

    /// Only install these archives (module names such as qtbase, space or comma separated)
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub archives: Vec<String>,

    /// Show what would be installed without downloading anything
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}
