//! Terminal UI

pub mod output;
pub mod theme;

pub use output::{ConsoleReporter, print_error};
pub use theme::Theme;
