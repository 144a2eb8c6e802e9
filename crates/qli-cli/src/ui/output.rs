//! Console output.
//!
//! [`ConsoleReporter`] renders pipeline progress on stdout. When stdout is a
//! terminal, download progress is redrawn in place on a single line; otherwise
//! each archive gets one line per state change. Warnings and errors go to
//! stderr and are never silenced.

use std::io::{IsTerminal, Write};
use std::sync::{Mutex, PoisonError};

use crossterm::style::{Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};
use qli_core::Reporter;

use super::theme::{Theme, format_size, percent};
use crate::ops::InstallError;

/// Heading printed above suggested follow-up actions.
pub const SUGGESTIONS_HEADER: &str = "Suggested follow-up:";

/// Width of the `=` rule on each side of [`SUGGESTIONS_HEADER`].
const BANNER_RULE: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Progress {
    archive: String,
    /// Percent when the size is known, whole MiB otherwise.
    step: u64,
}

/// Terminal implementation of [`Reporter`].
#[derive(Debug)]
pub struct ConsoleReporter {
    theme: Theme,
    quiet: bool,
    live: bool,
    progress: Mutex<Option<Progress>>,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            theme: Theme::default(),
            quiet,
            live: std::io::stdout().is_terminal(),
            progress: Mutex::new(None),
        }
    }

    /// Record progress. Returns `(started, changed)`: whether this is the first
    /// update for `archive` and whether the step moved.
    fn advance(&self, archive: &str, step: u64) -> (bool, bool) {
        let mut state = self
            .progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let next = Progress {
            archive: archive.to_string(),
            step,
        };
        match state.as_ref() {
            Some(p) if p.archive == archive => {
                let changed = *p != next;
                *state = Some(next);
                (false, changed)
            }
            _ => {
                *state = Some(next);
                (true, true)
            }
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, title: &str) {
        if self.quiet {
            return;
        }
        println!("\n{}", title.bold());
    }

    fn detail(&self, label: &str, value: &str) {
        if self.quiet {
            return;
        }
        println!(
            "  {} {}",
            format!("{label}:").with(self.theme.colors.header),
            value
        );
    }

    fn downloading(&self, archive: &str, current: u64, total: Option<u64>) {
        if self.quiet {
            return;
        }

        let step = total.map_or(current >> 20, |t| percent(current, t));
        let (started, changed) = self.advance(archive, step);

        if !self.live {
            if started {
                let size = total.map(format_size).unwrap_or_default();
                println!(
                    "  {} Downloading {} {}",
                    self.theme.icons.active.with(self.theme.colors.active),
                    archive.with(self.theme.colors.name),
                    size.with(self.theme.colors.secondary)
                );
            }
            return;
        }

        if changed {
            let status = match total {
                Some(t) => format!("{:>3}% of {}", percent(current, t), format_size(t)),
                None => format_size(current),
            };
            redraw(&format!(
                "  {} {} {}",
                self.theme.icons.active.with(self.theme.colors.active),
                archive.with(self.theme.colors.name),
                status.with(self.theme.colors.secondary)
            ));
        }
    }

    fn extracting(&self, archive: &str) {
        if self.quiet {
            return;
        }
        let line = format!(
            "  {} Extracting {}",
            self.theme.icons.active.with(self.theme.colors.active),
            archive.with(self.theme.colors.name)
        );
        if self.live {
            redraw(&line);
        } else {
            println!("{line}");
        }
    }

    fn installed(&self, archive: &str) {
        self.progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if self.quiet {
            return;
        }
        let line = format!(
            "  {} {}",
            self.theme.icons.success.with(self.theme.colors.success),
            archive.with(self.theme.colors.name)
        );
        if self.live {
            redraw(&line);
            println!();
        } else {
            println!("{line}");
        }
    }

    fn info(&self, msg: &str) {
        if self.quiet {
            return;
        }
        println!(
            "  {} {}",
            self.theme.icons.info.with(self.theme.colors.secondary),
            msg
        );
    }

    fn success(&self, msg: &str) {
        if self.quiet {
            return;
        }
        println!(
            "{} {}",
            self.theme.icons.success.with(self.theme.colors.success),
            msg.bold()
        );
    }

    fn warning(&self, msg: &str) {
        eprintln!(
            "{} {}",
            self.theme.icons.warning.with(self.theme.colors.warning),
            msg.with(self.theme.colors.warning)
        );
    }
}

/// Replace the current terminal line with `line`.
fn redraw(line: &str) {
    let mut out = std::io::stdout().lock();
    queue!(
        out,
        cursor::MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(line)
    )
    .ok();
    out.flush().ok();
}

/// Suggested follow-up block, or an empty string when there is nothing to suggest.
pub fn format_suggestions(actions: &[String]) -> String {
    if actions.is_empty() {
        return String::new();
    }
    let rule = "=".repeat(BANNER_RULE);
    let mut out = format!("{rule}{SUGGESTIONS_HEADER}{rule}\n");
    for action in actions {
        out.push_str("* ");
        out.push_str(action);
        out.push('\n');
    }
    out
}

/// Print a failed run's diagnostic and follow-ups to stderr.
pub fn print_error(err: &InstallError) {
    let theme = Theme::default();
    eprintln!(
        "{} {}",
        theme.icons.error.with(theme.colors.error),
        err.to_string().with(theme.colors.error)
    );
    eprint!("{}", format_suggestions(&err.suggested_actions()));
}
