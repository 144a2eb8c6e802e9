//! Reporter trait for dependency injection
//!
//! This trait allows core logic to report progress and status without
//! being coupled to a specific terminal implementation.

/// Receives status updates from the install pipeline.
pub trait Reporter: Send + Sync {
    /// Indicates a new section has started (e.g. "Installing Qt 6.0.0").
    fn section(&self, title: &str);

    /// A labelled line under the current section (e.g. "HOST: linux").
    fn detail(&self, label: &str, value: &str);

    /// Updates the progress of an archive download.
    fn downloading(&self, archive: &str, current: u64, total: Option<u64>);

    /// An archive is being unpacked.
    fn extracting(&self, archive: &str);

    /// An archive has been unpacked and its download removed.
    fn installed(&self, archive: &str);

    /// Log an informational message.
    fn info(&self, msg: &str);

    /// Log a success message.
    fn success(&self, msg: &str);

    /// Log a warning message.
    fn warning(&self, msg: &str);
}

impl<T: Reporter + ?Sized> Reporter for std::sync::Arc<T> {
    fn section(&self, title: &str) {
        (**self).section(title);
    }
    fn detail(&self, label: &str, value: &str) {
        (**self).detail(label, value);
    }
    fn downloading(&self, archive: &str, current: u64, total: Option<u64>) {
        (**self).downloading(archive, current, total);
    }
    fn extracting(&self, archive: &str) {
        (**self).extracting(archive);
    }
    fn installed(&self, archive: &str) {
        (**self).installed(archive);
    }
    fn info(&self, msg: &str) {
        (**self).info(msg);
    }
    fn success(&self, msg: &str) {
        (**self).success(msg);
    }
    fn warning(&self, msg: &str) {
        (**self).warning(msg);
    }
}

/// A no-op reporter for silent operations (e.g. testing).
#[derive(Debug, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn section(&self, _: &str) {}
    fn detail(&self, _: &str, _: &str) {}
    fn downloading(&self, _: &str, _: u64, _: Option<u64>) {}
    fn extracting(&self, _: &str) {}
    fn installed(&self, _: &str) {}
    fn info(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warning(&self, _: &str) {}
}
