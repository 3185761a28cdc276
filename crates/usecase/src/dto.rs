use std::path::Path;

use log::warn;
use srcsweep_ports::filesystem::{Failure, WalkReport};
use srcsweep_shared_kernel::{ApplicationError, SweepError};

/// Totals of a whole run across all of its roots.
#[derive(Debug, Default)]
pub struct RunOutcome<T> {
    pub total: T,
    pub roots: usize,
    pub files: usize,
    pub dirs: usize,
    pub skipped: usize,
    pub failures: Vec<Failure>,
}

impl<T> RunOutcome<T>
where
    T: std::ops::Add<Output = T> + Default,
{
    /// Fold one root's walk into the run totals.
    pub fn merge(&mut self, report: WalkReport<T>) {
        self.total = std::mem::take(&mut self.total) + report.total;
        self.files += report.files;
        self.dirs += report.dirs;
        self.skipped += report.skipped;
        self.failures.extend(report.failures);
    }
}

impl<T> RunOutcome<T> {
    /// Record a root that could not be walked at all.
    pub fn root_failed(&mut self, root: &Path, error: SweepError) {
        let error = ApplicationError::RootFailed { root: root.to_path_buf(), source: Box::new(error) };
        warn!("{error}");
        self.failures.push(Failure::new(root, error));
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
