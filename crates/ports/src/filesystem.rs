// crates/ports/src/filesystem.rs
use std::{
    ops::Add,
    path::{Path, PathBuf},
};

use srcsweep_shared_kernel::{Result, SweepError};

/// A per-entry failure recorded while the walk carried on.
#[derive(Debug)]
pub struct Failure {
    pub path: PathBuf,
    pub error: SweepError,
}

impl Failure {
    pub fn new(path: impl Into<PathBuf>, error: impl Into<SweepError>) -> Self {
        Self { path: path.into(), error: error.into() }
    }
}

/// Outcome of walking one root.
#[derive(Debug)]
pub struct WalkReport<T> {
    /// Bottom-up combination of every visited file's output.
    pub total: T,
    pub files: usize,
    pub dirs: usize,
    /// Entries that were neither directories nor regular files (links, sockets, ...).
    pub skipped: usize,
    pub failures: Vec<Failure>,
}

impl<T: Default> Default for WalkReport<T> {
    fn default() -> Self {
        Self { total: T::default(), files: 0, dirs: 0, skipped: 0, failures: Vec::new() }
    }
}

impl<T> WalkReport<T> {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Callbacks driven by a [`TreeWalker`].
///
/// `Output` values are folded with `Add`: every directory's result is the
/// sum of its files' outputs and its subdirectories' results.
pub trait TreeVisitor {
    type Output: Default + Add<Output = Self::Output>;

    /// Called once for each directory before any of its entries.
    fn enter_dir(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    /// Called for each regular file accepted by the walker's filter.
    fn visit_file(&mut self, path: &Path) -> Result<Self::Output>;
}

/// Depth-first traversal over a directory tree.
///
/// Implementations fail only when `root` is unusable or a visitor returns
/// a fatal error (see `SweepError::is_fatal`). Everything else is recorded
/// in [`WalkReport::failures`] and the walk continues.
pub trait TreeWalker {
    fn walk<V>(&self, root: &Path, visitor: &mut V) -> Result<WalkReport<V::Output>>
    where
        V: TreeVisitor + ?Sized;
}
