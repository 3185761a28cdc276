// crates/ports/src/report.rs
use std::path::Path;

use srcsweep_shared_kernel::{LineCount, Result};

/// Destination of the counting report.
///
/// Implementations must fail with `InfrastructureError::ReportWrite` when
/// the stream is gone, which callers treat as fatal.
pub trait ReportSink {
    /// One line per visited directory: `"<path>"`.
    fn directory(&mut self, path: &Path) -> Result<()>;
    /// One line per counted file: `"<count>\t<path>"`.
    fn file(&mut self, count: LineCount, path: &Path) -> Result<()>;
    /// Final line: `"<total>\ttotal"`.
    fn total(&mut self, count: LineCount) -> Result<()>;
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn directory(&mut self, path: &Path) -> Result<()> {
        (**self).directory(path)
    }

    fn file(&mut self, count: LineCount, path: &Path) -> Result<()> {
        (**self).file(count, path)
    }

    fn total(&mut self, count: LineCount) -> Result<()> {
        (**self).total(count)
    }
}
