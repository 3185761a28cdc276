// crates/infra/src/report.rs
use std::{
    io::{self, Write},
    path::Path,
};

use srcsweep_ports::report::ReportSink;
use srcsweep_shared_kernel::{InfrastructureError, LineCount, Result};

/// Writes the counting report as plain lines.
///
/// ```text
/// ./src
/// 42	./src/main.rs
/// 42	total
/// ```
#[derive(Debug)]
pub struct LineReport<W: Write> {
    out: W,
}

impl LineReport<io::StdoutLock<'static>> {
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> LineReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn report_err(source: io::Error) -> InfrastructureError {
    InfrastructureError::ReportWrite { source }
}

impl<W: Write> ReportSink for LineReport<W> {
    fn directory(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out, "{}", path.display()).map_err(report_err)?;
        Ok(())
    }

    fn file(&mut self, count: LineCount, path: &Path) -> Result<()> {
        writeln!(self.out, "{count}\t{}", path.display()).map_err(report_err)?;
        Ok(())
    }

    fn total(&mut self, count: LineCount) -> Result<()> {
        writeln!(self.out, "{count}\ttotal").map_err(report_err)?;
        self.out.flush().map_err(report_err)?;
        Ok(())
    }
}
