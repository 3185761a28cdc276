use std::path::Path;

use log::info;
use srcsweep_domain::CountConfig;
use srcsweep_ports::{
    filesystem::{TreeVisitor, TreeWalker},
    processing::LineCounter,
    report::ReportSink,
};
use srcsweep_shared_kernel::{ErrorContext, LineCount, Result};

use crate::dto::RunOutcome;

/// Counts non-blank lines below one root and reports them per directory.
///
/// The report interleaves a `"<path>"` line for each directory with a
/// `"<count>\t<path>"` line for each counted file, in walk order. Each
/// directory's subtotal is the sum of its files and subdirectories.
pub struct CountTree<'a, W: TreeWalker, S: ReportSink> {
    walker: &'a W,
    counter: &'a dyn LineCounter,
    sink: S,
}

impl<'a, W: TreeWalker, S: ReportSink> CountTree<'a, W, S> {
    pub fn new(walker: &'a W, counter: &'a dyn LineCounter, sink: S) -> Self {
        Self { walker, counter, sink }
    }

    pub fn run(&mut self, config: &CountConfig) -> Result<RunOutcome<LineCount>> {
        let mut outcome = RunOutcome { roots: 1, ..RunOutcome::default() };
        let root = config.root.as_path();

        let mut visitor = CountVisitor { counter: self.counter, sink: &mut self.sink };
        match self.walker.walk(root, &mut visitor) {
            Ok(report) => outcome.merge(report),
            Err(err) if err.is_fatal() => {
                return Err(err).with_context(|| format!("walking '{}'", root.display()));
            }
            Err(err) => {
                outcome.root_failed(root, err);
                return Ok(outcome);
            }
        }

        if config.print_total {
            self.sink.total(outcome.total)?;
        }
        info!("{} non-blank lines in {} files under {}", outcome.total, outcome.files, root.display());
        Ok(outcome)
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

struct CountVisitor<'a, S: ReportSink> {
    counter: &'a dyn LineCounter,
    sink: &'a mut S,
}

impl<S: ReportSink> TreeVisitor for CountVisitor<'_, S> {
    type Output = LineCount;

    fn enter_dir(&mut self, path: &Path) -> Result<()> {
        self.sink.directory(path)
    }

    fn visit_file(&mut self, path: &Path) -> Result<LineCount> {
        let count = self.counter.count_file(path)?;
        self.sink.file(count, path)?;
        Ok(count)
    }
}
