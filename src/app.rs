// src/app.rs
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::error;
use srcsweep_domain::{CountConfig, NormalizeConfig};
use srcsweep_infra::{FsTreeWalker, LineReport, StreamingLineCounter, TabNormalizer};
use srcsweep_ports::processing::NormalizeTally;
use srcsweep_shared_kernel::LineCount;
use srcsweep_usecase::{CountTree, NormalizeMembers, RunOutcome};

/// Expand tabs in every member root.
pub fn run_indent(config: &NormalizeConfig) -> Result<RunOutcome<NormalizeTally>> {
    let walker = FsTreeWalker::new(config.filter.clone());
    let normalizer = TabNormalizer::new(config.tab_width);
    NormalizeMembers::new(&walker, &normalizer).run(config).context("failed to normalize members")
}

/// Count non-blank lines below the configured root, reporting to stdout.
pub fn run_loc(config: &CountConfig) -> Result<RunOutcome<LineCount>> {
    let walker = FsTreeWalker::new(config.filter.clone());
    let counter = StreamingLineCounter::new();
    CountTree::new(&walker, &counter, LineReport::stdout()).run(config).context("failed to count lines")
}

/// Map a finished run to the process exit status.
pub fn exit_code<T>(outcome: &RunOutcome<T>) -> ExitCode {
    if outcome.is_success() {
        return ExitCode::SUCCESS;
    }
    error!("{} failure(s) across {} root(s); see the warnings above", outcome.failures.len(), outcome.roots);
    ExitCode::FAILURE
}
