use std::path::Path;

use log::info;
use srcsweep_domain::NormalizeConfig;
use srcsweep_ports::{
    filesystem::{TreeVisitor, TreeWalker},
    processing::{FileNormalizer, NormalizeTally},
};
use srcsweep_shared_kernel::{ErrorContext, Result};

use crate::dto::RunOutcome;

/// Expands tabs in every matching file below each configured root.
///
/// Roots are independent: a root that is missing or not a directory is
/// recorded as a failure and the remaining roots are still processed.
pub struct NormalizeMembers<'a, W: TreeWalker> {
    walker: &'a W,
    normalizer: &'a dyn FileNormalizer,
}

impl<'a, W: TreeWalker> NormalizeMembers<'a, W> {
    pub fn new(walker: &'a W, normalizer: &'a dyn FileNormalizer) -> Self {
        Self { walker, normalizer }
    }

    pub fn run(&self, config: &NormalizeConfig) -> Result<RunOutcome<NormalizeTally>> {
        let mut outcome = RunOutcome::default();

        for root in &config.roots {
            outcome.roots += 1;
            let mut visitor = NormalizeVisitor { normalizer: self.normalizer };
            match self.walker.walk(root, &mut visitor) {
                Ok(report) => outcome.merge(report),
                Err(err) if err.is_fatal() => {
                    return Err(err).with_context(|| format!("walking '{}'", root.display()));
                }
                Err(err) => outcome.root_failed(root, err),
            }
        }

        info!(
            "normalized {} of {} files ({} tabs) across {} roots",
            outcome.total.rewritten,
            outcome.total.files(),
            outcome.total.tabs,
            outcome.roots
        );
        Ok(outcome)
    }
}

struct NormalizeVisitor<'a> {
    normalizer: &'a dyn FileNormalizer,
}

impl TreeVisitor for NormalizeVisitor<'_> {
    type Output = NormalizeTally;

    fn visit_file(&mut self, path: &Path) -> Result<NormalizeTally> {
        self.normalizer.normalize(path).map(NormalizeTally::from)
    }
}
