// crates/infra/src/normalizer.rs
use std::{borrow::Cow, path::Path};

use log::trace;
use srcsweep_domain::{TabWidth, count_tabs, expand_tabs};
use srcsweep_ports::processing::{FileNormalizer, NormalizeOutcome};
use srcsweep_shared_kernel::{InfrastructureError, Result};

use crate::persistence::{FileReader, FileWriter};

/// Rewrites files in place with every tab expanded to `width` spaces.
///
/// Files without tabs are not written at all. Rewrites go through
/// [`FileWriter::atomic_write`], so a failed write never leaves a
/// truncated file behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabNormalizer {
    width: TabWidth,
}

impl TabNormalizer {
    pub fn new(width: TabWidth) -> Self {
        Self { width }
    }
}

impl FileNormalizer for TabNormalizer {
    fn normalize(&self, path: &Path) -> Result<NormalizeOutcome> {
        let content = FileReader::read_to_string(path).map_err(|e| InfrastructureError::from_read(path, e))?;

        let Cow::Owned(expanded) = expand_tabs(&content, self.width) else {
            return Ok(NormalizeOutcome::Unchanged);
        };
        let tabs = count_tabs(&content);

        FileWriter::atomic_write(path, expanded.as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        trace!("expanded {tabs} tabs in {}", path.display());
        Ok(NormalizeOutcome::Rewritten { tabs })
    }
}
