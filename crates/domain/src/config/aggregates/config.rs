use std::path::PathBuf;

use crate::config::{DEFAULT_COUNT_ROOT, ExtensionFilter, RootSet, TabWidth};

/// Settings for the tab-normalizing sweep over every member root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeConfig {
    pub roots: RootSet,
    pub filter: ExtensionFilter,
    pub tab_width: TabWidth,
}

/// Settings for the non-blank line count of a single tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountConfig {
    pub root: PathBuf,
    pub filter: ExtensionFilter,
    /// Emit the final `"<total>\ttotal"` line after the tree report.
    pub print_total: bool,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self { root: PathBuf::from(DEFAULT_COUNT_ROOT), filter: ExtensionFilter::default(), print_total: true }
    }
}
