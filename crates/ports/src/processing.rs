// crates/ports/src/processing.rs
use std::{ops::Add, path::Path};

use srcsweep_shared_kernel::{LineCount, Result};

/// Result of normalizing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeOutcome {
    /// No tab was found; the file was left untouched.
    Unchanged,
    /// The file was rewritten after replacing `tabs` tab characters.
    Rewritten { tabs: usize },
}

/// Aggregated normalization results for a subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeTally {
    pub rewritten: usize,
    pub unchanged: usize,
    pub tabs: usize,
}

impl NormalizeTally {
    pub fn files(&self) -> usize {
        self.rewritten + self.unchanged
    }
}

impl From<NormalizeOutcome> for NormalizeTally {
    fn from(outcome: NormalizeOutcome) -> Self {
        match outcome {
            NormalizeOutcome::Unchanged => Self { unchanged: 1, ..Self::default() },
            NormalizeOutcome::Rewritten { tabs } => Self { rewritten: 1, tabs, ..Self::default() },
        }
    }
}

impl Add for NormalizeTally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            rewritten: self.rewritten + rhs.rewritten,
            unchanged: self.unchanged + rhs.unchanged,
            tabs: self.tabs + rhs.tabs,
        }
    }
}

/// Rewrites a file in place, replacing tabs with spaces.
pub trait FileNormalizer {
    fn normalize(&self, path: &Path) -> Result<NormalizeOutcome>;
}

/// Counts the non-blank lines of a file.
pub trait LineCounter {
    fn count_file(&self, path: &Path) -> Result<LineCount>;
}
