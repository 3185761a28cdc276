use std::ffi::OsStr;

use srcsweep_shared_kernel::{DomainError, DomainResult};

use crate::config::DEFAULT_SUFFIX;

/// Case-sensitive, exact file name suffix match.
///
/// `"foo.rs"` matches `".rs"`; `"foo.rs.bak"` and `"foo.RS"` do not. The
/// suffix is compared against the raw encoded bytes of the name, so file
/// names that are not valid UTF-8 still match when their tail does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionFilter {
    suffix: String,
}

impl ExtensionFilter {
    pub fn new(suffix: impl Into<String>) -> DomainResult<Self> {
        let suffix = suffix.into();
        if suffix.is_empty() {
            return Err(DomainError::EmptySuffix);
        }
        Ok(Self { suffix })
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[inline]
    pub fn matches(&self, name: &OsStr) -> bool {
        name.as_encoded_bytes().ends_with(self.suffix.as_bytes())
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self { suffix: DEFAULT_SUFFIX.to_string() }
    }
}
