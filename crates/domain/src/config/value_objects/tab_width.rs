use srcsweep_shared_kernel::{DomainError, DomainResult};

use crate::config::DEFAULT_TAB_WIDTH;

/// Number of spaces substituted for a single tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabWidth(usize);

impl TabWidth {
    pub const MIN: usize = 1;
    pub const MAX: usize = 16;

    pub fn new(value: usize) -> DomainResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::InvalidTabWidth { value, min: Self::MIN, max: Self::MAX });
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for TabWidth {
    fn default() -> Self {
        Self(DEFAULT_TAB_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_four() {
        assert_eq!(TabWidth::default().get(), 4);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(TabWidth::new(1).is_ok());
        assert!(TabWidth::new(16).is_ok());
        assert!(matches!(TabWidth::new(0), Err(DomainError::InvalidTabWidth { value: 0, .. })));
        assert!(TabWidth::new(17).is_err());
    }
}
