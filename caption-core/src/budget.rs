//! Byte-size ceiling for encoded payloads

use std::fmt;

/// Default ceiling: 4 MiB
pub const DEFAULT_BUDGET_BYTES: u64 = 4 * 1024 * 1024;

/// Upper bound, in bytes, that an encoded image must not exceed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SizeBudget(u64);

impl SizeBudget {
    /// Creates a budget; returns `None` for zero
    pub fn new(bytes: u64) -> Option<Self> {
        (bytes > 0).then_some(Self(bytes))
    }

    /// Returns the ceiling in bytes
    pub fn bytes(self) -> u64 {
        self.0
    }

    /// Whether a buffer of `len` bytes is within the budget
    pub fn admits(self, len: usize) -> bool {
        len as u64 <= self.0
    }
}

impl Default for SizeBudget {
    fn default() -> Self {
        Self(DEFAULT_BUDGET_BYTES)
    }
}

impl fmt::Display for SizeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert!(SizeBudget::new(0).is_none());
        assert_eq!(SizeBudget::new(1).map(SizeBudget::bytes), Some(1));
    }

    #[test]
    fn admits_is_inclusive() {
        let budget = SizeBudget::new(1024).unwrap();
        assert!(budget.admits(1023));
        assert!(budget.admits(1024));
        assert!(!budget.admits(1025));
    }

    #[test]
    fn default_is_four_mebibytes() {
        assert_eq!(SizeBudget::default().bytes(), 4_194_304);
    }
}
