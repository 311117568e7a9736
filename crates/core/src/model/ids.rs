use serde::Serialize;
use std::fmt;

/// 1-based position of a task in the catalog, shown to learners as "Day N".
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DayNumber(u32);

impl DayNumber {
    /// Creates a new `DayNumber`
    #[must_use]
    pub fn new(day: u32) -> Self {
        Self(day)
    }

    /// Day number for a zero-based task index.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).map_or(u32::MAX, |value| value.saturating_add(1)))
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayNumber({})", self.0)
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
