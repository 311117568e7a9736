use serde::Serialize;

/// A named tier unlocked once the cumulative score reaches `threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rank {
    title: String,
    threshold: u32,
}

impl Rank {
    #[must_use]
    pub fn new(title: impl Into<String>, threshold: u32) -> Self {
        Self {
            title: title.into(),
            threshold,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Whether a learner with `score` points has reached this rank.
    #[must_use]
    pub fn is_unlocked_by(&self, score: u32) -> bool {
        score >= self.threshold
    }
}
