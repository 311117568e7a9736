use serde::Serialize;

use crate::model::DayNumber;

/// Record of one submitted answer. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    day: DayNumber,
    tense: String,
    raw_input: String,
    score_after: u32,
    feedback: String,
}

impl HistoryEntry {
    /// `raw_input` is stored lowercased, as it was evaluated.
    #[must_use]
    pub fn new(
        day: DayNumber,
        tense: impl Into<String>,
        raw_input: &str,
        score_after: u32,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            day,
            tense: tense.into(),
            raw_input: raw_input.to_lowercase(),
            score_after,
            feedback: feedback.into(),
        }
    }

    #[must_use]
    pub fn day(&self) -> DayNumber {
        self.day
    }

    #[must_use]
    pub fn tense(&self) -> &str {
        &self.tense
    }

    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    #[must_use]
    pub fn score_after(&self) -> u32 {
        self.score_after
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}
