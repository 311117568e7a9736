use std::sync::Arc;

use learn_core::model::{Catalog, DayNumber, HistoryEntry, Rank};
use learn_core::{SessionSnapshot, SessionState};
use tracing::{debug, info};

use crate::narration::{DEFAULT_LOCALE, Narrator};

/// Result of submitting the current draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub entry: HistoryEntry,
    pub award: u32,
    /// Set when this submission unlocked a higher rank.
    pub rank_up: Option<Rank>,
}

/// Result of moving to the next task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceOutcome {
    pub day: DayNumber,
    pub wrapped: bool,
    pub streak: u32,
}

/// Owns the practice state and forwards UI actions to it.
///
/// Narration goes through the injected `Narrator`; its failures are logged
/// and dropped.
#[derive(Clone)]
pub struct PracticeLoop {
    state: SessionState,
    narrator: Arc<dyn Narrator>,
    locale: String,
}

impl PracticeLoop {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, narrator: Arc<dyn Narrator>) -> Self {
        Self::from_state(SessionState::new(catalog), narrator)
    }

    /// Resume from an existing state, e.g. one prepared by a test.
    #[must_use]
    pub fn from_state(state: SessionState, narrator: Arc<dyn Narrator>) -> Self {
        Self {
            state,
            narrator,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.snapshot()
    }

    pub fn edit_draft(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(
            day = self.state.current_day().value(),
            chars = text.chars().count(),
            "draft edited"
        );
        self.state.edit_draft(text);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let rank_before = self.state.current_rank().clone();

        let (entry, assessment) = self.state.submit_assessed();
        let entry = entry.clone();
        let award = assessment.award;
        info!(
            day = entry.day().value(),
            tense = entry.tense(),
            award,
            score = entry.score_after(),
            "answer submitted"
        );

        let rank_after = self.state.current_rank();
        let rank_up = (rank_after.threshold() > rank_before.threshold()).then(|| {
            info!(rank = rank_after.title(), "rank unlocked");
            rank_after.clone()
        });

        SubmitOutcome {
            entry,
            award,
            rank_up,
        }
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        let streak_before = self.state.streak();
        self.state.advance();
        let outcome = AdvanceOutcome {
            day: self.state.current_day(),
            wrapped: self.state.streak() > streak_before,
            streak: self.state.streak(),
        };
        info!(
            day = outcome.day.value(),
            wrapped = outcome.wrapped,
            streak = outcome.streak,
            "advanced to next task"
        );
        outcome
    }

    /// Speak the current task's example at `index`.
    ///
    /// Returns `false` when there is no such example. A narrator failure still
    /// returns `true`; it is only logged.
    pub fn narrate_example(&self, index: usize) -> bool {
        let Some(example) = self.state.current_task().examples().get(index) else {
            debug!(index, "no example to narrate");
            return false;
        };
        self.speak(example);
        true
    }

    /// Speak arbitrary text with the configured locale, best-effort.
    pub fn speak(&self, text: &str) {
        if let Err(err) = self.narrator.speak(text, &self.locale) {
            debug!(error = %err, locale = %self.locale, "narration failed");
        }
    }
}
