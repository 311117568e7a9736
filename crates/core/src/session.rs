use std::sync::Arc;

use serde::Serialize;

use crate::evaluator::{Assessment, assess};
use crate::model::{Catalog, DayNumber, HistoryEntry, Rank, Task};

/// In-memory practice state for one run of the app.
///
/// Transitions never fail, never lower the score, never drop history and
/// never reset the streak. The task sequence cycles forever.
#[derive(Debug, Clone)]
pub struct SessionState {
    catalog: Arc<Catalog>,
    current_task_index: usize,
    drafts: Vec<String>,
    score: u32,
    streak: u32,
    history: Vec<HistoryEntry>,
    last_feedback: String,
}

impl SessionState {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let drafts = vec![String::new(); catalog.task_count()];
        Self {
            catalog,
            current_task_index: 0,
            drafts,
            score: 0,
            streak: 1,
            history: Vec::new(),
            last_feedback: String::new(),
        }
    }

    /// Replace the draft for the current task and hide any feedback.
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        self.drafts[self.current_task_index] = text.into();
        self.last_feedback.clear();
    }

    /// Score the current draft and record it in the history.
    pub fn submit(&mut self) -> &HistoryEntry {
        self.submit_assessed().0
    }

    /// Like [`submit`](Self::submit), also returning the assessment.
    ///
    /// The assessment's `award` is what the answer earned, even when the
    /// score is already saturated and did not move.
    pub fn submit_assessed(&mut self) -> (&HistoryEntry, Assessment) {
        let task = self.current_task();
        let draft = self.current_draft();
        let assessment = assess(draft, task);
        let tense = task.tense().to_string();
        let entry_input = draft.to_string();
        let day = self.current_day();

        self.score = self.score.saturating_add(assessment.award);
        self.history.push(HistoryEntry::new(
            day,
            tense,
            &entry_input,
            self.score,
            assessment.message.clone(),
        ));
        self.last_feedback.clone_from(&assessment.message);

        (&self.history[self.history.len() - 1], assessment)
    }

    /// Move to the next task, wrapping to the first and bumping the streak.
    ///
    /// Drafts are kept, so revisiting a task shows what was typed before.
    pub fn advance(&mut self) {
        self.current_task_index = (self.current_task_index + 1) % self.catalog.task_count();
        if self.current_task_index == 0 {
            self.streak = self.streak.saturating_add(1);
        }
        self.last_feedback.clear();
    }

    #[must_use]
    pub fn current_rank(&self) -> &Rank {
        self.catalog.rank_for(self.score)
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn current_task_index(&self) -> usize {
        self.current_task_index
    }

    #[must_use]
    pub fn current_day(&self) -> DayNumber {
        DayNumber::from_index(self.current_task_index)
    }

    #[must_use]
    pub fn current_task(&self) -> &Task {
        &self.catalog.tasks()[self.current_task_index]
    }

    #[must_use]
    pub fn current_draft(&self) -> &str {
        &self.drafts[self.current_task_index]
    }

    /// Draft for any task; empty for out-of-range indexes.
    #[must_use]
    pub fn draft_for(&self, index: usize) -> &str {
        self.drafts.get(index).map_or("", String::as_str)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn last_feedback(&self) -> &str {
        &self.last_feedback
    }

    /// `true` after a submit, until the next edit or advance.
    #[must_use]
    pub fn is_showing_feedback(&self) -> bool {
        !self.last_feedback.is_empty()
    }

    /// Owned copy of everything the presentation layer renders.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            day: self.current_day(),
            task_count: self.catalog.task_count(),
            task: self.current_task().clone(),
            draft: self.current_draft().to_string(),
            last_feedback: self.last_feedback.clone(),
            score: self.score,
            streak: self.streak,
            rank: self.current_rank().clone(),
            history: self.history.clone(),
        }
    }
}

/// Read-only view of a `SessionState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub day: DayNumber,
    pub task_count: usize,
    pub task: Task,
    pub draft: String,
    pub last_feedback: String,
    pub score: u32,
    pub streak: u32,
    pub rank: Rank,
    pub history: Vec<HistoryEntry>,
}
