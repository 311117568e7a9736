use learn_core::SessionSnapshot;

use crate::vm::history_vm::{HistoryRowVm, map_history_rows};

/// Everything the practice screen shows, pre-formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeScreenVm {
    pub heading: String,
    pub streak: u32,
    pub points: u32,
    pub level: String,
    pub title: String,
    pub explanation: String,
    pub examples: Vec<String>,
    pub prompt: String,
    pub draft: String,
    pub feedback: Option<String>,
    pub progress_label: String,
    pub history: Vec<HistoryRowVm>,
}

#[must_use]
pub fn map_practice_screen(snapshot: &SessionSnapshot) -> PracticeScreenVm {
    let feedback = if snapshot.last_feedback.is_empty() {
        None
    } else {
        Some(snapshot.last_feedback.clone())
    };

    PracticeScreenVm {
        heading: format!("English Survival – Day {}", snapshot.day),
        streak: snapshot.streak,
        points: snapshot.score,
        level: snapshot.rank.title().to_string(),
        title: snapshot.task.title().to_string(),
        explanation: snapshot.task.explanation().to_string(),
        examples: snapshot.task.examples().to_vec(),
        prompt: snapshot.task.prompt().to_string(),
        draft: snapshot.draft.clone(),
        feedback,
        progress_label: format!("Task {} of {}", snapshot.day, snapshot.task_count),
        history: map_history_rows(&snapshot.history),
    }
}
