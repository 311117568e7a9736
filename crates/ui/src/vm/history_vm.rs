use learn_core::model::HistoryEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRowVm {
    pub label: String,
    pub input: String,
    pub feedback: String,
    pub score_after: u32,
}

impl From<&HistoryEntry> for HistoryRowVm {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            label: format!("Day {} ({}):", entry.day(), entry.tense()),
            input: entry.raw_input().to_string(),
            feedback: entry.feedback().to_string(),
            score_after: entry.score_after(),
        }
    }
}

#[must_use]
pub fn map_history_rows(entries: &[HistoryEntry]) -> Vec<HistoryRowVm> {
    entries.iter().map(HistoryRowVm::from).collect()
}
