mod catalog;
mod history;
mod ids;
mod rank;
mod task;

pub use catalog::Catalog;
pub use history::HistoryEntry;
pub use ids::DayNumber;
pub use rank::Rank;
pub use task::Task;
