mod history;
mod practice;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use history::HistoryList;
pub use practice::PracticeView;
