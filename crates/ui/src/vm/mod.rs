mod history_vm;
mod practice_vm;
mod session_vm;

pub use history_vm::{HistoryRowVm, map_history_rows};
pub use practice_vm::{PracticeScreenVm, map_practice_screen};
pub use session_vm::{SessionIntent, SessionPhase, SessionVm};
