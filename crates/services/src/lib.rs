#![forbid(unsafe_code)]

pub mod error;
pub mod narration;
pub mod practice_loop;

pub use error::NarrationError;
pub use narration::{DEFAULT_LOCALE, Narrator, RecordingNarrator, SilentNarrator, Utterance};
pub use practice_loop::{AdvanceOutcome, PracticeLoop, SubmitOutcome};
