//! Speech output for example sentences.
//!
//! Narration is fire-and-forget: implementations should return quickly and
//! callers ignore the outcome beyond logging it.

use std::sync::Mutex;

use crate::error::NarrationError;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Speaks text aloud in the given locale.
pub trait Narrator: Send + Sync {
    /// # Errors
    ///
    /// Returns `NarrationError` when the backend cannot speak the text.
    fn speak(&self, text: &str, locale: &str) -> Result<(), NarrationError>;
}

/// Narrator that does nothing. Used for headless runs and when muted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn speak(&self, _text: &str, _locale: &str) -> Result<(), NarrationError> {
        Ok(())
    }
}

/// A single recorded request to speak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub locale: String,
}

/// Narrator that records every request instead of speaking it.
#[derive(Debug, Default)]
pub struct RecordingNarrator {
    utterances: Mutex<Vec<Utterance>>,
}

impl RecordingNarrator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything spoken so far, oldest first.
    #[must_use]
    pub fn utterances(&self) -> Vec<Utterance> {
        self.utterances
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Narrator for RecordingNarrator {
    fn speak(&self, text: &str, locale: &str) -> Result<(), NarrationError> {
        if text.trim().is_empty() {
            return Err(NarrationError::EmptyText);
        }
        let mut guard = self
            .utterances
            .lock()
            .map_err(|_| NarrationError::Backend("recorder poisoned".to_string()))?;
        guard.push(Utterance {
            text: text.to_string(),
            locale: locale.to_string(),
        });
        Ok(())
    }
}
