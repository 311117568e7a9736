use dioxus::document::eval;
use services::{NarrationError, Narrator};
use tracing::debug;

/// Speaks through the webview's `speechSynthesis` API.
///
/// Must be called from inside the Dioxus runtime, i.e. from an event handler.
/// The script result is never awaited.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSpeechNarrator;

impl Narrator for WebSpeechNarrator {
    fn speak(&self, text: &str, locale: &str) -> Result<(), NarrationError> {
        if text.trim().is_empty() {
            debug!(locale, "skipping blank utterance");
            return Err(NarrationError::EmptyText);
        }
        let _speech = eval(&speech_script(text, locale));
        debug!(locale, chars = text.chars().count(), "speech queued");
        Ok(())
    }
}

/// JavaScript that queues `text` for speech in `locale`.
#[must_use]
pub fn speech_script(text: &str, locale: &str) -> String {
    let text = serde_json::Value::from(text);
    let locale = serde_json::Value::from(locale);
    format!(
        "if ('speechSynthesis' in window) {{ \
         const utterance = new SpeechSynthesisUtterance({text}); \
         utterance.lang = {locale}; \
         window.speechSynthesis.speak(utterance); }}"
    )
}
