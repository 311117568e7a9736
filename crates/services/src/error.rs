//! Shared error types for the services crate.

use thiserror::Error;

/// Errors reported by a `Narrator` backend.
///
/// Callers log and drop these; narration never affects practice state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NarrationError {
    #[error("nothing to narrate")]
    EmptyText,
    #[error("locale {locale:?} is not supported")]
    UnsupportedLocale { locale: String },
    #[error("speech backend failed: {0}")]
    Backend(String),
}
