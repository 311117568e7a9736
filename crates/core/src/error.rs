use thiserror::Error;

/// Errors raised while building or checking a task catalog.
///
/// The built-in catalog never produces these; they guard custom catalogs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no tasks")]
    NoTasks,

    #[error("catalog has no ranks")]
    NoRanks,

    #[error("lowest rank must start at 0, found {threshold}")]
    FirstRankNotZero { threshold: u32 },

    #[error("rank {title:?} is not above the previous threshold")]
    UnorderedRanks { title: String },

    #[error("task {tense:?} lists synonyms for {keyword:?}, which is not an expected keyword")]
    OrphanSynonym { tense: String, keyword: String },
}
