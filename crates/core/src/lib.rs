#![forbid(unsafe_code)]

pub mod error;
pub mod evaluator;
pub mod model;
pub mod session;

pub use error::CatalogError;
pub use evaluator::{Assessment, MatchResult, Verdict, assess, evaluate, tokenize};
pub use session::{SessionSnapshot, SessionState};
