// crates/munidb-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = MuniError> = std::result::Result<T, E>;

/// Errors surfaced while loading the bundled dataset.
///
/// Search itself is total and never returns an error; only the loader can
/// fail, and only if the embedded dataset is unreadable.
#[derive(Debug, Error)]
pub enum MuniError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
}
