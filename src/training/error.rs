//! Errors from dataset generation and export.

/// Failures that abort a generation or export run.
///
/// Per-battle deck failures are not here: they are recorded as
/// `SkippedBattle`s and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("catalog error: {0}")]
    Catalog(#[from] crate::core::BattleError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}
