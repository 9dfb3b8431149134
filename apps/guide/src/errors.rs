use thiserror::Error;

/// Application-level error type.
///
/// Scorer functions themselves are total and never fail; the only blocking
/// condition the engine raises is unusable user input. Everything else here
/// belongs to the loading and presentation edges.
#[derive(Debug, Error)]
pub enum AppError {
    /// No skill tokens survived normalization. Callers should prompt for
    /// re-entry instead of computing meaningless scores.
    #[error("No usable skills entered; add at least one skill and try again")]
    EmptyUserSkills,

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("Career not found: {0}")]
    UnknownCareer(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
