use thiserror::Error;

/// Errors surfaced by the matching and tier engine
///
/// The engine favors defaulting over failing: missing optional fields
/// produce neutral scores instead of errors. Only malformed candidate
/// records and invalid configuration tables are reported to the caller,
/// and the table checks run eagerly at construction time.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Candidate record is missing a provider identifier")]
    MissingProviderId,

    #[error("Scoring weights must sum to 100, got {0}")]
    InvalidWeights(u32),

    #[error("Tier threshold table is not monotonic: {0}")]
    InvalidTierTable(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    Validation(String),
}
