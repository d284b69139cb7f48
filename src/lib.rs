//! Provider Match - provider matching and tier qualification engine
//!
//! This library ranks service-provider candidates against a client's
//! request using a weighted multi-criteria scoring model, and derives
//! each provider's qualification tier from lifetime performance metrics.
//! It holds no I/O of its own: candidates, queries and metrics snapshots
//! are supplied by collaborators, and badge persistence happens behind
//! the `BadgeStore` trait.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod tier;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::core::{
    build_explanation, Explanation, Locale, Ranker, RankingOutcome, ScoringWeights,
};
pub use crate::error::EngineError;
pub use crate::models::{
    CandidateProfile, CompatibilityLevel, MatchQuery, MatchResult, ProviderMetrics, TierLevel,
    TierProgress,
};
pub use crate::tier::{BadgeStore, BadgeSynchronizer, ProviderLocks, TierEvaluator, TierTable};
