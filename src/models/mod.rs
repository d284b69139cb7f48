// Model exports
pub mod domain;
pub mod tier;

pub use domain::{
    CandidateProfile, CaseComplexity, CompatibilityLevel, DimensionScore, MatchQuery,
    MatchResult, ScoreBreakdown, Urgency, VerificationLevel,
};
pub use tier::{
    Badge, MetricProgress, ProviderMetrics, TierLevel, TierProgress, TierRequirements,
};
