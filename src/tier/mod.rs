// Tier qualification exports
pub mod badges;
pub mod evaluator;

pub use badges::{
    BadgeStore, BadgeStoreError, BadgeSyncDecision, BadgeSynchronizer, ProviderLocks,
    SyncOutcome, TIER_BADGE_TYPE,
};
pub use evaluator::{TierEvaluator, TierTable};
