// Core algorithm exports
pub mod aggregator;
pub mod explain;
pub mod ranker;
pub mod scorers;
pub mod weights;

pub use aggregator::aggregate;
pub use explain::{build_explanation, Explanation, Locale};
pub use ranker::{Ranker, RankingOutcome};
pub use weights::{regions_adjacent, required_specializations, ScoringWeights};
