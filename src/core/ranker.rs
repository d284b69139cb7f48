use tracing::debug;
use validator::Validate;

use crate::core::aggregator::aggregate;
use crate::core::weights::ScoringWeights;
use crate::error::EngineError;
use crate::models::{CandidateProfile, MatchQuery, MatchResult};

/// Result of ranking a candidate pool
#[derive(Debug)]
pub struct RankingOutcome {
    pub results: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Ranking orchestrator: scores every candidate in a pool, filters out
/// unavailable ones, sorts and truncates.
///
/// Ranking is deterministic: identical inputs always produce identical
/// output, and candidates with equal scores keep their input order (the
/// sort is stable by contract, not by accident).
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    /// Build a ranker, rejecting weight tables that do not sum to 100
    pub fn new(weights: ScoringWeights) -> Result<Self, EngineError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank a candidate pool against a query
    ///
    /// # Arguments
    /// * `candidates` - all candidates sourced by the data-access collaborator
    /// * `query` - the client's matching preferences
    ///
    /// # Errors
    /// Returns `EngineError::Validation` for an out-of-range result limit
    /// and `EngineError::MissingProviderId` if any candidate record lacks
    /// an identifier; all other gaps default to neutral scores.
    pub fn rank(
        &self,
        candidates: Vec<CandidateProfile>,
        query: &MatchQuery,
    ) -> Result<RankingOutcome, EngineError> {
        query
            .validate()
            .map_err(|e| EngineError::Validation(e.to_string()))?;

        let total_candidates = candidates.len();

        let mut results: Vec<MatchResult> = Vec::with_capacity(total_candidates);
        for candidate in &candidates {
            if candidate.provider_id.trim().is_empty() {
                return Err(EngineError::MissingProviderId);
            }
            let result = aggregate(candidate, query, &self.weights);
            // Score 0 marks an unavailable candidate; drop it here
            if result.score > 0.0 {
                results.push(result);
            }
        }

        // Vec::sort_by is stable, so ties keep input order
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results.truncate(query.limit);

        debug!(
            total = total_candidates,
            returned = results.len(),
            "ranked candidate pool"
        );

        Ok(RankingOutcome {
            results,
            total_candidates,
        })
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VerificationLevel;

    fn create_candidate(id: &str, rating: f64, available: bool) -> CandidateProfile {
        CandidateProfile {
            provider_id: id.to_string(),
            specializations: vec!["tax-law".to_string()],
            languages: vec!["English".to_string()],
            region: Some("midwest".to_string()),
            consultation_fee: Some(150.0),
            hourly_rate: None,
            avg_response_hours: Some(5.0),
            avg_rating: rating,
            review_count: 20,
            completed_cases: 30,
            success_rate: 85.0,
            verification: VerificationLevel::Identity,
            is_available: available,
            accepting_new_clients: true,
            is_featured: false,
            years_experience: 6.0,
            current_load: 1,
            max_capacity: 10,
        }
    }

    #[test]
    fn test_rank_basic() {
        let ranker = Ranker::with_default_weights();
        let candidates = vec![
            create_candidate("low", 2.0, true),
            create_candidate("high", 5.0, true),
        ];

        let outcome = ranker.rank(candidates, &MatchQuery::default()).unwrap();

        assert_eq!(outcome.total_candidates, 2);
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results[0].provider_id, "high");
    }

    #[test]
    fn test_unavailable_excluded() {
        let ranker = Ranker::with_default_weights();
        let candidates = vec![
            create_candidate("here", 4.0, true),
            create_candidate("gone", 5.0, false),
        ];

        let outcome = ranker.rank(candidates, &MatchQuery::default()).unwrap();

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].provider_id, "here");
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let ranker = Ranker::with_default_weights();
        let candidates = vec![
            create_candidate("first", 4.0, true),
            create_candidate("second", 4.0, true),
            create_candidate("third", 4.0, true),
        ];

        let outcome = ranker.rank(candidates, &MatchQuery::default()).unwrap();

        let ids: Vec<&str> = outcome.results.iter().map(|r| r.provider_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_respects_limit() {
        let ranker = Ranker::with_default_weights();
        let candidates: Vec<CandidateProfile> = (0..20)
            .map(|i| create_candidate(&i.to_string(), 3.0 + (i % 3) as f64 * 0.5, true))
            .collect();

        let query = MatchQuery {
            limit: 5,
            ..Default::default()
        };
        let outcome = ranker.rank(candidates, &query).unwrap();

        assert_eq!(outcome.results.len(), 5);
        assert_eq!(outcome.total_candidates, 20);
    }

    #[test]
    fn test_missing_provider_id_is_an_error() {
        let ranker = Ranker::with_default_weights();
        let candidates = vec![create_candidate("", 4.0, true)];

        let result = ranker.rank(candidates, &MatchQuery::default());
        assert!(matches!(result, Err(EngineError::MissingProviderId)));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let ranker = Ranker::with_default_weights();
        let query = MatchQuery {
            limit: 0,
            ..Default::default()
        };
        let result = ranker.rank(vec![create_candidate("p", 4.0, true)], &query);
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_invalid_weights_rejected_at_construction() {
        let mut weights = ScoringWeights::default();
        weights.language = 0;
        assert!(Ranker::new(weights).is_err());
    }

    #[test]
    fn test_deterministic() {
        let ranker = Ranker::with_default_weights();
        let pool: Vec<CandidateProfile> = (0..10)
            .map(|i| create_candidate(&i.to_string(), 3.0 + (i % 5) as f64 * 0.4, true))
            .collect();

        let a = ranker.rank(pool.clone(), &MatchQuery::default()).unwrap();
        let b = ranker.rank(pool, &MatchQuery::default()).unwrap();

        let ids_a: Vec<_> = a.results.iter().map(|r| r.provider_id.clone()).collect();
        let ids_b: Vec<_> = b.results.iter().map(|r| r.provider_id.clone()).collect();
        assert_eq!(ids_a, ids_b);
    }
}
