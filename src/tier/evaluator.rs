use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    MetricProgress, ProviderMetrics, TierLevel, TierProgress, TierRequirements,
    VerificationLevel,
};

/// Response-hours ceiling used for the bronze floor; effectively "any"
const BRONZE_RESPONSE_CEILING: f64 = 8760.0;

/// Per-tier threshold table
///
/// Configuration data, not code: the waterfall below is generic over the
/// table contents. Thresholds must be non-decreasing in strictness from
/// bronze to platinum; this is validated once when the evaluator is
/// built, never per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    pub bronze: TierRequirements,
    pub silver: TierRequirements,
    pub gold: TierRequirements,
    pub platinum: TierRequirements,
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            bronze: TierRequirements {
                min_consultations: 0,
                min_rating: 0.0,
                min_reviews: 0,
                min_years_experience: 0.0,
                min_completed_cases: 0,
                min_success_rate: 0.0,
                max_response_hours: BRONZE_RESPONSE_CEILING,
                min_verification: VerificationLevel::None,
            },
            silver: TierRequirements {
                min_consultations: 10,
                min_rating: 4.0,
                min_reviews: 5,
                min_years_experience: 1.0,
                min_completed_cases: 5,
                min_success_rate: 70.0,
                max_response_hours: 48.0,
                min_verification: VerificationLevel::Basic,
            },
            gold: TierRequirements {
                min_consultations: 50,
                min_rating: 4.3,
                min_reviews: 25,
                min_years_experience: 3.0,
                min_completed_cases: 30,
                min_success_rate: 80.0,
                max_response_hours: 24.0,
                min_verification: VerificationLevel::Identity,
            },
            platinum: TierRequirements {
                min_consultations: 150,
                min_rating: 4.7,
                min_reviews: 75,
                min_years_experience: 5.0,
                min_completed_cases: 100,
                min_success_rate: 90.0,
                max_response_hours: 12.0,
                min_verification: VerificationLevel::Professional,
            },
        }
    }
}

impl TierTable {
    pub fn requirements(&self, tier: TierLevel) -> &TierRequirements {
        match tier {
            TierLevel::Bronze => &self.bronze,
            TierLevel::Silver => &self.silver,
            TierLevel::Gold => &self.gold,
            TierLevel::Platinum => &self.platinum,
        }
    }

    /// Check non-decreasing strictness across consecutive tiers on all
    /// eight dimensions (response hours tighten, so they must not grow).
    pub fn validate(&self) -> Result<(), EngineError> {
        for pair in TierLevel::ALL.windows(2) {
            let (lower_tier, upper_tier) = (pair[0], pair[1]);
            let lower = self.requirements(lower_tier);
            let upper = self.requirements(upper_tier);

            let monotonic = upper.min_consultations >= lower.min_consultations
                && upper.min_rating >= lower.min_rating
                && upper.min_reviews >= lower.min_reviews
                && upper.min_years_experience >= lower.min_years_experience
                && upper.min_completed_cases >= lower.min_completed_cases
                && upper.min_success_rate >= lower.min_success_rate
                && upper.max_response_hours <= lower.max_response_hours
                && upper.min_verification >= lower.min_verification;

            if !monotonic {
                return Err(EngineError::InvalidTierTable(format!(
                    "{:?} thresholds are not stricter than {:?}",
                    upper_tier, lower_tier
                )));
            }
        }
        Ok(())
    }
}

/// Tier qualification waterfall over a metrics snapshot
///
/// A pure function of the snapshot: no stored transition history, no
/// per-provider state, trivially parallelizable across providers.
#[derive(Debug, Clone)]
pub struct TierEvaluator {
    table: TierTable,
}

impl TierEvaluator {
    /// Build an evaluator, rejecting non-monotonic threshold tables
    pub fn new(table: TierTable) -> Result<Self, EngineError> {
        table.validate()?;
        Ok(Self { table })
    }

    pub fn with_default_table() -> Self {
        Self {
            table: TierTable::default(),
        }
    }

    pub fn table(&self) -> &TierTable {
        &self.table
    }

    /// The highest tier whose requirements all hold simultaneously.
    /// Bronze is the all-zero floor, so every snapshot resolves to a tier.
    pub fn evaluate(&self, metrics: &ProviderMetrics) -> TierLevel {
        for tier in TierLevel::ALL.iter().rev() {
            if meets_all(metrics, self.table.requirements(*tier)) {
                return *tier;
            }
        }
        TierLevel::Bronze
    }

    /// Current tier plus granular progress toward the next tier.
    ///
    /// The overall percentage is an unweighted pass/fail ratio over the
    /// eight criteria. At the ceiling tier the entries report against the
    /// current tier's own thresholds and are all met.
    pub fn progress(&self, metrics: &ProviderMetrics) -> TierProgress {
        let current_tier = self.evaluate(metrics);
        let next_tier = current_tier.next();

        let target_tier = next_tier.unwrap_or(current_tier);
        let requirements = metric_progress(metrics, self.table.requirements(target_tier));

        let met = requirements.iter().filter(|r| r.met).count();
        let progress_pct = 100.0 * met as f64 / requirements.len() as f64;

        TierProgress {
            current_tier,
            next_tier,
            requirements,
            progress_pct,
            benefits: current_tier.benefits(),
        }
    }
}

impl Default for TierEvaluator {
    fn default() -> Self {
        Self::with_default_table()
    }
}

fn meets_all(metrics: &ProviderMetrics, req: &TierRequirements) -> bool {
    metrics.consultations >= req.min_consultations
        && metrics.avg_rating >= req.min_rating
        && metrics.review_count >= req.min_reviews
        && metrics.years_experience >= req.min_years_experience
        && metrics.completed_cases >= req.min_completed_cases
        && metrics.success_rate >= req.min_success_rate
        && metrics.avg_response_hours <= req.max_response_hours
        && metrics.verification >= req.min_verification
}

fn metric_progress(metrics: &ProviderMetrics, req: &TierRequirements) -> Vec<MetricProgress> {
    vec![
        MetricProgress {
            metric: "consultations".to_string(),
            current: metrics.consultations as f64,
            required: req.min_consultations as f64,
            met: metrics.consultations >= req.min_consultations,
        },
        MetricProgress {
            metric: "rating".to_string(),
            current: metrics.avg_rating,
            required: req.min_rating,
            met: metrics.avg_rating >= req.min_rating,
        },
        MetricProgress {
            metric: "reviews".to_string(),
            current: metrics.review_count as f64,
            required: req.min_reviews as f64,
            met: metrics.review_count >= req.min_reviews,
        },
        MetricProgress {
            metric: "yearsExperience".to_string(),
            current: metrics.years_experience,
            required: req.min_years_experience,
            met: metrics.years_experience >= req.min_years_experience,
        },
        MetricProgress {
            metric: "completedCases".to_string(),
            current: metrics.completed_cases as f64,
            required: req.min_completed_cases as f64,
            met: metrics.completed_cases >= req.min_completed_cases,
        },
        MetricProgress {
            metric: "successRate".to_string(),
            current: metrics.success_rate,
            required: req.min_success_rate,
            met: metrics.success_rate >= req.min_success_rate,
        },
        MetricProgress {
            metric: "responseHours".to_string(),
            current: metrics.avg_response_hours,
            required: req.max_response_hours,
            met: metrics.avg_response_hours <= req.max_response_hours,
        },
        MetricProgress {
            metric: "verification".to_string(),
            current: metrics.verification as u8 as f64,
            required: req.min_verification as u8 as f64,
            met: metrics.verification >= req.min_verification,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics_at(req: &TierRequirements) -> ProviderMetrics {
        ProviderMetrics {
            provider_id: "p1".to_string(),
            consultations: req.min_consultations,
            avg_rating: req.min_rating,
            review_count: req.min_reviews,
            years_experience: req.min_years_experience,
            completed_cases: req.min_completed_cases,
            success_rate: req.min_success_rate,
            avg_response_hours: req.max_response_hours,
            verification: req.min_verification,
        }
    }

    #[test]
    fn test_default_table_is_valid() {
        assert!(TierTable::default().validate().is_ok());
    }

    #[test]
    fn test_non_monotonic_table_rejected() {
        let mut table = TierTable::default();
        table.gold.min_rating = 3.0; // below silver
        assert!(matches!(
            TierEvaluator::new(table),
            Err(EngineError::InvalidTierTable(_))
        ));
    }

    #[test]
    fn test_new_provider_is_bronze() {
        let evaluator = TierEvaluator::with_default_table();
        let metrics = ProviderMetrics {
            provider_id: "new".to_string(),
            consultations: 0,
            avg_rating: 0.0,
            review_count: 0,
            years_experience: 0.0,
            completed_cases: 0,
            success_rate: 0.0,
            avg_response_hours: 72.0,
            verification: VerificationLevel::None,
        };
        assert_eq!(evaluator.evaluate(&metrics), TierLevel::Bronze);
    }

    #[test]
    fn test_exact_gold_thresholds_resolve_to_gold() {
        let evaluator = TierEvaluator::with_default_table();
        let metrics = metrics_at(&evaluator.table().gold);
        assert_eq!(evaluator.evaluate(&metrics), TierLevel::Gold);
    }

    #[test]
    fn test_one_failing_metric_blocks_tier() {
        let evaluator = TierEvaluator::with_default_table();
        let mut metrics = metrics_at(&evaluator.table().gold);
        metrics.avg_response_hours = 30.0; // above gold's 24h ceiling
        assert_eq!(evaluator.evaluate(&metrics), TierLevel::Silver);
    }

    #[test]
    fn test_platinum_progress_all_met() {
        let evaluator = TierEvaluator::with_default_table();
        let metrics = metrics_at(&evaluator.table().platinum);

        let progress = evaluator.progress(&metrics);
        assert_eq!(progress.current_tier, TierLevel::Platinum);
        assert_eq!(progress.next_tier, None);
        assert_eq!(progress.requirements.len(), 8);
        assert!(progress.requirements.iter().all(|r| r.met));
        assert_eq!(progress.progress_pct, 100.0);
    }

    #[test]
    fn test_progress_toward_next_tier() {
        let evaluator = TierEvaluator::with_default_table();
        let mut metrics = metrics_at(&evaluator.table().silver);
        // Satisfy two of gold's stricter thresholds
        metrics.avg_rating = 4.5;
        metrics.avg_response_hours = 10.0;

        let progress = evaluator.progress(&metrics);
        assert_eq!(progress.current_tier, TierLevel::Silver);
        assert_eq!(progress.next_tier, Some(TierLevel::Gold));

        let met = progress.requirements.iter().filter(|r| r.met).count();
        assert_eq!(met, 2);
        assert_eq!(progress.progress_pct, 25.0);
    }

    #[test]
    fn test_progress_idempotent() {
        let evaluator = TierEvaluator::with_default_table();
        let metrics = metrics_at(&evaluator.table().silver);

        let a = evaluator.progress(&metrics);
        let b = evaluator.progress(&metrics);
        assert_eq!(a.current_tier, b.current_tier);
        assert_eq!(a.progress_pct, b.progress_pct);
    }

    #[test]
    fn test_improving_metrics_never_lowers_tier() {
        let evaluator = TierEvaluator::with_default_table();
        let base = metrics_at(&evaluator.table().silver);
        let before = evaluator.evaluate(&base);

        let mut improved = base.clone();
        improved.consultations += 200;
        improved.avg_rating = 5.0;
        improved.review_count += 100;
        improved.years_experience += 10.0;
        improved.completed_cases += 200;
        improved.success_rate = 100.0;
        improved.avg_response_hours = 1.0;
        improved.verification = VerificationLevel::Enhanced;

        assert!(evaluator.evaluate(&improved) >= before);
    }
}
