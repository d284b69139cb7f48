use crate::core::scorers::{
    score_availability, score_budget, score_experience, score_language, score_location,
    score_performance, score_response_time, score_specialization,
};
use crate::core::weights::ScoringWeights;
use crate::models::{
    CandidateProfile, CompatibilityLevel, DimensionScore, MatchQuery, MatchResult,
    ScoreBreakdown,
};

/// Reasons carrying this marker describe an absent query field and are
/// dropped from the aggregated top-reason list.
const NEUTRAL_MARKER: &str = "preference specified";

/// Verified-provider bonus when the query asks for verified providers
const VERIFIED_BONUS: f64 = 1.05;
/// Featured-provider bonus when the query asks for featured providers
const FEATURED_BONUS: f64 = 1.03;

/// Maximum number of reasons carried on a match result
const MAX_REASONS: usize = 5;

/// Score one candidate against a query across all eight dimensions
///
/// The final score is the weighted average of the dimension scores, then
/// the multiplicative bonuses are applied in fixed order (verified, then
/// featured; they compound). An unavailable candidate scores a terminal 0
/// regardless of its other dimensions. The post-bonus score is not
/// clamped, so it can exceed 100 (ceiling 100 * 1.05 * 1.03).
pub fn aggregate(
    candidate: &CandidateProfile,
    query: &MatchQuery,
    weights: &ScoringWeights,
) -> MatchResult {
    let specialization = score_specialization(candidate, query);
    let performance = score_performance(candidate, query);
    let availability = score_availability(candidate, query);
    let budget = score_budget(candidate, query);
    let location = score_location(candidate, query);
    let language = score_language(candidate, query);
    let response_time = score_response_time(candidate, query);
    let experience = score_experience(candidate, query);

    let weighted_sum = specialization.score * weights.specialization as f64
        + performance.score * weights.performance as f64
        + availability.score * weights.availability as f64
        + budget.score * weights.budget as f64
        + location.score * weights.location as f64
        + language.score * weights.language as f64
        + response_time.score * weights.response_time as f64
        + experience.score * weights.experience as f64;

    // An unavailable candidate is excluded outright, not merely penalized
    let mut score = if availability.score == 0.0 {
        0.0
    } else {
        weighted_sum / 100.0
    };

    if score > 0.0 {
        if query.prefer_verified && candidate.verification.is_verified() {
            score *= VERIFIED_BONUS;
        }
        if query.prefer_featured && candidate.is_featured {
            score *= FEATURED_BONUS;
        }
    }

    let breakdown = ScoreBreakdown {
        specialization: specialization.score.round() as u32,
        performance: performance.score.round() as u32,
        availability: availability.score.round() as u32,
        budget: budget.score.round() as u32,
        location: location.score.round() as u32,
        language: language.score.round() as u32,
        response_time: response_time.score.round() as u32,
        experience: experience.score.round() as u32,
    };

    let reasons = collect_reasons(&[
        &specialization,
        &performance,
        &availability,
        &budget,
        &location,
        &language,
    ]);

    MatchResult {
        provider_id: candidate.provider_id.clone(),
        score,
        breakdown,
        reasons,
        compatibility: CompatibilityLevel::from_score(score),
    }
}

/// Concatenate dimension reasons in display order, dropping neutral
/// "no preference" entries, deduplicating, and keeping at most five.
fn collect_reasons(dimensions: &[&DimensionScore]) -> Vec<String> {
    let mut reasons: Vec<String> = Vec::with_capacity(MAX_REASONS);
    for dimension in dimensions {
        for reason in &dimension.reasons {
            if reason.to_lowercase().contains(NEUTRAL_MARKER) {
                continue;
            }
            if reasons.contains(reason) {
                continue;
            }
            reasons.push(reason.clone());
            if reasons.len() == MAX_REASONS {
                return reasons;
            }
        }
    }
    reasons
}
