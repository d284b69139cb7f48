use std::collections::HashSet;

use crate::core::weights::{regions_adjacent, required_specializations};
use crate::models::{CandidateProfile, DimensionScore, MatchQuery};

/// Specialization match: ratio of required tags the candidate covers.
///
/// The required set is derived from the service-type hint (fixed mapping)
/// unioned with any explicit specialization. An empty required set scores
/// a neutral 50.
pub fn score_specialization(candidate: &CandidateProfile, query: &MatchQuery) -> DimensionScore {
    let required = required_specializations(query);
    if required.is_empty() {
        return DimensionScore::new(50.0, "No specialization preference specified");
    }

    let candidate_tags: HashSet<String> = candidate
        .specializations
        .iter()
        .map(|t| t.to_lowercase())
        .collect();

    let matched: Vec<&String> = required.intersection(&candidate_tags).collect();
    let ratio = matched.len() as f64 / required.len() as f64;

    let score = if ratio >= 1.0 {
        100.0
    } else if ratio >= 0.5 {
        70.0 + ratio * 30.0
    } else if ratio > 0.0 {
        40.0 + ratio * 30.0
    } else {
        10.0
    };

    let reason = if matched.is_empty() {
        "No matching specializations".to_string()
    } else if ratio >= 1.0 {
        "Covers all requested specializations".to_string()
    } else {
        format!(
            "Covers {} of {} requested specializations",
            matched.len(),
            required.len()
        )
    };

    DimensionScore::new(score, reason)
}

/// Location match against the query region, using the fixed symmetric
/// region adjacency table. No region preference scores a neutral 80.
pub fn score_location(candidate: &CandidateProfile, query: &MatchQuery) -> DimensionScore {
    let Some(wanted) = &query.region else {
        return DimensionScore::new(80.0, "No region preference specified");
    };

    match &candidate.region {
        Some(region) if region.eq_ignore_ascii_case(wanted) => {
            DimensionScore::new(100.0, "Located in your region")
        }
        Some(region) if regions_adjacent(region, wanted) => {
            DimensionScore::new(60.0, "Located in an adjacent region")
        }
        _ => DimensionScore::new(30.0, "Located outside your region"),
    }
}

/// Language coverage of the query's required languages (case-insensitive).
/// No required languages scores a neutral 80.
pub fn score_language(candidate: &CandidateProfile, query: &MatchQuery) -> DimensionScore {
    if query.languages.is_empty() {
        return DimensionScore::new(80.0, "No language preference specified");
    }

    let spoken: HashSet<String> = candidate
        .languages
        .iter()
        .map(|l| l.to_lowercase())
        .collect();

    let matched = query
        .languages
        .iter()
        .filter(|l| spoken.contains(&l.to_lowercase()))
        .count();
    let required = query.languages.len();

    if matched == required {
        DimensionScore::new(100.0, "Speaks all requested languages")
    } else if matched > 0 {
        let score = 50.0 + (matched as f64 / required as f64) * 50.0;
        DimensionScore::new(
            score,
            format!("Speaks {} of {} requested languages", matched, required),
        )
    } else {
        DimensionScore::new(20.0, "Does not speak the requested languages")
    }
}

/// Budget fit of the candidate's fee against the query's range.
///
/// In-range fees score by distance from the range midpoint (floored at
/// 80); fees below the range score 90 as good value; fees above decay
/// toward 0. No budget at all scores a neutral 80.
pub fn score_budget(candidate: &CandidateProfile, query: &MatchQuery) -> DimensionScore {
    if query.budget_min.is_none() && query.budget_max.is_none() {
        return DimensionScore::new(80.0, "No budget preference specified");
    }

    let fee = candidate.effective_fee();
    let min = query.budget_min.unwrap_or(0.0);
    let upper = query.budget_max.unwrap_or(f64::INFINITY);

    if fee < min {
        return DimensionScore::new(90.0, "Priced below your budget range");
    }

    if fee <= upper {
        let midpoint = (min + query.budget_max.unwrap_or(min * 2.0)) / 2.0;
        // Zero midpoint means no usable target; treat as the neutral branch
        let score = if midpoint <= 0.0 {
            80.0
        } else {
            (100.0 - (fee - midpoint).abs() / midpoint * 20.0).max(80.0)
        };
        return DimensionScore::new(score, "Fee within your budget");
    }

    // fee > upper, so a finite positive max exists here
    let max = query.budget_max.unwrap_or(0.0);
    let score = if max <= 0.0 {
        0.0
    } else {
        (60.0 - ((fee - max) / max) * 100.0).max(0.0)
    };
    DimensionScore::new(score, "Fee exceeds your budget")
}

/// Response-time fit: the preferred window (default 24h) tightened by the
/// urgency factor. Meeting the adjusted target scores 100; slower
/// responders decay proportionally with a floor of 20.
pub fn score_response_time(candidate: &CandidateProfile, query: &MatchQuery) -> DimensionScore {
    let preferred = query.preferred_response_hours.unwrap_or(24.0);
    let target = preferred * query.urgency.response_factor();
    let hours = candidate.response_hours();

    // A non-positive target carries no usable constraint
    if target <= 0.0 {
        return DimensionScore::new(80.0, "No response-time preference specified");
    }

    if hours <= target {
        DimensionScore::new(100.0, "Responds within your required window")
    } else {
        let score = ((target / hours) * 100.0).max(20.0);
        DimensionScore::new(
            score,
            format!("Typical response time {:.0}h, slower than requested", hours),
        )
    }
}

/// Track-record score from rating, success rate and review confidence.
///
/// Rating contributes up to 50, success rate up to 30 and review count
/// up to 20 (full confidence at 50 reviews), so the natural ceiling is
/// exactly 100.
pub fn score_performance(candidate: &CandidateProfile, _query: &MatchQuery) -> DimensionScore {
    let rating_component = (candidate.avg_rating / 5.0) * 50.0;
    let success_component = (candidate.success_rate / 100.0) * 30.0;
    let review_confidence = ((candidate.review_count as f64 / 50.0) * 20.0).min(20.0);

    let score = rating_component + success_component + review_confidence;

    let mut reasons = Vec::new();
    if candidate.avg_rating >= 4.5 {
        reasons.push(format!("Highly rated ({:.1}/5)", candidate.avg_rating));
    }
    if candidate.success_rate >= 90.0 {
        reasons.push(format!("Strong success rate ({:.0}%)", candidate.success_rate));
    }
    if candidate.review_count >= 25 {
        reasons.push(format!("Well reviewed ({} reviews)", candidate.review_count));
    }
    if reasons.is_empty() {
        reasons.push("Building a track record".to_string());
    }

    DimensionScore::with_reasons(score, reasons)
}

/// Availability and remaining capacity.
///
/// Unavailable candidates score a terminal 0 and are dropped by the
/// ranking filter. A zero max capacity means the provider does not track
/// a caseload cap and is treated as fully free.
pub fn score_availability(candidate: &CandidateProfile, _query: &MatchQuery) -> DimensionScore {
    if !candidate.is_available {
        return DimensionScore::new(0.0, "Currently unavailable");
    }
    if !candidate.accepting_new_clients {
        return DimensionScore::new(20.0, "Not accepting new clients");
    }

    let capacity_ratio = if candidate.max_capacity == 0 {
        1.0
    } else {
        1.0 - candidate.current_load as f64 / candidate.max_capacity as f64
    };

    if capacity_ratio <= 0.1 {
        DimensionScore::new(40.0, "Near capacity")
    } else if capacity_ratio >= 0.7 {
        DimensionScore::new(100.0, "Readily available")
    } else {
        DimensionScore::new(50.0 + capacity_ratio * 50.0, "Available for new cases")
    }
}

/// Years of experience against the complexity-dependent requirement
/// (complex 10y, moderate 5y, simple or unspecified 2y).
pub fn score_experience(candidate: &CandidateProfile, query: &MatchQuery) -> DimensionScore {
    let min_years = query.complexity.map(|c| c.min_years()).unwrap_or(2.0);
    let years = candidate.years_experience;

    if years >= 2.0 * min_years {
        DimensionScore::new(100.0, format!("Extensive experience ({:.0} years)", years))
    } else if years >= min_years {
        DimensionScore::new(80.0, format!("Experienced ({:.0} years)", years))
    } else if years >= min_years / 2.0 {
        DimensionScore::new(50.0, "Moderate experience for this case")
    } else {
        DimensionScore::new(30.0, "Limited experience for this case complexity")
    }
}
