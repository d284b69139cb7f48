// Unit tests for the provider matching engine

use provider_match::core::scorers::{
    score_availability, score_budget, score_experience, score_language, score_location,
    score_performance, score_response_time, score_specialization,
};
use provider_match::core::{aggregate, ScoringWeights};
use provider_match::models::{CandidateProfile, MatchQuery, Urgency, VerificationLevel};

fn candidate(id: &str) -> CandidateProfile {
    CandidateProfile {
        provider_id: id.to_string(),
        specializations: vec!["family-law".to_string(), "mediation".to_string()],
        languages: vec!["English".to_string(), "French".to_string()],
        region: Some("northeast".to_string()),
        consultation_fee: Some(180.0),
        hourly_rate: None,
        avg_response_hours: Some(8.0),
        avg_rating: 4.2,
        review_count: 18,
        completed_cases: 25,
        success_rate: 82.0,
        verification: VerificationLevel::Professional,
        is_available: true,
        accepting_new_clients: true,
        is_featured: false,
        years_experience: 7.0,
        current_load: 3,
        max_capacity: 12,
    }
}

#[test]
fn test_specialization_ratio_monotonic() {
    // Required set from "business" has three tags
    let query = MatchQuery {
        service_type: Some("business".to_string()),
        ..Default::default()
    };

    let tags = ["corporate-law", "contracts", "business-formation"];
    let mut previous = -1.0;
    for matched in 0..=tags.len() {
        let mut c = candidate("p");
        c.specializations = tags[..matched].iter().map(|t| t.to_string()).collect();
        let score = score_specialization(&c, &query).score;
        assert!(
            score >= previous,
            "score dropped from {} to {} at {} matches",
            previous,
            score,
            matched
        );
        previous = score;
    }
}

#[test]
fn test_specialization_banding_edges() {
    let query = MatchQuery {
        service_type: Some("business".to_string()),
        ..Default::default()
    };

    let mut none = candidate("p");
    none.specializations = vec![];
    assert_eq!(score_specialization(&none, &query).score, 10.0);

    let mut all = candidate("p");
    all.specializations = vec![
        "corporate-law".to_string(),
        "contracts".to_string(),
        "business-formation".to_string(),
    ];
    assert_eq!(score_specialization(&all, &query).score, 100.0);
}

#[test]
fn test_experience_monotonic_in_years() {
    let query = MatchQuery::default();
    let mut previous = -1.0;
    for years in [0.0, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 10.0, 30.0] {
        let mut c = candidate("p");
        c.years_experience = years;
        let score = score_experience(&c, &query).score;
        assert!(score >= previous, "experience score dropped at {} years", years);
        previous = score;
    }
}

#[test]
fn test_location_neutral_without_preference() {
    let result = score_location(&candidate("p"), &MatchQuery::default());
    assert_eq!(result.score, 80.0);
    assert!(result.reasons[0].contains("No region preference"));
}

#[test]
fn test_language_case_insensitive() {
    let query = MatchQuery {
        languages: vec!["ENGLISH".to_string(), "french".to_string()],
        ..Default::default()
    };
    assert_eq!(score_language(&candidate("p"), &query).score, 100.0);
}

#[test]
fn test_budget_fee_falls_back_to_hourly_rate() {
    let mut hourly = candidate("p");
    hourly.consultation_fee = None;
    hourly.hourly_rate = Some(550.0);

    let query = MatchQuery {
        budget_min: Some(100.0),
        budget_max: Some(200.0),
        ..Default::default()
    };
    // 550 far exceeds the 200 max: 60 - (350/200)*100 clamps to 0
    assert_eq!(score_budget(&hourly, &query).score, 0.0);
}

#[test]
fn test_budget_zero_fee_scores_below_range() {
    let mut free = candidate("p");
    free.consultation_fee = None;
    free.hourly_rate = None;

    let query = MatchQuery {
        budget_min: Some(100.0),
        budget_max: Some(200.0),
        ..Default::default()
    };
    assert_eq!(score_budget(&free, &query).score, 90.0);
}

#[test]
fn test_response_time_express_urgency() {
    let query = MatchQuery {
        urgency: Urgency::Express,
        ..Default::default()
    };
    // target 6h, candidate 8h -> max(20, 6/8*100) = 75
    assert_eq!(score_response_time(&candidate("p"), &query).score, 75.0);
}

#[test]
fn test_performance_zero_history() {
    let mut fresh = candidate("p");
    fresh.avg_rating = 0.0;
    fresh.review_count = 0;
    fresh.success_rate = 0.0;
    let result = score_performance(&fresh, &MatchQuery::default());
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_availability_full_pipeline_order() {
    // Unavailable wins over not-accepting
    let mut c = candidate("p");
    c.is_available = false;
    c.accepting_new_clients = false;
    assert_eq!(score_availability(&c, &MatchQuery::default()).score, 0.0);
}

#[test]
fn test_aggregate_weighted_average_matches_hand_computation() {
    let c = candidate("p");
    let query = MatchQuery::default();
    let weights = ScoringWeights::default();

    let expected = (score_specialization(&c, &query).score * 25.0
        + score_performance(&c, &query).score * 20.0
        + score_availability(&c, &query).score * 15.0
        + score_budget(&c, &query).score * 15.0
        + score_location(&c, &query).score * 10.0
        + score_language(&c, &query).score * 8.0
        + score_response_time(&c, &query).score * 5.0
        + score_experience(&c, &query).score * 2.0)
        / 100.0;

    let result = aggregate(&c, &query, &weights);
    assert!((result.score - expected).abs() < 1e-9);
}

#[test]
fn test_match_result_serializes_camel_case() {
    let result = aggregate(&candidate("p"), &MatchQuery::default(), &ScoringWeights::default());
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("providerId").is_some());
    assert!(json["breakdown"].get("responseTime").is_some());
}
