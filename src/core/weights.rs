use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::EngineError;
use crate::models::MatchQuery;

/// Per-dimension aggregation weights
///
/// The weights are integer percentages and must sum to exactly 100; the
/// invariant is validated eagerly when a `Ranker` is constructed, never
/// per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_specialization_weight")]
    pub specialization: u32,
    #[serde(default = "default_performance_weight")]
    pub performance: u32,
    #[serde(default = "default_availability_weight")]
    pub availability: u32,
    #[serde(default = "default_budget_weight")]
    pub budget: u32,
    #[serde(default = "default_location_weight")]
    pub location: u32,
    #[serde(default = "default_language_weight")]
    pub language: u32,
    #[serde(rename = "responseTime", default = "default_response_time_weight")]
    pub response_time: u32,
    #[serde(default = "default_experience_weight")]
    pub experience: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            specialization: default_specialization_weight(),
            performance: default_performance_weight(),
            availability: default_availability_weight(),
            budget: default_budget_weight(),
            location: default_location_weight(),
            language: default_language_weight(),
            response_time: default_response_time_weight(),
            experience: default_experience_weight(),
        }
    }
}

fn default_specialization_weight() -> u32 { 25 }
fn default_performance_weight() -> u32 { 20 }
fn default_availability_weight() -> u32 { 15 }
fn default_budget_weight() -> u32 { 15 }
fn default_location_weight() -> u32 { 10 }
fn default_language_weight() -> u32 { 8 }
fn default_response_time_weight() -> u32 { 5 }
fn default_experience_weight() -> u32 { 2 }

impl ScoringWeights {
    pub fn sum(&self) -> u32 {
        self.specialization
            + self.performance
            + self.availability
            + self.budget
            + self.location
            + self.language
            + self.response_time
            + self.experience
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let sum = self.sum();
        if sum != 100 {
            return Err(EngineError::InvalidWeights(sum));
        }
        Ok(())
    }
}

/// Fixed mapping from a query's service-type hint to the specialization
/// tags it implies
const SERVICE_TYPE_TAGS: &[(&str, &[&str])] = &[
    ("immigration", &["immigration-law", "visa-applications"]),
    ("business", &["corporate-law", "contracts", "business-formation"]),
    ("tax", &["tax-law", "accounting"]),
    ("family", &["family-law", "mediation"]),
    ("real-estate", &["real-estate-law", "property-contracts"]),
    ("employment", &["employment-law", "labor-disputes"]),
    ("intellectual-property", &["intellectual-property", "trademarks"]),
];

/// Derive the required specialization tag set for a query: the tags
/// implied by the service-type hint unioned with any explicit
/// specialization. May be empty, which scores neutrally.
pub fn required_specializations(query: &MatchQuery) -> HashSet<String> {
    let mut required = HashSet::new();

    if let Some(service_type) = &query.service_type {
        let key = service_type.to_lowercase();
        if let Some((_, tags)) = SERVICE_TYPE_TAGS.iter().find(|(name, _)| *name == key) {
            required.extend(tags.iter().map(|t| t.to_string()));
        }
    }

    if let Some(specialization) = &query.specialization {
        required.insert(specialization.to_lowercase());
    }

    required
}

/// Fixed symmetric adjacency between service regions
const ADJACENT_REGIONS: &[(&str, &str)] = &[
    ("northeast", "midwest"),
    ("northeast", "southeast"),
    ("southeast", "midwest"),
    ("southeast", "southwest"),
    ("midwest", "southwest"),
    ("midwest", "west"),
    ("southwest", "west"),
    ("west", "northwest"),
    ("midwest", "northwest"),
];

/// Whether two regions are adjacent per the fixed table (symmetric)
pub fn regions_adjacent(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    ADJACENT_REGIONS
        .iter()
        .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
}
