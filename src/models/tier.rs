use serde::{Deserialize, Serialize};

use crate::models::domain::VerificationLevel;

/// Ordinal qualification tier derived from lifetime performance metrics
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TierLevel {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl TierLevel {
    /// All tiers ordered from lowest to highest
    pub const ALL: [TierLevel; 4] = [
        TierLevel::Bronze,
        TierLevel::Silver,
        TierLevel::Gold,
        TierLevel::Platinum,
    ];

    /// The tier above this one, or None at the ceiling
    pub fn next(self) -> Option<TierLevel> {
        match self {
            TierLevel::Bronze => Some(TierLevel::Silver),
            TierLevel::Silver => Some(TierLevel::Gold),
            TierLevel::Gold => Some(TierLevel::Platinum),
            TierLevel::Platinum => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TierLevel::Bronze => "Bronze Provider",
            TierLevel::Silver => "Silver Provider",
            TierLevel::Gold => "Gold Provider",
            TierLevel::Platinum => "Platinum Provider",
        }
    }

    pub fn localized_name(self, locale: crate::core::explain::Locale) -> &'static str {
        use crate::core::explain::Locale;
        match (self, locale) {
            (TierLevel::Bronze, Locale::En) => "Bronze Provider",
            (TierLevel::Silver, Locale::En) => "Silver Provider",
            (TierLevel::Gold, Locale::En) => "Gold Provider",
            (TierLevel::Platinum, Locale::En) => "Platinum Provider",
            (TierLevel::Bronze, Locale::Es) => "Proveedor Bronce",
            (TierLevel::Silver, Locale::Es) => "Proveedor Plata",
            (TierLevel::Gold, Locale::Es) => "Proveedor Oro",
            (TierLevel::Platinum, Locale::Es) => "Proveedor Platino",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TierLevel::Bronze => "medal-bronze",
            TierLevel::Silver => "medal-silver",
            TierLevel::Gold => "medal-gold",
            TierLevel::Platinum => "medal-platinum",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            TierLevel::Bronze => "#CD7F32",
            TierLevel::Silver => "#C0C0C0",
            TierLevel::Gold => "#FFD700",
            TierLevel::Platinum => "#E5E4E2",
        }
    }

    /// Benefits surfaced to providers holding this tier
    pub fn benefits(self) -> Vec<String> {
        let entries: &[&str] = match self {
            TierLevel::Bronze => &["Profile listing", "Standard search placement"],
            TierLevel::Silver => &[
                "Profile listing",
                "Priority search placement",
                "Silver badge on profile",
            ],
            TierLevel::Gold => &[
                "Profile listing",
                "Priority search placement",
                "Gold badge on profile",
                "Featured in category pages",
                "Reduced platform commission",
            ],
            TierLevel::Platinum => &[
                "Profile listing",
                "Top search placement",
                "Platinum badge on profile",
                "Featured in category pages",
                "Lowest platform commission",
                "Dedicated account support",
            ],
        };
        entries.iter().map(|s| s.to_string()).collect()
    }
}

/// Minimum (or, for response time, maximum) thresholds a provider must
/// meet simultaneously to hold a tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierRequirements {
    #[serde(rename = "minConsultations")]
    pub min_consultations: u32,
    #[serde(rename = "minRating")]
    pub min_rating: f64,
    #[serde(rename = "minReviews")]
    pub min_reviews: u32,
    #[serde(rename = "minYearsExperience")]
    pub min_years_experience: f64,
    #[serde(rename = "minCompletedCases")]
    pub min_completed_cases: u32,
    #[serde(rename = "minSuccessRate")]
    pub min_success_rate: f64,
    #[serde(rename = "maxResponseHours")]
    pub max_response_hours: f64,
    #[serde(rename = "minVerification")]
    pub min_verification: VerificationLevel,
}

/// Snapshot of one provider's lifetime performance, supplied by the
/// data-access collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderMetrics {
    #[serde(rename = "providerId")]
    pub provider_id: String,
    pub consultations: u32,
    #[serde(rename = "avgRating")]
    pub avg_rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
    #[serde(rename = "yearsExperience")]
    pub years_experience: f64,
    #[serde(rename = "completedCases")]
    pub completed_cases: u32,
    #[serde(rename = "successRate")]
    pub success_rate: f64,
    #[serde(rename = "avgResponseHours")]
    pub avg_response_hours: f64,
    pub verification: VerificationLevel,
}

/// Progress on one metric toward the next tier's threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricProgress {
    pub metric: String,
    pub current: f64,
    pub required: f64,
    pub met: bool,
}

/// Result of a tier evaluation: current standing plus granular progress
/// toward the next tier (or against the ceiling tier's own thresholds)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierProgress {
    #[serde(rename = "currentTier")]
    pub current_tier: TierLevel,
    #[serde(rename = "nextTier")]
    pub next_tier: Option<TierLevel>,
    pub requirements: Vec<MetricProgress>,
    #[serde(rename = "progressPct")]
    pub progress_pct: f64,
    pub benefits: Vec<String>,
}

/// Persisted badge record representing an awarded tier
///
/// Owned by the external badge store; this engine only decides whether a
/// record needs creating or updating and what the new values should be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    #[serde(rename = "providerId")]
    pub provider_id: String,
    #[serde(rename = "badgeType")]
    pub badge_type: String,
    pub name: String,
    #[serde(rename = "localizedName")]
    pub localized_name: String,
    pub icon: String,
    pub color: String,
    pub tier: TierLevel,
    #[serde(rename = "awardedAt")]
    pub awarded_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(TierLevel::Platinum > TierLevel::Gold);
        assert!(TierLevel::Gold > TierLevel::Silver);
        assert!(TierLevel::Silver > TierLevel::Bronze);
    }

    #[test]
    fn test_tier_next() {
        assert_eq!(TierLevel::Bronze.next(), Some(TierLevel::Silver));
        assert_eq!(TierLevel::Gold.next(), Some(TierLevel::Platinum));
        assert_eq!(TierLevel::Platinum.next(), None);
    }

    #[test]
    fn test_tier_benefits_grow_with_level() {
        assert!(TierLevel::Platinum.benefits().len() > TierLevel::Bronze.benefits().len());
    }
}
