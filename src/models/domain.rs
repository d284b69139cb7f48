use serde::{Deserialize, Serialize};
use validator::Validate;

/// Provider profile eligible for matching
///
/// A read-only snapshot supplied per matching request; the engine never
/// mutates it. Missing optional fields fall back to safe defaults during
/// scoring (response time 48h, verification "none", empty tag sets).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(rename = "providerId")]
    pub provider_id: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(rename = "consultationFee", default)]
    pub consultation_fee: Option<f64>,
    #[serde(rename = "hourlyRate", default)]
    pub hourly_rate: Option<f64>,
    #[serde(rename = "avgResponseHours", default)]
    pub avg_response_hours: Option<f64>,
    #[serde(rename = "avgRating", default)]
    pub avg_rating: f64,
    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,
    #[serde(rename = "completedCases", default)]
    pub completed_cases: u32,
    #[serde(rename = "successRate", default)]
    pub success_rate: f64,
    #[serde(default)]
    pub verification: VerificationLevel,
    #[serde(rename = "isAvailable", default = "default_true")]
    pub is_available: bool,
    #[serde(rename = "acceptingNewClients", default = "default_true")]
    pub accepting_new_clients: bool,
    #[serde(rename = "isFeatured", default)]
    pub is_featured: bool,
    #[serde(rename = "yearsExperience", default)]
    pub years_experience: f64,
    #[serde(rename = "currentLoad", default)]
    pub current_load: u32,
    #[serde(rename = "maxCapacity", default)]
    pub max_capacity: u32,
}

impl CandidateProfile {
    /// Average response time with the 48h fallback for unknown providers
    pub fn response_hours(&self) -> f64 {
        self.avg_response_hours.unwrap_or(48.0)
    }

    /// Fee used for budget scoring: consultation fee, else hourly rate, else 0
    pub fn effective_fee(&self) -> f64 {
        self.consultation_fee.or(self.hourly_rate).unwrap_or(0.0)
    }
}

fn default_true() -> bool {
    true
}

/// A client's matching request
///
/// Every field except the result limit is optional; absent fields yield
/// neutral dimension scores rather than errors.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchQuery {
    #[serde(rename = "serviceType", default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(rename = "budgetMin", default)]
    pub budget_min: Option<f64>,
    #[serde(rename = "budgetMax", default)]
    pub budget_max: Option<f64>,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub complexity: Option<CaseComplexity>,
    #[serde(rename = "preferredResponseHours", default)]
    pub preferred_response_hours: Option<f64>,
    #[serde(rename = "preferVerified", default)]
    pub prefer_verified: bool,
    #[serde(rename = "preferFeatured", default)]
    pub prefer_featured: bool,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

impl Default for MatchQuery {
    fn default() -> Self {
        Self {
            service_type: None,
            specialization: None,
            region: None,
            languages: vec![],
            budget_min: None,
            budget_max: None,
            urgency: Urgency::Standard,
            complexity: None,
            preferred_response_hours: None,
            prefer_verified: false,
            prefer_featured: false,
            limit: default_limit(),
        }
    }
}

/// How quickly the client needs a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Standard,
    Urgent,
    Express,
}

impl Urgency {
    /// Multiplier applied to the preferred response-time target
    pub fn response_factor(self) -> f64 {
        match self {
            Urgency::Standard => 1.0,
            Urgency::Urgent => 0.5,
            Urgency::Express => 0.25,
        }
    }
}

/// Desired case complexity, driving the experience requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseComplexity {
    Simple,
    Moderate,
    Complex,
}

impl CaseComplexity {
    /// Minimum years of experience expected for this complexity
    pub fn min_years(self) -> f64 {
        match self {
            CaseComplexity::Simple => 2.0,
            CaseComplexity::Moderate => 5.0,
            CaseComplexity::Complex => 10.0,
        }
    }
}

/// Ordinal trust level of a provider's verification
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VerificationLevel {
    #[default]
    None,
    Basic,
    Identity,
    Professional,
    Enhanced,
}

impl VerificationLevel {
    pub fn is_verified(self) -> bool {
        self != VerificationLevel::None
    }
}

/// Score for a single matching criterion: value in [0, 100] plus the
/// human-readable reasons behind it. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: f64,
    pub reasons: Vec<String>,
}

impl DimensionScore {
    pub fn new(score: f64, reason: impl Into<String>) -> Self {
        Self {
            score,
            reasons: vec![reason.into()],
        }
    }

    pub fn with_reasons(score: f64, reasons: Vec<String>) -> Self {
        Self { score, reasons }
    }
}

/// Per-dimension breakdown of a final match score, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub specialization: u32,
    pub performance: u32,
    pub availability: u32,
    pub budget: u32,
    pub location: u32,
    pub language: u32,
    #[serde(rename = "responseTime")]
    pub response_time: u32,
    pub experience: u32,
}

/// Four-band classification of a final aggregated score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    Excellent,
    Good,
    Fair,
    Low,
}

impl CompatibilityLevel {
    /// Deterministic, non-overlapping banding of the (post-bonus) score
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            CompatibilityLevel::Excellent
        } else if score >= 60.0 {
            CompatibilityLevel::Good
        } else if score >= 40.0 {
            CompatibilityLevel::Fair
        } else {
            CompatibilityLevel::Low
        }
    }
}

/// One ranked candidate with its score, breakdown and top reasons
///
/// The final score may exceed 100 after multiplicative bonuses; the engine
/// deliberately does not clamp it so that rankings stay fine-grained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "providerId")]
    pub provider_id: String,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub reasons: Vec<String>,
    pub compatibility: CompatibilityLevel,
}
