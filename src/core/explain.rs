use serde::{Deserialize, Serialize};

use crate::models::{CompatibilityLevel, MatchResult};

/// Display locale for explanations and badge names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// Localized, display-ready view of a match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
}

/// Render a match result for display. Pure and stateless: no I/O, the
/// same result and locale always produce the same explanation.
pub fn build_explanation(result: &MatchResult, locale: Locale) -> Explanation {
    let title = title_for(result.compatibility, locale).to_string();
    let description = match locale {
        Locale::En => format!(
            "This provider scored {:.0} out of 100 against your request.",
            result.score.min(100.0)
        ),
        Locale::Es => format!(
            "Este proveedor obtuvo {:.0} de 100 puntos para tu solicitud.",
            result.score.min(100.0)
        ),
    };

    Explanation {
        title,
        description,
        highlights: result.reasons.clone(),
    }
}

fn title_for(level: CompatibilityLevel, locale: Locale) -> &'static str {
    match (level, locale) {
        (CompatibilityLevel::Excellent, Locale::En) => "Excellent match",
        (CompatibilityLevel::Good, Locale::En) => "Good match",
        (CompatibilityLevel::Fair, Locale::En) => "Fair match",
        (CompatibilityLevel::Low, Locale::En) => "Limited match",
        (CompatibilityLevel::Excellent, Locale::Es) => "Compatibilidad excelente",
        (CompatibilityLevel::Good, Locale::Es) => "Buena compatibilidad",
        (CompatibilityLevel::Fair, Locale::Es) => "Compatibilidad aceptable",
        (CompatibilityLevel::Low, Locale::Es) => "Compatibilidad limitada",
    }
}
