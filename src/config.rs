use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::ScoringWeights;
use crate::error::EngineError;
use crate::tier::TierTable;

/// Engine configuration
///
/// The weight and tier threshold tables are configuration data rather
/// than code branches; both are validated eagerly when settings load, so
/// a bad table surfaces at startup instead of per request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub tiers: TierTable,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: ScoringWeights,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Loaded in order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables prefixed with PMATCH_
    ///    e.g. PMATCH_SCORING__WEIGHTS__LOCATION -> scoring.weights.location
    pub fn load() -> Result<Self, EngineError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("PMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Integrity checks on the configured tables: weights must sum to
    /// 100 and tier thresholds must monotonically tighten
    pub fn validate(&self) -> Result<(), EngineError> {
        self.scoring.weights.validate()?;
        self.tiers.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.scoring.weights.sum(), 100);
    }

    #[test]
    fn test_bad_weights_fail_validation() {
        let mut settings = Settings::default();
        settings.scoring.weights.performance = 50;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_tier_table_fails_validation() {
        let mut settings = Settings::default();
        settings.tiers.platinum.min_reviews = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
