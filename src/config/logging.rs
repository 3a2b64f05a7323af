//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// Include the event target (module path) in output
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LoggingConfig {
    /// Check if logs are emitted as JSON
    pub fn is_json(&self) -> bool {
        self.format == LogFormat::Json
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("LOGGING__LEVEL"));
        }
        EnvFilter::try_new(&self.level)
            .map_err(|e| ValidationError::InvalidLogLevel(e.to_string()))?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            with_target: default_with_target(),
        }
    }
}

fn default_level() -> String {
    "info,quiz_question=debug".to_string()
}

fn default_with_target() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info,quiz_question=debug");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.with_target);
        assert!(!config.is_json());
    }

    #[test]
    fn test_logging_config_deserialization() {
        let json = r#"{ "level": "warn", "format": "json", "with_target": false }"#;

        let config: LoggingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.level, "warn");
        assert!(config.is_json());
        assert!(!config.with_target);
    }

    #[test]
    fn test_logging_config_partial_deserialization_uses_defaults() {
        let config: LoggingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.level, "info,quiz_question=debug");
        assert!(config.with_target);
    }

    #[test]
    fn test_validation_accepts_default_level() {
        assert!(LoggingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_level() {
        let config = LoggingConfig {
            level: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_validation_invalid_level() {
        let config = LoggingConfig {
            level: "quiz_question=loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }
}
