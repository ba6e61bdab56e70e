//! Configuration management for `SecureCall` analytics

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Detection threshold configuration
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Detection threshold configuration.
///
/// Confidence values are percentages in `[0, 100]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Minimum confidence to classify a call as AI
    #[serde(default = "default_ai_threshold")]
    pub ai_threshold: u8,

    /// Confidence at which an AI classification is auto-flagged
    #[serde(default = "default_auto_flag_threshold")]
    pub auto_flag_threshold: u8,

    /// Lower bound of the manual review band
    #[serde(default = "default_review_band_low")]
    pub review_band_low: u8,

    /// Upper bound of the manual review band
    #[serde(default = "default_review_band_high")]
    pub review_band_high: u8,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows per page in call listings
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Whether caller identifiers are masked in output
    #[serde(default = "default_mask_caller_ids")]
    pub mask_caller_ids: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_ai_threshold() -> u8 {
    75
}

fn default_auto_flag_threshold() -> u8 {
    85
}

fn default_review_band_low() -> u8 {
    60
}

fn default_review_band_high() -> u8 {
    85
}

fn default_page_size() -> usize {
    50
}

fn default_mask_caller_ids() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            ai_threshold: default_ai_threshold(),
            auto_flag_threshold: default_auto_flag_threshold(),
            review_band_low: default_review_band_low(),
            review_band_high: default_review_band_high(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            mask_caller_ids: default_mask_caller_ids(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detection: DetectionConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DetectionConfig {
    /// Check threshold invariants
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold exceeds 100 or the review band is
    /// inverted.
    pub fn validate(&self) -> crate::Result<()> {
        for (field, value) in [
            ("ai_threshold", self.ai_threshold),
            ("auto_flag_threshold", self.auto_flag_threshold),
            ("review_band_low", self.review_band_low),
            ("review_band_high", self.review_band_high),
        ] {
            if value > 100 {
                return Err(crate::Error::Validation {
                    field: field.to_string(),
                    message: format!("confidence threshold {value} exceeds 100"),
                });
            }
        }

        if self.review_band_low > self.review_band_high {
            return Err(crate::Error::Validation {
                field: "review_band_low".to_string(),
                message: format!(
                    "review band is inverted ({} > {})",
                    self.review_band_low, self.review_band_high
                ),
            });
        }

        Ok(())
    }

    /// Whether a confidence value falls in the manual review band
    #[must_use]
    pub const fn in_review_band(&self, confidence: u8) -> bool {
        confidence >= self.review_band_low && confidence <= self.review_band_high
    }
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("securecall").required(false))
            .add_source(config::Environment::with_prefix("SECURECALL").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config.detection.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path, with defaults for
    /// anything the file omits
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config.detection.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_thresholds() {
        let config = Config::default();

        assert_eq!(config.detection.ai_threshold, 75);
        assert_eq!(config.detection.auto_flag_threshold, 85);
        assert_eq!(config.detection.review_band_low, 60);
        assert_eq!(config.detection.review_band_high, 85);
    }

    #[test]
    fn test_default_display_and_logging() {
        let config = Config::default();

        assert_eq!(config.display.page_size, 50);
        assert!(config.display.mask_caller_ids);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_detection_validate_accepts_defaults() {
        assert!(DetectionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_detection_validate_rejects_over_100() {
        let detection = DetectionConfig {
            ai_threshold: 101,
            ..DetectionConfig::default()
        };

        let result = detection.validate();
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("ai_threshold"));
    }

    #[test]
    fn test_detection_validate_rejects_inverted_band() {
        let detection = DetectionConfig {
            review_band_low: 90,
            review_band_high: 60,
            ..DetectionConfig::default()
        };

        assert!(detection.validate().is_err());
    }

    #[test]
    fn test_in_review_band_boundaries() {
        let detection = DetectionConfig::default();

        assert!(!detection.in_review_band(59));
        assert!(detection.in_review_band(60));
        assert!(detection.in_review_band(85));
        assert!(!detection.in_review_band(86));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(
            deserialized.detection.ai_threshold,
            config.detection.ai_threshold
        );
        assert_eq!(deserialized.display.page_size, config.display.page_size);
    }

    #[test]
    fn test_partial_file_gets_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[detection]\nai_threshold = 80").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.detection.ai_threshold, 80);
        // Everything the file omits keeps its default
        assert_eq!(config.detection.auto_flag_threshold, 85);
        assert_eq!(config.display.page_size, 50);
    }

    #[test]
    fn test_invalid_file_thresholds_rejected() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[detection]\nreview_band_low = 95\nreview_band_high = 70").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }
}
