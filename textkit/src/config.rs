//! Pipeline configuration

use serde::{Deserialize, Serialize};
use textkit_core::TextError;
use textkit_text::LengthUnit;

/// Settings consulted by pipeline validation steps.
///
/// Every field has a default, so a partial JSON document such as
/// `{"strict_url": true}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Strictness used by `require_email`
    pub strict_email: bool,
    /// Strictness used by `require_url`
    pub strict_url: bool,
    /// How `require_length` measures the value
    pub length_unit: LengthUnit,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strict_email: true,
            strict_url: false,
            length_unit: LengthUnit::Chars,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, TextError> {
        serde_json::from_str(json)
            .map_err(|e| TextError::custom(format!("Invalid pipeline config: {}", e)))
    }

    pub fn with_strict_email(mut self, strict: bool) -> Self {
        self.strict_email = strict;
        self
    }

    pub fn with_strict_url(mut self, strict: bool) -> Self {
        self.strict_url = strict;
        self
    }

    pub fn with_length_unit(mut self, unit: LengthUnit) -> Self {
        self.length_unit = unit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert!(config.strict_email);
        assert!(!config.strict_url);
        assert_eq!(config.length_unit, LengthUnit::Chars);
    }

    #[test]
    fn test_from_json_partial() {
        let config = PipelineConfig::from_json(r#"{"strict_url": true, "length_unit": "bytes"}"#).unwrap();
        assert!(config.strict_email);
        assert!(config.strict_url);
        assert_eq!(config.length_unit, LengthUnit::Bytes);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = PipelineConfig::from_json(r#"{"length_unit": "words"}"#).unwrap_err();
        assert_eq!(err.kind(), textkit_core::ErrorKind::Custom);
    }

    #[test]
    fn test_builder() {
        let config = PipelineConfig::new()
            .with_strict_email(false)
            .with_strict_url(true)
            .with_length_unit(LengthUnit::Bytes);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PipelineConfig::from_json(&json).unwrap(), config);
    }
}
