//! Adapter configuration
//!
//! Loaded from a JSON file. Every field is optional; missing fields take the
//! defaults below and the result is validated before use.
//!
//! ```json
//! {
//!   "numeric_order": ["short", "long", "int", "float", "double"],
//!   "ellipse_vertices": 30,
//!   "fallback_content_type": "DATA",
//!   "releasability_merge": "legacy",
//!   "log_level": "info"
//! }
//! ```

mod errors;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::convert::ReleasabilityMerge;
use crate::geometry::{DEFAULT_ELLIPSE_VERTICES, MAX_ELLIPSE_VERTICES};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::query::{NumericKind, NumericPolicy};

pub use errors::{ConfigError, ConfigResult};

/// Content-type name given to decoded records without a type-specific section
pub const DEFAULT_FALLBACK_CONTENT_TYPE: &str = "DATA";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Order in which numeric literal kinds are tried
    #[serde(default = "default_numeric_order")]
    pub numeric_order: Vec<NumericKind>,

    /// Vertex count of the ellipse approximation
    #[serde(default = "default_ellipse_vertices")]
    pub ellipse_vertices: usize,

    /// Content-type name used when decoding finds no type-specific section
    #[serde(default = "default_fallback_content_type")]
    pub fallback_content_type: String,

    /// How releasability values from several security sections combine
    #[serde(default)]
    pub releasability_merge: ReleasabilityMerge,

    /// Minimum log severity (trace, info, warn, error, fatal)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_numeric_order() -> Vec<NumericKind> {
    NumericPolicy::default().order().to_vec()
}
fn default_ellipse_vertices() -> usize {
    DEFAULT_ELLIPSE_VERTICES
}
fn default_fallback_content_type() -> String {
    DEFAULT_FALLBACK_CONTENT_TYPE.to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            numeric_order: default_numeric_order(),
            ellipse_vertices: default_ellipse_vertices(),
            fallback_content_type: default_fallback_content_type(),
            releasability_merge: ReleasabilityMerge::default(),
            log_level: default_log_level(),
        }
    }
}

impl AdapterConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_json(&content)?;
        log_event_with_fields(
            Event::ConfigLoaded,
            &[("path", &path.display().to_string())],
        );
        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: AdapterConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.numeric_order.is_empty() {
            return Err(ConfigError::invalid(
                "numeric_order",
                "at least one numeric kind is required",
            ));
        }
        if !(3..=MAX_ELLIPSE_VERTICES).contains(&self.ellipse_vertices) {
            return Err(ConfigError::invalid(
                "ellipse_vertices",
                format!(
                    "must be between 3 and {}, got {}",
                    MAX_ELLIPSE_VERTICES, self.ellipse_vertices
                ),
            ));
        }
        if self.fallback_content_type.trim().is_empty() {
            return Err(ConfigError::invalid(
                "fallback_content_type",
                "must not be empty",
            ));
        }
        if Severity::from_name(&self.log_level).is_none() {
            return Err(ConfigError::invalid(
                "log_level",
                format!("unknown level '{}'", self.log_level),
            ));
        }
        Ok(())
    }

    pub fn numeric_policy(&self) -> NumericPolicy {
        NumericPolicy::new(self.numeric_order.clone())
    }

    pub fn log_severity(&self) -> Severity {
        Severity::from_name(&self.log_level).unwrap_or(Severity::Info)
    }

    /// Sets the process-wide log threshold from `log_level`
    pub fn apply_logging(&self) {
        Logger::set_min_severity(self.log_severity());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = AdapterConfig::from_json("{}").unwrap();
        assert_eq!(config, AdapterConfig::default());
        assert_eq!(config.ellipse_vertices, 30);
        assert_eq!(config.fallback_content_type, "DATA");
        assert_eq!(config.releasability_merge, ReleasabilityMerge::Legacy);
        assert_eq!(config.numeric_policy(), NumericPolicy::default());
    }

    #[test]
    fn test_overrides() {
        let config = AdapterConfig::from_json(
            r#"{"numeric_order":["int","double"],"releasability_merge":"intersection","log_level":"warn"}"#,
        )
        .unwrap();
        assert_eq!(
            config.numeric_order,
            vec![NumericKind::Int, NumericKind::Double]
        );
        assert_eq!(config.releasability_merge, ReleasabilityMerge::Intersection);
        assert_eq!(config.log_severity(), Severity::Warn);
    }

    #[test]
    fn test_validation() {
        let err = AdapterConfig::from_json(r#"{"numeric_order":[]}"#).unwrap_err();
        assert_eq!(err.code(), "BQS_CONFIG_INVALID");

        let err = AdapterConfig::from_json(r#"{"ellipse_vertices":2}"#).unwrap_err();
        assert!(err.to_string().contains("ellipse_vertices"));

        let err = AdapterConfig::from_json(r#"{"ellipse_vertices":10001}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ellipse_vertices", .. }));

        let err =
            AdapterConfig::from_json(r#"{"ellipse_vertices":18446744073709551615}"#).unwrap_err();
        assert_eq!(err.code(), "BQS_CONFIG_INVALID");

        let err = AdapterConfig::from_json(r#"{"log_level":"chatty"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "log_level", .. }));

        let err = AdapterConfig::from_json(r#"{"numeric_order":["quad"]}"#).unwrap_err();
        assert_eq!(err.code(), "BQS_CONFIG_PARSE");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"fallback_content_type":"DOCUMENT"}}"#).unwrap();

        let config = AdapterConfig::load(file.path()).unwrap();
        assert_eq!(config.fallback_content_type, "DOCUMENT");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AdapterConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), "BQS_CONFIG_READ");
    }
}
