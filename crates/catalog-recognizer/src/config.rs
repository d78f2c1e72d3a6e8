//! Configuration for recognizer loading

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which recognizer implementation to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerKind {
    /// Offline heuristics, no external service
    #[default]
    Rules,
    /// Remote NER service
    Http,
}

/// Recognizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Implementation to load
    pub kind: RecognizerKind,

    /// Base URL of the NER service (http only)
    pub endpoint: String,

    /// Per-request timeout in seconds (http only)
    pub timeout_secs: u64,

    /// Attempts per document before giving up, 1 to 10 (http only)
    pub max_retries: u32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            kind: RecognizerKind::Rules,
            endpoint: crate::http::DEFAULT_ENDPOINT.to_string(),
            timeout_secs: crate::http::DEFAULT_TIMEOUT_SECS,
            max_retries: crate::http::DEFAULT_MAX_RETRIES,
        }
    }
}

impl RecognizerConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.kind == RecognizerKind::Http {
            if self.endpoint.trim().is_empty() {
                return Err("endpoint must be set for the http recognizer".to_string());
            }
            if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
                return Err(format!("endpoint '{}' is not an http(s) URL", self.endpoint));
            }
            if self.timeout_secs == 0 {
                return Err("timeout_secs must be greater than 0".to_string());
            }
            if self.max_retries == 0 {
                return Err("max_retries must be greater than 0".to_string());
            }
            if self.max_retries > crate::http::MAX_RETRIES_LIMIT {
                return Err(format!(
                    "max_retries must be at most {}",
                    crate::http::MAX_RETRIES_LIMIT
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RecognizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_http_requires_url() {
        let config = RecognizerConfig {
            kind: RecognizerKind::Http,
            endpoint: "localhost:8080".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_http_retries_bounded() {
        let mut config = RecognizerConfig {
            kind: RecognizerKind::Http,
            max_retries: crate::http::MAX_RETRIES_LIMIT,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.max_retries = 64;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rules_ignores_http_settings() {
        let config = RecognizerConfig {
            kind: RecognizerKind::Rules,
            endpoint: String::new(),
            timeout_secs: 0,
            max_retries: 0,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RecognizerConfig = toml::from_str("kind = \"http\"").unwrap();
        assert_eq!(config.kind, RecognizerKind::Http);
        assert_eq!(config.max_retries, crate::http::DEFAULT_MAX_RETRIES);
    }
}
