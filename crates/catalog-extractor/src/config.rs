//! Configuration for the Extractor

use catalog_domain::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// String placed between the values of a multi-valued field
    pub separator: String,

    /// Look for facility entities when the building pattern finds nothing
    pub building_entity_fallback: bool,

    /// Documents processed at the same time by the batch runner
    pub max_workers: usize,

    /// Longer documents are cut to this many bytes before extraction;
    /// `None` reads every document whole
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_document_bytes: Option<usize>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.separator.is_empty() {
            return Err("separator cannot be empty".to_string());
        }
        if self.max_workers == 0 {
            return Err("max_workers must be greater than 0".to_string());
        }
        if self.max_document_bytes == Some(0) {
            return Err("max_document_bytes must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Pattern-only preset: building names never come from the recognizer
    pub fn pattern_only() -> Self {
        Self {
            building_entity_fallback: false,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            building_entity_fallback: true,
            max_workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            max_document_bytes: None,
        }
    }
}
