//! Error types for the Extractor

use catalog_recognizer::RecognizerError;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractorError {
    /// The entity recognizer failed to initialize; fatal for the whole run
    #[error("Recognizer unavailable: {0}")]
    RecognizerUnavailable(String),

    /// Entity recognition failed for one document
    #[error("Recognizer error: {0}")]
    Recognizer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A worker task or field extractor died before producing its value
    #[error("Worker error: {0}")]
    Worker(String),
}

impl From<RecognizerError> for ExtractorError {
    fn from(e: RecognizerError) -> Self {
        if e.is_unavailable() {
            ExtractorError::RecognizerUnavailable(e.to_string())
        } else {
            ExtractorError::Recognizer(e.to_string())
        }
    }
}

impl ExtractorError {
    /// Whether the run must stop
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExtractorError::RecognizerUnavailable(_) | ExtractorError::Config(_))
    }
}
