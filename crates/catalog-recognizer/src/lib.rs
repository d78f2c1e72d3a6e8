//! Catalog Entity Recognizer Layer
//!
//! Pluggable entity recognizer implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `EntityRecognizer` trait from
//! `catalog-domain`. The extraction core never builds a recognizer itself: the
//! process calls [`load`] once, before any document is processed, and passes
//! the returned read-only handle to every worker.
//!
//! # Recognizers
//!
//! - `MockRecognizer`: Deterministic phrase table for testing
//! - `RuleRecognizer`: Offline capitalization and keyword heuristics
//! - `HttpRecognizer`: Remote NER service over HTTP
//!
//! # Examples
//!
//! ```
//! use catalog_recognizer::MockRecognizer;
//! use catalog_domain::traits::EntityRecognizer;
//! use catalog_domain::EntityLabel;
//!
//! let recognizer = MockRecognizer::new().with_entity("Jane Smith", EntityLabel::Person);
//! let entities = recognizer.recognize("Dr. Jane Smith will teach").unwrap();
//! assert_eq!(entities[0].start, 4);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod http;
pub mod rules;

use catalog_domain::traits::EntityRecognizer;
use catalog_domain::{Entity, EntityLabel};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

pub use config::{RecognizerConfig, RecognizerKind};
pub use http::HttpRecognizer;
pub use rules::RuleRecognizer;

/// A loaded recognizer, shared read-only across workers
pub type SharedRecognizer = Arc<dyn EntityRecognizer<Error = RecognizerError>>;

/// Errors that can occur during recognition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognizerError {
    /// The recognizer could not be initialized
    #[error("Recognizer unavailable: {0}")]
    Unavailable(String),

    /// A recognition call failed for one text
    #[error("Recognition request failed: {0}")]
    Request(String),

    /// The recognizer answered with something unusable
    #[error("Invalid recognizer response: {0}")]
    InvalidResponse(String),

    /// Invalid recognizer configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RecognizerError {
    /// Whether this error happened while loading the recognizer
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RecognizerError::Unavailable(_) | RecognizerError::Config(_))
    }
}

/// Load the recognizer described by `config`
///
/// This is the one-time initialization step of a run. A failure here means no
/// document can be meaningfully processed, so callers should abort.
pub async fn load(config: &RecognizerConfig) -> Result<SharedRecognizer, RecognizerError> {
    config.validate().map_err(RecognizerError::Config)?;

    let recognizer: SharedRecognizer = match config.kind {
        RecognizerKind::Rules => Arc::new(RuleRecognizer::new()),
        RecognizerKind::Http => {
            let recognizer =
                HttpRecognizer::connect(&config.endpoint, config.timeout(), config.max_retries).await?;
            info!("Connected to recognizer service at {}", recognizer.endpoint());
            Arc::new(recognizer)
        }
    };

    info!("Loaded entity recognizer '{}'", recognizer.name());
    Ok(recognizer)
}

/// Mock recognizer for deterministic testing
///
/// Every occurrence of a registered phrase becomes an entity with the
/// registered label. Overlapping matches keep the earliest, longest phrase.
///
/// # Examples
///
/// ```
/// use catalog_recognizer::MockRecognizer;
/// use catalog_domain::traits::EntityRecognizer;
/// use catalog_domain::EntityLabel;
///
/// let recognizer = MockRecognizer::new()
///     .with_entity("Stanford University", EntityLabel::Organization)
///     .failing_on("CORRUPT");
///
/// assert_eq!(recognizer.recognize("Welcome to Stanford University").unwrap().len(), 1);
/// assert!(recognizer.recognize("CORRUPT input").is_err());
/// assert_eq!(recognizer.call_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockRecognizer {
    phrases: Vec<(String, EntityLabel)>,
    fail_markers: Vec<String>,
    call_count: Arc<AtomicUsize>,
}

impl MockRecognizer {
    /// Create a recognizer that knows no entities
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a phrase to recognize
    pub fn with_entity(mut self, phrase: impl Into<String>, label: EntityLabel) -> Self {
        self.phrases.push((phrase.into(), label));
        self
    }

    /// Fail every call whose text contains `marker`
    pub fn failing_on(mut self, marker: impl Into<String>) -> Self {
        self.fail_markers.push(marker.into());
        self
    }

    /// Get the number of times recognize was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }
}

impl EntityRecognizer for MockRecognizer {
    type Error = RecognizerError;

    fn recognize(&self, text: &str) -> Result<Vec<Entity>, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(marker) = self.fail_markers.iter().find(|m| text.contains(m.as_str())) {
            return Err(RecognizerError::Request(format!("mock failure on '{}'", marker)));
        }

        let mut found: Vec<Entity> = self
            .phrases
            .iter()
            .flat_map(|(phrase, label)| {
                text.match_indices(phrase.as_str())
                    .map(move |(start, m)| Entity::new(m, label.clone(), start, start + m.len()))
            })
            .collect();

        found.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut entities: Vec<Entity> = Vec::with_capacity(found.len());
        for entity in found {
            if entities.last().is_some_and(|last| entity.start < last.end) {
                continue;
            }
            entities.push(entity);
        }

        Ok(entities)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_recognizer_no_entities() {
        let recognizer = MockRecognizer::new();
        assert!(recognizer.recognize("anything").unwrap().is_empty());
    }

    #[test]
    fn test_mock_recognizer_every_occurrence() {
        let recognizer = MockRecognizer::new().with_entity("Jane Smith", EntityLabel::Person);
        let text = "Jane Smith and Dr. Jane Smith";
        let entities = recognizer.recognize(text).unwrap();

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].start, 0);
        assert_eq!(entities[1].start, 19);
        assert_eq!(&text[entities[1].start..entities[1].end], "Jane Smith");
    }

    #[test]
    fn test_mock_recognizer_document_order() {
        let recognizer = MockRecognizer::new()
            .with_entity("Baker Hall", EntityLabel::Facility)
            .with_entity("Stanford University", EntityLabel::Organization);
        let entities = recognizer
            .recognize("Stanford University opened Baker Hall")
            .unwrap();

        assert_eq!(entities[0].label, EntityLabel::Organization);
        assert_eq!(entities[1].label, EntityLabel::Facility);
    }

    #[test]
    fn test_mock_recognizer_overlap_keeps_longest() {
        let recognizer = MockRecognizer::new()
            .with_entity("University", EntityLabel::Organization)
            .with_entity("University of Oslo", EntityLabel::Organization);
        let entities = recognizer.recognize("University of Oslo").unwrap();

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "University of Oslo");
    }

    #[test]
    fn test_mock_recognizer_failure_marker() {
        let recognizer = MockRecognizer::new().failing_on("BROKEN");
        let result = recognizer.recognize("a BROKEN document");
        assert!(matches!(result, Err(RecognizerError::Request(_))));
    }

    #[test]
    fn test_mock_recognizer_call_count_shared_by_clones() {
        let recognizer1 = MockRecognizer::new();
        let recognizer2 = recognizer1.clone();

        recognizer1.recognize("x").unwrap();
        recognizer2.recognize("y").unwrap();
        assert_eq!(recognizer1.call_count(), 2);

        recognizer1.reset_call_count();
        assert_eq!(recognizer2.call_count(), 0);
    }

    #[test]
    fn test_unavailable_classification() {
        assert!(RecognizerError::Unavailable("down".into()).is_unavailable());
        assert!(!RecognizerError::Request("timeout".into()).is_unavailable());
    }

    #[tokio::test]
    async fn test_load_rules_recognizer() {
        let recognizer = load(&RecognizerConfig::default()).await.unwrap();
        assert_eq!(recognizer.name(), "rules");
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_config() {
        let mut config = RecognizerConfig::default();
        config.kind = RecognizerKind::Http;
        config.endpoint = String::new();

        let result = load(&config).await;
        assert!(matches!(result, Err(RecognizerError::Config(_))));
    }
}
