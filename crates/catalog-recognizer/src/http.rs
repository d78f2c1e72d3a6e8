//! HTTP Recognizer Implementation
//!
//! Talks to a remote named-entity recognition service, such as a statistical model
//! behind a small web wrapper.
//!
//! # Protocol
//!
//! - `POST {endpoint}/ent` with body `{"text": "..."}`
//! - Response: JSON array of `{"start": n, "end": n, "label": "ORG"}` where
//!   offsets count characters, not bytes
//!
//! # Features
//!
//! - Health check at load time
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use catalog_recognizer::HttpRecognizer;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), catalog_recognizer::RecognizerError> {
//! let recognizer = HttpRecognizer::connect("http://localhost:8080", Duration::from_secs(30), 3).await?;
//! # Ok(())
//! # }
//! ```

use crate::RecognizerError;
use catalog_domain::traits::EntityRecognizer;
use catalog_domain::{Entity, EntityLabel};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, warn};

/// Default recognizer service endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// Default timeout for recognition requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of attempts per document
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Most attempts per document a configuration may ask for
pub const MAX_RETRIES_LIMIT: u32 = 10;

/// Longest pause between two attempts
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Remote entity recognizer
///
/// The synchronous [`EntityRecognizer::recognize`] drives the request on the
/// runtime that was current at [`HttpRecognizer::connect`]. It must be called
/// from a blocking thread (for example inside `spawn_blocking`), never from an
/// async task.
pub struct HttpRecognizer {
    endpoint: String,
    client: reqwest::Client,
    max_retries: u32,
    handle: Handle,
}

/// Request body for the entity endpoint
#[derive(Serialize)]
struct EntRequest<'a> {
    text: &'a str,
}

/// One entity in the service response
#[derive(Deserialize)]
struct EntResponseItem {
    start: usize,
    end: usize,
    label: String,
}

impl HttpRecognizer {
    /// Connect to a recognizer service
    ///
    /// Sends an empty probe document; any failure is reported as
    /// [`RecognizerError::Unavailable`].
    pub async fn connect(
        endpoint: impl Into<String>,
        timeout: Duration,
        max_retries: u32,
    ) -> Result<Self, RecognizerError> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecognizerError::Unavailable(format!("HTTP client: {}", e)))?;

        let handle = Handle::try_current()
            .map_err(|e| RecognizerError::Unavailable(format!("no async runtime: {}", e)))?;

        let recognizer = Self {
            endpoint,
            client,
            max_retries: max_retries.clamp(1, MAX_RETRIES_LIMIT),
            handle,
        };

        recognizer
            .request("")
            .await
            .map_err(|e| RecognizerError::Unavailable(format!("{} did not answer: {}", recognizer.endpoint, e)))?;

        debug!("Recognizer service at {} is up", recognizer.endpoint);
        Ok(recognizer)
    }

    /// Endpoint this recognizer talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Recognize entities, retrying transient failures
    pub async fn recognize_async(&self, text: &str) -> Result<Vec<Entity>, RecognizerError> {
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.request(text).await {
                Ok(items) => return to_entities(text, items),
                Err(e @ RecognizerError::InvalidResponse(_)) => return Err(e),
                Err(e) => {
                    warn!("Recognizer request failed (attempt {}): {}", attempts + 1, e);
                    last_error = Some(e);
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                tokio::time::sleep(backoff_delay(attempts)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| RecognizerError::Request("Max retries exceeded".to_string())))
    }

    async fn request(&self, text: &str) -> Result<Vec<EntResponseItem>, RecognizerError> {
        let url = format!("{}/ent", self.endpoint);

        let response = self
            .client
            .post(&url)
            .json(&EntRequest { text })
            .send()
            .await
            .map_err(|e| RecognizerError::Request(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RecognizerError::Request(format!("HTTP {}: {}", status, body)));
        }

        response
            .json::<Vec<EntResponseItem>>()
            .await
            .map_err(|e| RecognizerError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

/// Pause after the `attempt`-th failure: 500ms, 1s, 2s, etc., up to [`MAX_BACKOFF`]
fn backoff_delay(attempt: u32) -> Duration {
    let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
    Duration::from_millis(500u64.saturating_mul(factor)).min(MAX_BACKOFF)
}

/// Convert character-offset items into byte-offset entities, in document order
fn to_entities(text: &str, items: Vec<EntResponseItem>) -> Result<Vec<Entity>, RecognizerError> {
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut entities = items
        .into_iter()
        .map(|item| {
            let (start, end) = match (boundaries.get(item.start), boundaries.get(item.end)) {
                (Some(&start), Some(&end)) if start <= end => (start, end),
                _ => {
                    return Err(RecognizerError::InvalidResponse(format!(
                        "span {}..{} outside a text of {} characters",
                        item.start,
                        item.end,
                        boundaries.len() - 1
                    )))
                }
            };
            Ok(Entity::new(&text[start..end], EntityLabel::parse(&item.label), start, end))
        })
        .collect::<Result<Vec<_>, _>>()?;

    entities.sort_by_key(|e| e.start);
    Ok(entities)
}

impl EntityRecognizer for HttpRecognizer {
    type Error = RecognizerError;

    fn recognize(&self, text: &str) -> Result<Vec<Entity>, Self::Error> {
        self.handle.block_on(self.recognize_async(text))
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(start: usize, end: usize, label: &str) -> EntResponseItem {
        EntResponseItem {
            start,
            end,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_char_offsets_become_byte_offsets() {
        let text = "Café at Zürich University";
        let entities = to_entities(text, vec![item(8, 25, "ORG")]).unwrap();

        assert_eq!(entities[0].text, "Zürich University");
        assert_eq!(&text[entities[0].start..entities[0].end], "Zürich University");
        assert_eq!(entities[0].label, EntityLabel::Organization);
    }

    #[test]
    fn test_out_of_range_span_rejected() {
        let result = to_entities("short", vec![item(2, 40, "PERSON")]);
        assert!(matches!(result, Err(RecognizerError::InvalidResponse(_))));
    }

    #[test]
    fn test_entities_sorted_by_start() {
        let text = "Jane Smith at Baker Hall";
        let entities = to_entities(text, vec![item(14, 24, "FAC"), item(0, 10, "PERSON")]).unwrap();
        assert_eq!(entities[0].label, EntityLabel::Person);
        assert_eq!(entities[1].label, EntityLabel::Facility);
    }

    #[test]
    fn test_backoff_doubles_then_caps() {
        assert_eq!(backoff_delay(1), Duration::from_millis(500));
        assert_eq!(backoff_delay(2), Duration::from_secs(1));
        assert_eq!(backoff_delay(3), Duration::from_secs(2));
        assert_eq!(backoff_delay(7), MAX_BACKOFF);
        assert_eq!(backoff_delay(64), MAX_BACKOFF);
        assert_eq!(backoff_delay(u32::MAX), MAX_BACKOFF);
    }

    #[tokio::test]
    async fn test_connect_unreachable_endpoint() {
        let result = HttpRecognizer::connect("http://127.0.0.1:9", Duration::from_secs(2), 1).await;
        assert!(matches!(result, Err(RecognizerError::Unavailable(_))));
    }
}
