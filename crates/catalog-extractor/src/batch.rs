//! Batch runner
//!
//! Runs the assembler over a batch of documents on tokio's blocking pool.
//! Documents are independent, so they run concurrently up to
//! `max_workers`; the report always lists records in input order.

use crate::assembler::RecordAssembler;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::types::{AssemblyOutcome, BatchMetadata, BatchReport, DocumentFault, FieldFault};
use catalog_domain::traits::EntityRecognizer;
use catalog_domain::{Document, ExtractionRecord, Field};
use catalog_recognizer::{RecognizerConfig, RecognizerError};
use std::fmt::Display;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Runs extraction over many documents
pub struct BatchRunner<R: ?Sized> {
    assembler: Arc<RecordAssembler<R>>,
}

/// Runner over a recognizer chosen at runtime
pub type SharedBatchRunner = BatchRunner<dyn EntityRecognizer<Error = RecognizerError>>;

impl SharedBatchRunner {
    /// Load the configured recognizer and build a runner around it
    ///
    /// Fails with [`ExtractorError::RecognizerUnavailable`] when the
    /// recognizer cannot be loaded; no document is processed in that case.
    pub async fn from_config(
        config: ExtractorConfig,
        recognizer: &RecognizerConfig,
    ) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let recognizer = catalog_recognizer::load(recognizer).await?;
        Ok(Self::new(recognizer, config))
    }
}

impl<R> BatchRunner<R>
where
    R: EntityRecognizer + ?Sized + 'static,
    R::Error: Display,
{
    /// Create a new runner
    pub fn new(recognizer: Arc<R>, config: ExtractorConfig) -> Self {
        Self {
            assembler: Arc::new(RecordAssembler::new(recognizer, config)),
        }
    }

    /// Get the assembler shared by the workers
    pub fn assembler(&self) -> &RecordAssembler<R> {
        &self.assembler
    }

    /// Extract one record per document
    ///
    /// A panicking recognizer or extractor only faults the fields that
    /// depend on it. A document whose worker still dies gets an all-empty
    /// record and one fault per field; the rest of the batch is unaffected.
    pub async fn run(&self, documents: Vec<Document>) -> BatchReport {
        let start_time = SystemTime::now();
        let batch_id = uuid::Uuid::now_v7().to_string();
        let workers = self.assembler.config().max_workers.max(1);
        let sources: Vec<String> = documents.iter().map(|d| d.source().to_string()).collect();

        info!(
            "Starting batch {}: {} documents, {} workers, recognizer '{}'",
            batch_id,
            documents.len(),
            workers,
            self.assembler.recognizer_name()
        );

        let mut slots: Vec<Option<AssemblyOutcome>> = vec![None; documents.len()];
        let permits = Arc::new(Semaphore::new(workers));
        let mut tasks = JoinSet::new();

        for (index, document) in documents.into_iter().enumerate() {
            let permit = match Arc::clone(&permits).acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    warn!("Worker pool closed: {}", e);
                    break;
                }
            };
            let assembler = Arc::clone(&self.assembler);
            tasks.spawn_blocking(move || {
                let _permit = permit;
                (index, assembler.assemble(&document))
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => {
                    debug!(source = sources[index].as_str(), "Document done");
                    slots[index] = Some(outcome);
                }
                Err(e) => warn!("Worker task failed: {}", e),
            }
        }

        let mut records = Vec::with_capacity(slots.len());
        let mut faults = Vec::new();
        let mut truncated = 0;
        for (index, slot) in slots.into_iter().enumerate() {
            let outcome = slot.unwrap_or_else(|| worker_failed(&sources[index]));
            if outcome.truncated {
                truncated += 1;
            }
            faults.extend(outcome.faults.into_iter().map(|fault| DocumentFault {
                source: sources[index].clone(),
                index,
                field: fault.field,
                reason: fault.reason,
            }));
            records.push(outcome.record);
        }

        let processing_time_ms = start_time
            .elapsed()
            .unwrap_or(Duration::from_secs(0))
            .as_millis() as u64;

        let metadata = BatchMetadata {
            batch_id,
            started_at: start_time
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            recognizer: self.assembler.recognizer_name().to_string(),
            documents: records.len(),
            truncated,
            processing_time_ms,
        };

        info!(
            "Batch {} complete: {} records, {} faults, {} ms",
            metadata.batch_id,
            records.len(),
            faults.len(),
            processing_time_ms
        );

        BatchReport {
            records,
            faults,
            metadata,
        }
    }
}

fn worker_failed(source: &str) -> AssemblyOutcome {
    let reason = ExtractorError::Worker("worker task failed".to_string()).to_string();
    warn!(source, "No record produced, emitting an empty row");
    AssemblyOutcome {
        record: ExtractionRecord::empty(),
        faults: Field::ALL
            .iter()
            .map(|&field| FieldFault {
                field,
                reason: reason.clone(),
            })
            .collect(),
        truncated: false,
    }
}
