//! Result types for assembly and batch runs

use catalog_domain::{ExtractionRecord, Field};

/// A field that could not be extracted for one document
///
/// The field's value in the record is the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFault {
    /// Field that failed
    pub field: Field,

    /// Reason for the failure
    pub reason: String,
}

/// Output of assembling one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyOutcome {
    /// The nine-field record
    pub record: ExtractionRecord,

    /// Fields that faulted, in column order
    pub faults: Vec<FieldFault>,

    /// Whether the document was cut to the configured maximum size
    pub truncated: bool,
}

impl AssemblyOutcome {
    /// Whether every field was extracted without a fault
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

/// A field fault tagged with the document it happened in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFault {
    /// Source of the document
    pub source: String,

    /// Position of the document in the batch
    pub index: usize,

    /// Field that failed
    pub field: Field,

    /// Reason for the failure
    pub reason: String,
}

/// Metadata about a batch run
#[derive(Debug, Clone)]
pub struct BatchMetadata {
    /// Batch identifier (UUIDv7)
    pub batch_id: String,

    /// Timestamp when the batch started (seconds since the Unix epoch)
    pub started_at: u64,

    /// Name of the recognizer used
    pub recognizer: String,

    /// Number of documents processed
    pub documents: usize,

    /// Number of documents cut to the maximum size
    pub truncated: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Result of a batch run: one record per input document, in input order
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Records, one per document
    pub records: Vec<ExtractionRecord>,

    /// Every field fault of the batch
    pub faults: Vec<DocumentFault>,

    /// Metadata about the run
    pub metadata: BatchMetadata,
}

impl BatchReport {
    /// Records as nine-column rows
    pub fn rows(&self) -> impl Iterator<Item = [&str; 9]> {
        self.records.iter().map(ExtractionRecord::as_row)
    }

    /// Number of distinct documents with at least one fault
    pub fn faulted_documents(&self) -> usize {
        let mut indices: Vec<usize> = self.faults.iter().map(|f| f.index).collect();
        indices.dedup();
        indices.len()
    }

    /// Whether no field faulted anywhere in the batch
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}
