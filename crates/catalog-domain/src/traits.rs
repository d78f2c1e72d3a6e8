//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the extraction core and
//! infrastructure. Implementations live in other crates.

use crate::{Entity, ExtractionRecord};

/// Trait for entity recognition
///
/// Implemented by the infrastructure layer (catalog-recognizer).
///
/// A recognizer is loaded once per process and then shared read-only by every
/// worker, hence the `Send + Sync` bound: `recognize` must be safe to call
/// concurrently.
pub trait EntityRecognizer: Send + Sync {
    /// Error type for recognition
    type Error;

    /// Recognize the entities of one text, in document order
    ///
    /// A text with no entities yields an empty list, not an error.
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, Self::Error>;

    /// Short name for logs
    fn name(&self) -> &str;
}

/// Trait for persisting the extracted dataset
///
/// Implemented by the infrastructure layer (catalog-store).
pub trait RecordSink {
    /// Error type for sink operations
    type Error;

    /// Replace the contents of `table` with `records`, in order
    ///
    /// Returns the number of rows written.
    fn overwrite(&mut self, table: &str, records: &[ExtractionRecord]) -> Result<usize, Self::Error>;

    /// Read every row of `table` back, in the order it was written
    fn read_back(&self, table: &str) -> Result<Vec<ExtractionRecord>, Self::Error>;
}
