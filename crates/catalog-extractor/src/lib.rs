//! Catalog Extractor
//!
//! Turns free-text course descriptions into nine-column course-catalog
//! records.
//!
//! # Overview
//!
//! Every document goes through the same set of field extractors. Pattern
//! extractors match regular expressions against the text; entity extractors
//! filter the output of an [`EntityRecognizer`] with contextual heuristics;
//! the module list extractor combines two sentence templates. The
//! [`RecordAssembler`] unifies their outputs into one [`ExtractionRecord`],
//! joining multi-valued fields with a separator and mapping absent values to
//! the empty string.
//!
//! # Architecture
//!
//! ```text
//! Documents → BatchRunner → RecordAssembler ─┬→ patterns
//!                                            ├→ entities ← EntityRecognizer
//!                                            └→ modules
//!                               ↓
//!                          BatchReport (one record per document, in order)
//! ```
//!
//! # Key Features
//!
//! - **One recognizer call per document**: entity-based fields share one entity list
//! - **Partial-record tolerance**: a failing field is left empty and reported, never fatal
//! - **Building fallback**: facility entities stand in when the building pattern finds nothing
//! - **Parallel batches**: documents run concurrently on the blocking pool, order preserved
//!
//! # Example Usage
//!
//! ```
//! use catalog_extractor::{BatchRunner, ExtractorConfig};
//! use catalog_domain::{Document, Field};
//! use catalog_recognizer::RuleRecognizer;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let runner = BatchRunner::new(Arc::new(RuleRecognizer::new()), ExtractorConfig::default());
//!
//! let report = runner
//!     .run(vec![Document::new(
//!         "catalog.txt",
//!         "CS-101 meets Monday and Wednesday in Room 204B at Baker Hall.",
//!     )])
//!     .await;
//!
//! let record = &report.records[0];
//! assert_eq!(record.get(Field::CourseCode), "CS-101");
//! assert_eq!(record.get(Field::CourseSchedule), "Monday and Wednesday");
//! assert_eq!(record.get(Field::BuildingName), "Baker Hall");
//! # }
//! ```
//!
//! [`EntityRecognizer`]: catalog_domain::traits::EntityRecognizer
//! [`ExtractionRecord`]: catalog_domain::ExtractionRecord

#![warn(missing_docs)]

pub mod entities;
pub mod modules;
pub mod patterns;

mod assembler;
mod batch;
mod config;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use assembler::RecordAssembler;
pub use batch::{BatchRunner, SharedBatchRunner};
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use types::{AssemblyOutcome, BatchMetadata, BatchReport, DocumentFault, FieldFault};
