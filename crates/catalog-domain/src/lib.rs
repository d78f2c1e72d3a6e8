//! Catalog Domain Layer
//!
//! This crate contains the domain model shared by every other catalog crate.
//! It has ZERO external dependencies and defines the value objects and trait
//! interfaces that the extraction core, the recognizers and the sinks agree on.
//!
//! ## Key Concepts
//!
//! - **Document**: an immutable block of raw text, the sole input unit
//! - **Entity**: a labeled span produced by an entity recognizer
//! - **FieldValue**: absent, a single string, or an ordered list of strings
//! - **ExtractionRecord**: the normalized nine-column row for one document
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Infrastructure implementations live in other crates
//! - Trait definitions for the recognizer and the sink boundaries

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod entity;
pub mod field;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use document::Document;
pub use entity::{Entity, EntityLabel};
pub use field::{Field, FieldValue, DEFAULT_SEPARATOR};
pub use record::{ExtractionRecord, RowError};
