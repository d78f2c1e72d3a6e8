//! Record assembly
//!
//! The assembler runs every field extractor over one document and unifies
//! their outputs into an [`ExtractionRecord`]. It holds no per-document state,
//! so one assembler can serve any number of documents concurrently.

use crate::config::ExtractorConfig;
use crate::entities;
use crate::error::ExtractorError;
use crate::modules;
use crate::patterns;
use crate::types::{AssemblyOutcome, FieldFault};
use catalog_domain::traits::EntityRecognizer;
use catalog_domain::{Document, Entity, ExtractionRecord, Field, FieldValue};
use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, warn};

/// Builds one [`ExtractionRecord`] per document
pub struct RecordAssembler<R: ?Sized> {
    recognizer: Arc<R>,
    config: ExtractorConfig,
}

impl<R: ?Sized> Clone for RecordAssembler<R> {
    fn clone(&self) -> Self {
        Self {
            recognizer: Arc::clone(&self.recognizer),
            config: self.config.clone(),
        }
    }
}

impl<R> RecordAssembler<R>
where
    R: EntityRecognizer + ?Sized,
    R::Error: Display,
{
    /// Create a new assembler around a loaded recognizer
    pub fn new(recognizer: Arc<R>, config: ExtractorConfig) -> Self {
        Self { recognizer, config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Name of the recognizer in use
    pub fn recognizer_name(&self) -> &str {
        self.recognizer.name()
    }

    /// Extract the record of one document
    ///
    /// Never fails: a field whose extractor errors or panics is left empty and
    /// reported in [`AssemblyOutcome::faults`]. A recognizer panic only faults
    /// the fields that read entities.
    pub fn assemble(&self, document: &Document) -> AssemblyOutcome {
        let (text, truncated) = self.bounded_text(document);

        let attempt = panic::catch_unwind(AssertUnwindSafe(|| self.recognizer.recognize(text)));
        let recognized = match attempt {
            Ok(result) => result.map_err(|e| ExtractorError::Recognizer(e.to_string())),
            Err(payload) => Err(ExtractorError::Recognizer(format!(
                "recognizer panicked: {}",
                panic_message(payload.as_ref())
            ))),
        };
        match &recognized {
            Ok(entities) => debug!(
                source = document.source(),
                "Recognized {} entities",
                entities.len()
            ),
            Err(e) => warn!(source = document.source(), "Entity recognition failed: {}", e),
        }

        let mut faults = Vec::new();
        let record = ExtractionRecord::from_fn(|field| {
            let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
                self.extract_field(field, text, recognized.as_deref())
            }))
            .unwrap_or_else(|payload| {
                Err(ExtractorError::Worker(format!(
                    "extractor panicked: {}",
                    panic_message(payload.as_ref())
                )))
            });
            match extracted {
                Ok(value) => value.normalize(&self.config.separator),
                Err(e) => {
                    warn!(
                        source = document.source(),
                        field = field.column_name(),
                        "Field extraction failed: {}",
                        e
                    );
                    faults.push(FieldFault {
                        field,
                        reason: e.to_string(),
                    });
                    String::new()
                }
            }
        });

        AssemblyOutcome {
            record,
            faults,
            truncated,
        }
    }

    /// Run the extractor for one field
    ///
    /// `entities` is the document's recognizer output; only University Name,
    /// Professor Name and the Building Name fallback look at it.
    pub fn extract_field(
        &self,
        field: Field,
        text: &str,
        entities: Result<&[Entity], &ExtractorError>,
    ) -> Result<FieldValue, ExtractorError> {
        let value = match field {
            Field::UniversityName => {
                FieldValue::from_option(entities::university_name(entities.map_err(Clone::clone)?))
            }
            Field::CourseCode => patterns::course_codes(text).into(),
            Field::CourseName => patterns::course_names(text).into(),
            Field::ProfessorName => {
                entities::professor_names(text, entities.map_err(Clone::clone)?).into()
            }
            Field::RoomNumber => patterns::room_numbers(text).into(),
            Field::BuildingName => self.building_names(text, entities)?,
            Field::CourseTiming => patterns::course_timings(text).into(),
            Field::CourseSchedule => patterns::schedule_days(text).into(),
            Field::Modules => {
                FieldValue::from_option(modules::modules(text, &self.config.separator))
            }
        };
        Ok(value)
    }

    /// Building names by pattern, falling back to facility entities
    ///
    /// The recognizer is only consulted when the pattern finds nothing, so a
    /// recognizer failure cannot fault this field when the pattern matched.
    fn building_names(
        &self,
        text: &str,
        entities: Result<&[Entity], &ExtractorError>,
    ) -> Result<FieldValue, ExtractorError> {
        let names = patterns::building_names(text);
        if !names.is_empty() || !self.config.building_entity_fallback {
            return Ok(names.into());
        }
        let entities = entities.map_err(Clone::clone)?;
        Ok(entities::facility_names(entities).into())
    }

    fn bounded_text<'d>(&self, document: &'d Document) -> (&'d str, bool) {
        let text = document.text();
        let limit = match self.config.max_document_bytes {
            Some(limit) if text.len() > limit => limit,
            _ => return (text, false),
        };

        let mut end = limit;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        warn!(
            source = document.source(),
            "Document is {} bytes, extracting from the first {}",
            text.len(),
            end
        );
        (&text[..end], true)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
