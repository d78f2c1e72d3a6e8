//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use catalog_domain::{ExtractionRecord, Field};
use catalog_extractor::{BatchReport, DocumentFault};
use colored::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

/// A record as a JSON object whose keys follow column order.
struct RecordJson<'a>(&'a ExtractionRecord);

impl Serialize for RecordJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::ALL.len()))?;
        for (field, value) in self.0.iter() {
            map.serialize_entry(field.column_name(), value)?;
        }
        map.end()
    }
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format records output.
    pub fn format_records(&self, records: &[ExtractionRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_records_json(records),
            OutputFormat::Table => Ok(self.format_records_table(records)),
        }
    }

    /// Format records as a JSON array of objects.
    fn format_records_json(&self, records: &[ExtractionRecord]) -> Result<String> {
        let rows: Vec<RecordJson<'_>> = records.iter().map(RecordJson).collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }

    /// Format records as a table.
    fn format_records_table(&self, records: &[ExtractionRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No records found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(Field::column_names());
        for record in records {
            builder.push_record(record.as_row());
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// One line per field fault.
    pub fn faults(&self, faults: &[DocumentFault]) -> String {
        faults
            .iter()
            .map(|f| self.warning(&format!("{} [{}]: {}", f.source, f.field, f.reason)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Summary of a batch run.
    pub fn batch_summary(&self, report: &BatchReport) -> String {
        let meta = &report.metadata;
        let msg = format!(
            "Extracted {} record(s) with recognizer '{}' in {} ms (batch {})",
            meta.documents, meta.recognizer, meta.processing_time_ms, meta.batch_id
        );
        if report.is_clean() {
            self.success(&msg)
        } else {
            self.warning(&format!(
                "{}; {} field fault(s) in {} document(s)",
                msg,
                report.faults.len(),
                report.faulted_documents()
            ))
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
