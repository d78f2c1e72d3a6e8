//! Catalog Storage Layer
//!
//! Implements the RecordSink trait using SQLite.
//!
//! # Architecture
//!
//! - One table per dataset, nine `TEXT NOT NULL` columns named after the
//!   record fields, in field order
//! - Loads replace the table wholesale inside one transaction
//! - Read-back returns rows in the order they were written
//!
//! # Examples
//!
//! ```
//! use catalog_domain::traits::RecordSink;
//! use catalog_domain::{ExtractionRecord, Field};
//! use catalog_store::SqliteSink;
//!
//! let mut sink = SqliteSink::in_memory().unwrap();
//! let record = ExtractionRecord::from_fn(|field| match field {
//!     Field::CourseCode => "CS-101".to_string(),
//!     _ => String::new(),
//! });
//!
//! sink.overwrite("COURSE_INFORMATION", &[record.clone()]).unwrap();
//! assert_eq!(sink.read_back("COURSE_INFORMATION").unwrap(), vec![record]);
//! ```

#![warn(missing_docs)]

use catalog_domain::traits::RecordSink;
use catalog_domain::{ExtractionRecord, Field};
use rusqlite::{params_from_iter, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Default table name for extracted course records
pub const DEFAULT_TABLE: &str = "COURSE_INFORMATION";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Table name is not a plain SQL identifier
    #[error("Invalid table name: '{0}'")]
    InvalidTable(String),

    /// Table does not exist
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of RecordSink
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// SqliteSink instance.
pub struct SqliteSink {
    conn: Connection,
}

impl SqliteSink {
    /// Open (or create) the database at `path`
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use catalog_store::SqliteSink;
    ///
    /// let sink = SqliteSink::new("catalog.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open a private in-memory database
    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Whether `table` exists
    pub fn table_exists(&self, table: &str) -> Result<bool, StoreError> {
        validate_table_name(table)?;
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table],
                |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false);
        Ok(found)
    }

    fn column_list() -> String {
        Field::ALL
            .iter()
            .map(|f| quote(f.column_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Check that `table` is a plain identifier: a letter or underscore, then
/// letters, digits or underscores
pub fn validate_table_name(table: &str) -> Result<(), StoreError> {
    let mut chars = table.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidTable(table.to_string()))
    }
}

fn quote(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

impl RecordSink for SqliteSink {
    type Error = StoreError;

    fn overwrite(&mut self, table: &str, records: &[ExtractionRecord]) -> Result<usize, Self::Error> {
        validate_table_name(table)?;
        let columns = Self::column_list();
        let definitions = Field::ALL
            .iter()
            .map(|f| format!("{} TEXT NOT NULL", quote(f.column_name())))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=Field::ALL.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");

        let tx = self.conn.transaction()?;
        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS {table};\nCREATE TABLE {table} ({definitions});",
            table = quote(table),
        ))?;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {} ({}) VALUES ({})",
                quote(table),
                columns,
                placeholders
            ))?;
            for record in records {
                stmt.execute(params_from_iter(record.as_row()))?;
            }
        }
        tx.commit()?;

        info!("Wrote {} rows to table {}", records.len(), table);
        Ok(records.len())
    }

    fn read_back(&self, table: &str) -> Result<Vec<ExtractionRecord>, Self::Error> {
        if !self.table_exists(table)? {
            return Err(StoreError::TableNotFound(table.to_string()));
        }

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM {} ORDER BY rowid",
            Self::column_list(),
            quote(table)
        ))?;

        let rows = stmt
            .query_map([], |row| {
                (0..Field::ALL.len())
                    .map(|i| row.get::<_, String>(i))
                    .collect::<Result<Vec<_>, _>>()
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Read {} rows from table {}", rows.len(), table);

        rows.into_iter()
            .map(|row| {
                ExtractionRecord::from_row(row).map_err(|e| StoreError::InvalidData(e.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_validation() {
        assert!(validate_table_name("COURSE_INFORMATION").is_ok());
        assert!(validate_table_name("_staging2").is_ok());
        assert!(matches!(validate_table_name(""), Err(StoreError::InvalidTable(_))));
        assert!(matches!(validate_table_name("2024_courses"), Err(StoreError::InvalidTable(_))));
        assert!(matches!(
            validate_table_name("courses; DROP TABLE x"),
            Err(StoreError::InvalidTable(_))
        ));
    }

    #[test]
    fn test_column_list_is_quoted_in_field_order() {
        let columns = SqliteSink::column_list();
        assert!(columns.starts_with("\"University Name\", \"Course Code\""));
        assert!(columns.ends_with("\"Modules\""));
    }

    #[test]
    fn test_table_exists() {
        let mut sink = SqliteSink::in_memory().unwrap();
        assert!(!sink.table_exists("courses").unwrap());
        sink.overwrite("courses", &[]).unwrap();
        assert!(sink.table_exists("courses").unwrap());
    }
}
