//! Load command implementation.

use super::extract::{report_faults, run_extraction};
use crate::cli::LoadArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use catalog_domain::traits::RecordSink;
use catalog_domain::ExtractionRecord;
use catalog_store::SqliteSink;
use tracing::info;

/// Execute the load command.
pub async fn execute_load(args: LoadArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let database = args.database.unwrap_or_else(|| config.sink.database.clone());
    let table = args.table.unwrap_or_else(|| config.sink.table.clone());
    catalog_store::validate_table_name(&table)?;

    let report = run_extraction(&args.input, config).await?;
    report_faults(&report, formatter);

    let mut sink = SqliteSink::new(&database)?;
    let written = sink.overwrite(&table, &report.records)?;
    println!(
        "{}",
        formatter.success(&format!(
            "Loaded {} row(s) into {} ({})",
            written,
            table,
            database.display()
        ))
    );

    if args.verify {
        let read = sink.read_back(&table)?;
        verify_records(&report.records, &read)?;
        info!("Read-back of {} matches the extracted dataset", table);
        println!("{}", formatter.format_records(&read)?);
        println!("{}", formatter.success(&format!("Verified {} row(s)", read.len())));
    }

    Ok(())
}

/// Check that the rows read back equal the rows written, field by field.
pub fn verify_records(written: &[ExtractionRecord], read: &[ExtractionRecord]) -> Result<()> {
    if written.len() != read.len() {
        return Err(CliError::Verification(format!(
            "wrote {} row(s), read back {}",
            written.len(),
            read.len()
        )));
    }

    for (row, (expected, actual)) in written.iter().zip(read).enumerate() {
        let mismatch = expected
            .iter()
            .zip(actual.iter())
            .find(|((_, a), (_, b))| a != b);
        if let Some(((field, a), (_, b))) = mismatch {
            return Err(CliError::Verification(format!(
                "row {} field '{}': wrote '{}', read back '{}'",
                row + 1,
                field,
                a,
                b
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_domain::Field;

    fn record(code: &str) -> ExtractionRecord {
        ExtractionRecord::from_fn(|field| match field {
            Field::CourseCode => code.to_string(),
            _ => String::new(),
        })
    }

    #[test]
    fn test_identical_rows_verify() {
        let rows = vec![record("CS-101"), record("MA-201")];
        assert!(verify_records(&rows, &rows.clone()).is_ok());
    }

    #[test]
    fn test_row_count_mismatch() {
        let result = verify_records(&[record("CS-101")], &[]);
        assert!(matches!(result, Err(CliError::Verification(_))));
    }

    #[test]
    fn test_field_mismatch_names_the_field() {
        let err = verify_records(&[record("CS-101")], &[record("CS-102")]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 1"));
        assert!(msg.contains("Course Code"));
    }
}
