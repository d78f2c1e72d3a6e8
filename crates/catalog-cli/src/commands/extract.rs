//! Extract command implementation.

use crate::cli::{ExtractArgs, InputArgs};
use crate::config::Config;
use crate::error::Result;
use crate::input;
use crate::output::Formatter;
use catalog_extractor::{BatchReport, SharedBatchRunner};

/// Execute the extract command.
pub async fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let report = run_extraction(&args.input, config).await?;

    println!("{}", formatter.format_records(&report.records)?);
    report_faults(&report, formatter);

    Ok(())
}

/// Read the input documents and run them through the extractor.
///
/// The recognizer is loaded once here; an unavailable recognizer stops the
/// run before any document is processed.
pub async fn run_extraction(input: &InputArgs, config: &Config) -> Result<BatchReport> {
    let documents = input::read_documents(&input.paths, input.split)?;

    let mut extractor = config.extractor.clone();
    if let Some(workers) = input.workers {
        extractor.max_workers = workers;
    }

    let runner = SharedBatchRunner::from_config(extractor, &config.recognizer).await?;
    Ok(runner.run(documents).await)
}

/// Print faults and the batch summary to stderr.
pub(crate) fn report_faults(report: &BatchReport, formatter: &Formatter) {
    if !report.faults.is_empty() {
        eprintln!("{}", formatter.faults(&report.faults));
    }
    eprintln!("{}", formatter.batch_summary(report));
}
