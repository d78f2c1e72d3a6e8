//! Show command implementation.

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use catalog_domain::traits::RecordSink;
use catalog_store::SqliteSink;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let database = args.database.unwrap_or_else(|| config.sink.database.clone());
    let table = args.table.unwrap_or_else(|| config.sink.table.clone());

    if !database.exists() {
        return Err(CliError::InvalidInput(format!(
            "Database '{}' does not exist",
            database.display()
        )));
    }

    let sink = SqliteSink::new(&database)?;
    let records = sink.read_back(&table)?;

    println!("{}", formatter.format_records(&records)?);
    eprintln!("{}", formatter.info(&format!("{} row(s) in {}", records.len(), table)));

    Ok(())
}
