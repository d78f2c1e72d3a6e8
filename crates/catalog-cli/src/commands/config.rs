//! Config command implementation.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the config command.
///
/// Prints the effective configuration as TOML. With `--init` it is written
/// to `path` (or the default location) instead; an existing file is kept.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<PathBuf> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => Config::path()?,
    };

    if !args.init {
        print!("{}", config.to_toml()?);
        return Ok(target);
    }

    if target.exists() {
        return Err(CliError::InvalidInput(format!(
            "'{}' already exists",
            target.display()
        )));
    }

    config.save(&target)?;
    eprintln!(
        "{}",
        formatter.success(&format!("Wrote configuration to {}", target.display()))
    );
    Ok(target)
}
