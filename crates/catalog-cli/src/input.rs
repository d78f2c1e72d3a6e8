//! Reading documents from the filesystem.

use crate::error::{CliError, Result};
use catalog_domain::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How a file becomes documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SplitMode {
    /// One document per file
    #[default]
    Whole,
    /// One document per non-empty line
    Lines,
}

/// Expand the given paths into the list of files to read.
///
/// Files are kept in argument order; a directory contributes its `.txt`
/// files (not recursively), sorted by name.
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries = Vec::new();
            for entry in fs::read_dir(path)? {
                let entry = entry?.path();
                if entry.is_file() && entry.extension().is_some_and(|ext| ext == "txt") {
                    entries.push(entry);
                }
            }
            entries.sort();
            debug!("{} text files in {}", entries.len(), path.display());
            files.extend(entries);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(CliError::InvalidInput(format!(
                "'{}' is not a file or directory",
                path.display()
            )));
        }
    }
    Ok(files)
}

/// Split one file's contents into documents.
pub fn split_documents(source: &Path, text: &str, mode: SplitMode) -> Vec<Document> {
    match mode {
        SplitMode::Whole => vec![Document::new(source.display().to_string(), text)],
        SplitMode::Lines => text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(n, line)| Document::new(format!("{}:{}", source.display(), n + 1), line))
            .collect(),
    }
}

/// Read a file as text, replacing invalid UTF-8 sequences with U+FFFD.
fn read_text(file: &Path) -> Result<String> {
    let bytes = fs::read(file)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(
                "{} is not valid UTF-8 (first bad byte at {}), reading it lossily",
                file.display(),
                e.utf8_error().valid_up_to()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Read every document under `paths`.
///
/// A file that is not valid UTF-8 is still read; its invalid bytes become
/// U+FFFD so one bad file never drops the rest of the batch.
pub fn read_documents(paths: &[PathBuf], mode: SplitMode) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for file in collect_files(paths)? {
        let text = read_text(&file)?;
        documents.extend(split_documents(&file, &text, mode));
    }

    if documents.is_empty() {
        return Err(CliError::InvalidInput("No documents found".to_string()));
    }
    Ok(documents)
}
