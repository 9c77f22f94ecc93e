//! Input discovery and reading for CLI commands
//!
//! Resolves command-line paths into concrete text sources and reads them
//! into memory. Reading is the only asynchronous step; everything after it
//! works on fully materialized text.

use crate::constants::{SAMPLE_CSV, SAMPLE_TEXT};
use crate::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::debug;
use walkdir::WalkDir;

/// A source of text to check or extract from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
    /// Built-in sample disclosure table
    SampleTable,
    /// Built-in sample report text
    SampleText,
    /// Text given directly on the command line
    Inline(String),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::SampleTable => f.write_str("<sample table>"),
            InputSource::SampleText => f.write_str("<sample text>"),
            InputSource::Inline(_) => f.write_str("<inline text>"),
        }
    }
}

impl InputSource {
    /// Read the full text of this source
    pub async fn read(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .map_err(|e| Error::io("Failed to read standard input", e))?;
                Ok(text)
            }
            InputSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                Error::io(format!("Failed to read '{}'", path.display()), e)
            }),
            InputSource::SampleTable => Ok(SAMPLE_CSV.to_string()),
            InputSource::SampleText => Ok(SAMPLE_TEXT.to_string()),
            InputSource::Inline(text) => Ok(text.clone()),
        }
    }
}

/// Resolve a single path argument into a source
///
/// `-` means standard input.
pub fn resolve_path(path: &Path) -> Result<InputSource> {
    if path.as_os_str() == "-" {
        return Ok(InputSource::Stdin);
    }
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }
    Ok(InputSource::File(path.to_path_buf()))
}

/// Resolve path arguments into table sources
///
/// Files are taken as given. Directories are walked recursively for `.csv`
/// files, which are returned in sorted order.
pub fn resolve_table_inputs(paths: &[PathBuf]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();

    for path in paths {
        if path.is_dir() {
            let csv_files = discover_csv_files(path)?;
            if csv_files.is_empty() {
                debug!("No CSV files found in {}", path.display());
            }
            sources.extend(csv_files.into_iter().map(InputSource::File));
        } else {
            sources.push(resolve_path(path)?);
        }
    }

    Ok(sources)
}

/// Discover CSV files under a directory
pub fn discover_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut csv_files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|e| {
            Error::directory_traversal(format!("Failed to walk '{}'", dir.display()), e)
        })?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        {
            csv_files.push(path.to_path_buf());
        }
    }

    // Sort files for consistent processing order
    csv_files.sort();

    debug!("Discovered {} CSV files in {}", csv_files.len(), dir.display());
    Ok(csv_files)
}
