//! ESG Data Checker Library
//!
//! A small Rust library for checking the quality of sustainability (ESG)
//! disclosures, either as CSV tables or as free-form report text.
//!
//! This library provides tools for:
//! - Parsing comma-delimited disclosure tables into header/row form
//! - Validating rows against required-field, numeric and reconciliation rules
//! - Reducing validation issues to a bounded 40-100 quality score
//! - Heuristically extracting emissions, energy, water and gender metrics
//!   from report prose
//!
//! The core operations ([`parse`], [`validate_row`], [`score`], [`extract`])
//! are pure functions. Data problems surface as [`Issue`]s, never as errors.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod session;
    pub mod services {
        pub mod row_validator;
        pub mod scorer;
        pub mod table_parser;
        pub mod text_extractor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{CheckReport, ExtractedMetrics, Issue, MetricKey, Row, Severity, Table};
pub use app::services::row_validator::{validate_row, validate_table};
pub use app::services::scorer::{score, score_label};
pub use app::services::table_parser::parse;
pub use app::services::text_extractor::extract;
pub use app::session::CheckSession;
pub use config::Config;

/// Result type alias for the ESG data checker
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ESG checker operations
///
/// None of these describe data-quality problems; those are [`Issue`]s.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file or directory not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration file '{file}' could not be parsed: {message}")]
    ConfigParsing {
        file: String,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    /// Report serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Checks were requested before a table with rows was loaded
    #[error("Please load a CSV file first.")]
    NoTableLoaded,
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parsing error
    pub fn config_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: toml::de::Error,
    ) -> Self {
        Self::ConfigParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Whether this error is a caller precondition that should be shown as a
    /// status message instead of failing the run
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NoTableLoaded)
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_table_loaded_message() {
        let error = Error::NoTableLoaded;
        assert_eq!(error.to_string(), "Please load a CSV file first.");
        assert!(error.is_precondition());
    }

    #[test]
    fn test_io_error_is_not_precondition() {
        let error = Error::io(
            "Failed to read input",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(!error.is_precondition());
        assert_eq!(error.to_string(), "I/O error: Failed to read input");
    }

    #[test]
    fn test_file_not_found_message() {
        let error = Error::file_not_found("data/missing.csv");
        assert_eq!(error.to_string(), "File not found: data/missing.csv");
    }
}
