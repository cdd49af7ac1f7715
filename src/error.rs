//! Error types for results processing.
//!
//! All errors implement the `std::error::Error` trait and carry structured
//! context naming the document location or input that failed.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: the raw text is not well-formed XML
//! - **Input Errors**: the raw input is empty or not decodable as UTF-8
//! - **Structure Errors**: a required element or text node is absent
//! - **Parse Errors**: non-integer text where a time or position is expected
//! - **File Errors**: problems reading a results file from disk
//!
//! Processing is fail-fast: any of these aborts the whole document with no
//! partial report. Use [`ReportError::is_document_error`] to distinguish
//! failures caused by document content from I/O failures:
//!
//! ```rust
//! use splitboard::ReportError;
//!
//! let error = ReportError::missing_element("Event/Name");
//! if error.is_document_error() {
//!     println!("The results file itself is malformed");
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for results processing operations.
pub type Result<T, E = ReportError> = std::result::Result<T, E>;

/// Main error type for results processing.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportError {
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("Results file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {details}")]
    Input { details: String },

    #[error("Required element not found: {path}")]
    MissingElement { path: String },

    #[error("Element has no text content: {path}")]
    MissingText { path: String },

    #[error("Invalid integer in {path}: {value:?}")]
    InvalidInteger { path: String, value: String },

    #[error("Document contains no competitor results")]
    NoCompetitors,
}

impl ReportError {
    /// Returns whether this error was caused by the document's own content,
    /// as opposed to reading it from disk.
    pub fn is_document_error(&self) -> bool {
        match self {
            ReportError::Syntax(_) => true,
            ReportError::Input { .. } => true,
            ReportError::MissingElement { .. } => true,
            ReportError::MissingText { .. } => true,
            ReportError::InvalidInteger { .. } => true,
            ReportError::NoCompetitors => true,
            ReportError::File { .. } => false,
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        ReportError::File { path, source }
    }

    /// Helper constructor for raw-input errors.
    pub fn invalid_input(details: impl Into<String>) -> Self {
        ReportError::Input { details: details.into() }
    }

    /// Helper constructor for a missing required element.
    pub fn missing_element(path: impl Into<String>) -> Self {
        ReportError::MissingElement { path: path.into() }
    }

    /// Helper constructor for an element with no text content.
    pub fn missing_text(path: impl Into<String>) -> Self {
        ReportError::MissingText { path: path.into() }
    }

    /// Helper constructor for integer parse failures.
    pub fn invalid_integer(path: impl Into<String>, value: impl Into<String>) -> Self {
        ReportError::InvalidInteger { path: path.into(), value: value.into() }
    }
}
