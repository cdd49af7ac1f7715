//! Type-safe Rust library for IOF XML orienteering results.
//!
//! Splitboard turns an IOF Results XML v3.0 document into a structured
//! report: event metadata, per-competitor results with control-point split
//! times, and a split analysis giving every competitor's gap to the best
//! time recorded at each control.
//!
//! # Features
//!
//! - **Typed document model**: named accessors over the XML tree that fail
//!   fast with the missing path instead of panicking
//! - **Split analysis**: best split per control and gap-to-best annotations
//! - **Fail-fast errors**: one malformed record aborts the document, no
//!   partial reports
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use splitboard::Splitboard;
//!
//! fn main() -> splitboard::Result<()> {
//!     let report = Splitboard::open("results.xml")?;
//!
//!     println!("{} — {}", report.event.name, report.event.class_name);
//!     for competitor in &report.results {
//!         println!("{}: {}", competitor.full_name, competitor.total_time);
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
pub mod model;
mod xml_utils;

// Document model and pipeline stages
pub mod analysis;
pub mod dom;
pub mod extract;
pub mod report;
pub mod splits;

// Core exports
pub use error::{ReportError, Result};
pub use model::{CompetitorResult, EventMetadata, Report, SplitRecord, format_elapsed};

// Pipeline exports
pub use analysis::{BestSplitTimes, annotate_splits, best_split_times};
pub use report::process_results;
pub use xml_utils::{extract_xml_from_bytes, preprocess_results_xml};

/// Unified entry point for results processing.
///
/// # Examples
///
/// ## From a string
/// ```rust,no_run
/// use splitboard::Splitboard;
///
/// # fn main() -> splitboard::Result<()> {
/// let xml = std::fs::read_to_string("results.xml").unwrap();
/// let report = Splitboard::parse(&xml)?;
/// # Ok(())
/// # }
/// ```
///
/// ## From a file
/// ```rust,no_run
/// use splitboard::Splitboard;
///
/// # fn main() -> splitboard::Result<()> {
/// let report = Splitboard::open("results.xml")?;
/// # Ok(())
/// # }
/// ```
pub struct Splitboard;

impl Splitboard {
    /// Process an IOF results XML document from raw text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not well-formed XML, if a required
    /// element or text node is absent, or if a time or position is not an
    /// integer.
    pub fn parse(xml: &str) -> Result<Report> {
        report::process_results(xml)
    }

    /// Read a results file from disk and process it.
    ///
    /// Handles NUL-padded exports and validates UTF-8 before parsing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, in addition to every
    /// error [`Splitboard::parse`] can return.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Report> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| ReportError::file_error(path.to_path_buf(), e))?;
        let xml = xml_utils::extract_xml_from_bytes(&bytes)?;
        report::process_results(&xml)
    }
}
