//! Top-level results processing pipeline
//!
//! Wires the stages together: input preparation, document parsing, event
//! metadata and result extraction, then the two split-analysis passes.
//! Each invocation is an independent pure transformation over one
//! document; nothing is shared across calls.

use tracing::debug;

use crate::analysis::{annotate_splits, best_split_times};
use crate::dom::Element;
use crate::extract::{extract_event_metadata, extract_result_list};
use crate::model::Report;
use crate::xml_utils::preprocess_results_xml;
use crate::{ReportError, Result};

/// Process a raw IOF results XML document into a [`Report`].
///
/// Fails fast on the first malformed element, unparseable time, or XML
/// syntax error; no partial report is ever produced.
pub fn process_results(xml: &str) -> Result<Report> {
    let cleaned = preprocess_results_xml(xml)?;
    let root = Element::parse(&cleaned)?;

    let event = extract_event_metadata(&root)?;
    let results = extract_result_list(&root)?;
    debug!(event = %event.name, class = %event.class_name, competitors = results.len(), "Extracted result list");

    // Winning time is the first competitor's total in document order, as
    // published lists put the winner first. It is not a computed minimum.
    let winning_time = results.first().map(|r| r.total_time).ok_or(ReportError::NoCompetitors)?;

    let best = best_split_times(&results);
    let results = annotate_splits(results, &best);

    Ok(Report { event, results, winning_time })
}
