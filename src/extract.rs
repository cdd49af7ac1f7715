//! Extraction of event metadata and competitor results from the document tree
//!
//! Every lookup here is required: a results document missing any of these
//! elements is malformed, and extraction aborts the whole pipeline rather
//! than skipping records. Descendant lookups return the first match in
//! document order, which is what makes "first `Name` under a
//! `PersonResult`" the person's name block and "first `Time` under a
//! `Result`" the total time ahead of any `SplitTime` children.

use tracing::trace;

use crate::Result;
use crate::dom::Element;
use crate::model::{CompetitorResult, EventMetadata};
use crate::splits::compute_splits;

/// Status string that carries a ranked position.
const STATUS_OK: &str = "OK";

/// Extract event name, date, and the first class name.
pub fn extract_event_metadata(root: &Element) -> Result<EventMetadata> {
    let event = root.require_descendant("Event")?;
    let name = event.require_descendant("Name")?.require_text()?.to_string();
    let date = event.require_descendant("Date")?.require_text()?.to_string();

    let class_result = root.require_descendant("ClassResult")?;
    let class_name = class_result.require_descendant("Name")?.require_text()?.to_string();

    Ok(EventMetadata { name, class_name, date })
}

/// Extract one competitor's result from a `PersonResult` element.
pub fn extract_competitor(person_result: &Element) -> Result<CompetitorResult> {
    let name = person_result.require_descendant("Name")?;
    let family = name.require_child("Family")?.require_text()?;
    let given = name.require_child("Given")?.require_text()?;
    let full_name = format!("{given} {family}");

    let organisation = person_result.require_descendant("Organisation")?;
    let club_name = organisation.require_child("Name")?.require_text()?.to_string();

    let result = person_result.require_descendant("Result")?;
    let status = result.require_descendant("Status")?.require_text()?.to_string();

    // Only an OK finish carries a rank; anything else has no meaningful one.
    let position = if status == STATUS_OK {
        Some(result.require_child("Position")?.require_integer_text()?)
    } else {
        None
    };

    let total_time = result.require_descendant("Time")?.require_integer_text()?;
    let splits = compute_splits(person_result)?;

    trace!(name = %full_name, status = %status, punches = splits.len(), "Extracted competitor");

    Ok(CompetitorResult { full_name, club_name, status, position, total_time, splits })
}

/// Extract every competitor in the document, preserving document order.
pub fn extract_result_list(root: &Element) -> Result<Vec<CompetitorResult>> {
    root.descendants("PersonResult")
        .into_iter()
        .map(extract_competitor)
        .collect()
}
