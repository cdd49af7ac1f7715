//! Report data model
//!
//! These are the structures a results publisher consumes: event metadata,
//! per-competitor results with their control-point splits, and the gap
//! annotations added by the split analyzer. Everything derives serde so a
//! downstream publisher can serialize the report however it likes; the
//! crate itself imposes no wire format.

use serde::{Deserialize, Serialize};

/// Event metadata taken from the first `Event` and `ClassResult` elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Event name
    pub name: String,
    /// Name of the (first) competition class in the document
    pub class_name: String,
    /// Event date as written in the document (not parsed)
    pub date: String,
}

/// One control punch for one competitor.
///
/// `split_gap` and `split_gap_percentage` are `None` until the split
/// analyzer has annotated the record, and stay `None` for punches whose
/// split time is unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRecord {
    /// Opaque control identifier as written in the document
    pub control_code: String,
    /// Cumulative seconds from race start; `None` for a missing punch
    pub time: Option<i64>,
    /// Seconds since the previous control; `None` when either endpoint is unknown
    pub split_time: Option<i64>,
    /// Seconds behind the best split recorded at this control
    pub split_gap: Option<i64>,
    /// Gap as a percentage of the best split; `None` when the best split is zero
    pub split_gap_percentage: Option<f64>,
}

impl SplitRecord {
    /// Whether this punch was actually recorded.
    pub fn is_recorded(&self) -> bool {
        self.time.is_some()
    }
}

/// One competitor's full result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorResult {
    /// Given and family name, space joined
    pub full_name: String,
    /// Club / organisation name
    pub club_name: String,
    /// Finish status string from the document ("OK", "DidNotFinish", ...)
    pub status: String,
    /// Finishing position; present only when status is "OK"
    pub position: Option<u32>,
    /// Total elapsed seconds
    pub total_time: i64,
    /// Control punches in document order
    pub splits: Vec<SplitRecord>,
}

impl CompetitorResult {
    /// Whether this competitor holds a ranked position.
    pub fn is_ranked(&self) -> bool {
        self.position.is_some()
    }
}

/// The assembled report for one results document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Event metadata
    pub event: EventMetadata,
    /// Competitor results in document order (never re-sorted)
    pub results: Vec<CompetitorResult>,
    /// Total time of the first competitor in document order
    pub winning_time: i64,
}

impl Report {
    /// Look up a competitor by full name.
    pub fn competitor(&self, full_name: &str) -> Option<&CompetitorResult> {
        self.results.iter().find(|r| r.full_name == full_name)
    }
}

/// Format elapsed seconds as `M:SS` or `H:MM:SS` for display.
///
/// Negative values (possible for out-of-order split times) keep their sign.
pub fn format_elapsed(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{sign}{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{sign}{minutes}:{secs:02}")
    }
}
