//! Best-split computation and gap annotation
//!
//! Two pure passes over the extracted results: the first collects the
//! fastest known split per control across the whole field, the second
//! rebuilds every competitor's records with the gap to that best time.
//! Records whose split time is unknown are annotated with nothing and
//! never consult the best-time map.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{CompetitorResult, SplitRecord};

/// Fastest known split per control code.
pub type BestSplitTimes = HashMap<String, i64>;

/// Pass 1: the minimum present split time at each control.
///
/// Controls where no competitor has a known split are absent from the map.
pub fn best_split_times(results: &[CompetitorResult]) -> BestSplitTimes {
    let mut best = BestSplitTimes::new();

    for competitor in results {
        for split in &competitor.splits {
            if let Some(split_time) = split.split_time {
                best.entry(split.control_code.clone())
                    .and_modify(|fastest| {
                        if split_time < *fastest {
                            *fastest = split_time;
                        }
                    })
                    .or_insert(split_time);
            }
        }
    }

    debug!(controls = best.len(), "Computed best split times");
    best
}

/// Pass 2: rebuild every competitor's splits with gap-to-best annotations.
///
/// A record with a known split time gains `split_gap` (its distance to the
/// control's best, zero for the best itself) and `split_gap_percentage`.
/// The percentage is undefined when the best split is zero seconds.
pub fn annotate_splits(
    results: Vec<CompetitorResult>,
    best: &BestSplitTimes,
) -> Vec<CompetitorResult> {
    results
        .into_iter()
        .map(|mut competitor| {
            let splits = std::mem::take(&mut competitor.splits);
            competitor.splits =
                splits.into_iter().map(|split| annotate_record(split, best)).collect();
            competitor
        })
        .collect()
}

fn annotate_record(split: SplitRecord, best: &BestSplitTimes) -> SplitRecord {
    let Some(split_time) = split.split_time else {
        return SplitRecord { split_gap: None, split_gap_percentage: None, ..split };
    };

    // A present split time always has an entry from pass 1; the fallback
    // only triggers on a map that did not come from these records.
    let Some(&best_time) = best.get(&split.control_code) else {
        return SplitRecord { split_gap: None, split_gap_percentage: None, ..split };
    };

    let split_gap = split_time - best_time;
    let split_gap_percentage = if best_time == 0 {
        None
    } else {
        Some((split_gap as f64 / best_time as f64) * 100.0)
    };

    SplitRecord { split_gap: Some(split_gap), split_gap_percentage, ..split }
}
