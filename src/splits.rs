//! Per-control split computation for one competitor
//!
//! Walks a competitor's `SplitTime` punches in document order and derives
//! the incremental split for each one. The fold carries the previous
//! punch's cumulative time as an `Option`: the race start counts as zero,
//! and a missing punch makes the reference unknown, which leaves exactly
//! the next split without a value before normal subtraction resumes.

use crate::Result;
use crate::dom::Element;
use crate::model::SplitRecord;

/// Attribute value marking a punch the timekeeping never recorded.
const STATUS_MISSING: &str = "Missing";

/// Compute the ordered split records for one `PersonResult` element.
///
/// Punch order is taken from the document and assumed to be control
/// visiting order; it is not re-sorted. Negative splits (out-of-order
/// timestamps in the source) flow through verbatim.
pub fn compute_splits(person_result: &Element) -> Result<Vec<SplitRecord>> {
    let mut splits = Vec::new();
    // Race start is the reference for the first control.
    let mut previous: Option<i64> = Some(0);

    for punch in person_result.descendants("SplitTime") {
        let control_code = punch.require_child("ControlCode")?.require_text()?.to_string();

        // A "Missing" punch has no time even if the document carries one.
        let time = if punch.attr("status") == Some(STATUS_MISSING) {
            None
        } else {
            Some(punch.require_child("Time")?.require_integer_text()?)
        };

        let split_time = match (previous, time) {
            (Some(previous), Some(time)) => Some(time - previous),
            _ => None,
        };

        splits.push(SplitRecord {
            control_code,
            time,
            split_time,
            split_gap: None,
            split_gap_percentage: None,
        });

        previous = time;
    }

    Ok(splits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_result(punches: &str) -> Element {
        let xml = format!("<PersonResult><Result><Time>999</Time>{punches}</Result></PersonResult>");
        Element::parse(&xml).unwrap()
    }

    fn punch(control: &str, time: i64) -> String {
        format!("<SplitTime><ControlCode>{control}</ControlCode><Time>{time}</Time></SplitTime>")
    }

    fn missing_punch(control: &str) -> String {
        format!("<SplitTime status=\"Missing\"><ControlCode>{control}</ControlCode></SplitTime>")
    }

    #[test]
    fn first_split_equals_first_cumulative_time() {
        let element = person_result(&[punch("31", 120), punch("32", 300)].concat());
        let splits = compute_splits(&element).unwrap();

        assert_eq!(splits.len(), 2);
        assert_eq!(splits[0].time, Some(120));
        assert_eq!(splits[0].split_time, Some(120));
        assert_eq!(splits[1].split_time, Some(180));
    }

    #[test]
    fn missing_punch_absents_exactly_the_next_split() {
        let element = person_result(
            &[punch("31", 100), missing_punch("32"), punch("33", 400), punch("34", 460)].concat(),
        );
        let splits = compute_splits(&element).unwrap();

        assert_eq!(splits[0].split_time, Some(100));

        // The missing punch itself has neither time nor split
        assert_eq!(splits[1].time, None);
        assert_eq!(splits[1].split_time, None);

        // The next punch has a time but no reference to subtract from
        assert_eq!(splits[2].time, Some(400));
        assert_eq!(splits[2].split_time, None);

        // After that, subtraction resumes against the new reference
        assert_eq!(splits[3].split_time, Some(60));
    }

    #[test]
    fn missing_punch_ignores_any_recorded_time() {
        let xml = "<PersonResult><SplitTime status=\"Missing\">\
                   <ControlCode>31</ControlCode><Time>120</Time></SplitTime></PersonResult>";
        let element = Element::parse(xml).unwrap();
        let splits = compute_splits(&element).unwrap();
        assert_eq!(splits[0].time, None);
        assert_eq!(splits[0].split_time, None);
    }

    #[test]
    fn consecutive_missing_punches_stay_absent_until_a_time_returns() {
        let element = person_result(
            &[missing_punch("31"), missing_punch("32"), punch("33", 500), punch("34", 650)]
                .concat(),
        );
        let splits = compute_splits(&element).unwrap();

        assert_eq!(splits[0].split_time, None);
        assert_eq!(splits[1].split_time, None);
        assert_eq!(splits[2].split_time, None);
        assert_eq!(splits[3].split_time, Some(150));
    }

    #[test]
    fn negative_splits_flow_through() {
        let element = person_result(&[punch("31", 200), punch("32", 150)].concat());
        let splits = compute_splits(&element).unwrap();
        assert_eq!(splits[1].split_time, Some(-50));
    }

    #[test]
    fn control_codes_are_opaque_strings() {
        let element = person_result(&[punch("100F", 30)].concat());
        let splits = compute_splits(&element).unwrap();
        assert_eq!(splits[0].control_code, "100F");
    }

    #[test]
    fn no_punches_yields_empty_splits() {
        let element = person_result("");
        assert!(compute_splits(&element).unwrap().is_empty());
    }

    #[test]
    fn unparseable_time_is_fatal() {
        let xml = "<PersonResult><SplitTime>\
                   <ControlCode>31</ControlCode><Time>1m30s</Time></SplitTime></PersonResult>";
        let element = Element::parse(xml).unwrap();
        assert!(compute_splits(&element).is_err());
    }

    #[test]
    fn punch_without_control_code_is_fatal() {
        let xml = "<PersonResult><SplitTime><Time>120</Time></SplitTime></PersonResult>";
        let element = Element::parse(xml).unwrap();
        assert!(compute_splits(&element).is_err());
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn document_from_times(times: &[Option<i64>]) -> Element {
            let punches: String = times
                .iter()
                .enumerate()
                .map(|(i, time)| match time {
                    Some(t) => punch(&format!("{}", 31 + i), *t),
                    None => missing_punch(&format!("{}", 31 + i)),
                })
                .collect();
            person_result(&punches)
        }

        proptest! {
            #[test]
            fn all_present_splits_telescope_to_the_last_time(
                times in prop::collection::vec(0i64..100_000, 1..20)
            ) {
                let element = document_from_times(
                    &times.iter().copied().map(Some).collect::<Vec<_>>(),
                );
                let splits = compute_splits(&element).unwrap();

                // Every split present, and the sum telescopes to the final
                // cumulative time
                let sum: i64 = splits.iter().map(|s| s.split_time.unwrap()).sum();
                prop_assert_eq!(sum, *times.last().unwrap());
                prop_assert_eq!(splits[0].split_time, Some(times[0]));
            }

            #[test]
            fn split_is_present_iff_punch_and_reference_are(
                times in prop::collection::vec(prop::option::of(0i64..100_000), 1..20)
            ) {
                let element = document_from_times(&times);
                let splits = compute_splits(&element).unwrap();
                prop_assert_eq!(splits.len(), times.len());

                let mut previous = Some(0i64);
                for (record, time) in splits.iter().zip(&times) {
                    prop_assert_eq!(record.time, *time);
                    match (previous, *time) {
                        (Some(p), Some(t)) => prop_assert_eq!(record.split_time, Some(t - p)),
                        _ => prop_assert_eq!(record.split_time, None),
                    }
                    previous = *time;
                }
            }
        }
    }
}
