//! Call record filtering
//!
//! Every filter axis defaults to "no constraint" and the whole filter is a
//! pure, stable predicate pass over the input slice: the output is a
//! subsequence of the input in original order, and the same inputs always
//! produce the same output.

use securecall_core::types::{CallRecord, DetectedType};
use serde::{Deserialize, Serialize};

/// Detected-type filter axis.
///
/// `Unrecognized` is the deserialization catch-all for values outside the
/// known set; it matches no record rather than failing, since filters are
/// driven by raw user input.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    /// No constraint on detected type
    #[default]
    All,
    /// Only human-classified calls
    Human,
    /// Only AI-classified calls
    Ai,
    /// Only uncertain calls
    Uncertain,
    /// Unknown filter value, matches nothing
    #[serde(other)]
    Unrecognized,
}

impl TypeFilter {
    /// Whether a record's classification passes this axis
    #[must_use]
    pub const fn matches(self, detected_type: DetectedType) -> bool {
        match self {
            Self::All => true,
            Self::Human => matches!(detected_type, DetectedType::Human),
            Self::Ai => matches!(detected_type, DetectedType::Ai),
            Self::Uncertain => matches!(detected_type, DetectedType::Uncertain),
            Self::Unrecognized => false,
        }
    }
}

/// Confidence-bucket filter axis.
///
/// Bucket boundaries: high is `>= 85`, medium is `[70, 85)`, low is `< 70`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceFilter {
    /// No constraint on confidence
    #[default]
    All,
    /// Confidence of 85 or more
    High,
    /// Confidence in `[70, 85)`
    Medium,
    /// Confidence below 70
    Low,
    /// Unknown filter value, matches nothing
    #[serde(other)]
    Unrecognized,
}

impl ConfidenceFilter {
    /// Whether a confidence value passes this axis
    #[must_use]
    pub const fn matches(self, confidence: u8) -> bool {
        match self {
            Self::All => true,
            Self::High => confidence >= 85,
            Self::Medium => confidence >= 70 && confidence < 85,
            Self::Low => confidence < 70,
            Self::Unrecognized => false,
        }
    }
}

/// Filter criteria for a call listing, built fresh per query
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against call and caller ids;
    /// empty means no constraint
    #[serde(default)]
    pub search_term: String,

    /// Detected-type axis
    #[serde(default)]
    pub detected_type: TypeFilter,

    /// Confidence-bucket axis
    #[serde(default)]
    pub confidence: ConfidenceFilter,
}

impl FilterCriteria {
    /// Whether a record passes every axis
    #[must_use]
    pub fn matches(&self, record: &CallRecord) -> bool {
        self.matches_search(record)
            && self.detected_type.matches(record.detected_type)
            && self.confidence.matches(record.confidence)
    }

    fn matches_search(&self, record: &CallRecord) -> bool {
        if self.search_term.is_empty() {
            return true;
        }

        let needle = self.search_term.to_lowercase();
        record.caller_id.to_lowercase().contains(&needle)
            || record.id.to_lowercase().contains(&needle)
    }
}

/// Filter records against the criteria, preserving input order
#[must_use]
pub fn filter_records<'a>(
    records: &'a [CallRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a CallRecord> {
    records.iter().filter(|call| criteria.matches(call)).collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::field_reassign_with_default)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn record(id: &str, caller_id: &str, detected_type: DetectedType, confidence: u8) -> CallRecord {
        CallRecord {
            id: id.to_string(),
            caller_id: caller_id.to_string(),
            detected_type,
            confidence,
            ..CallRecord::default()
        }
    }

    fn sample_records() -> Vec<CallRecord> {
        vec![
            record("CALL-001", "****-****-1234", DetectedType::Ai, 94),
            record("CALL-002", "****-****-5678", DetectedType::Human, 87),
            record("CALL-003", "****-****-9012", DetectedType::Uncertain, 63),
            record("CALL-004", "****-****-3456", DetectedType::Ai, 89),
            record("CALL-005", "****-****-7890", DetectedType::Human, 92),
        ]
    }

    fn ids<'a>(filtered: &[&'a CallRecord]) -> Vec<&'a str> {
        filtered.iter().map(|call| call.id.as_str()).collect()
    }

    #[test]
    fn test_unconstrained_criteria_is_identity() {
        let records = sample_records();
        let filtered = filter_records(&records, &FilterCriteria::default());

        assert_eq!(filtered.len(), records.len());
        assert_eq!(
            ids(&filtered),
            vec!["CALL-001", "CALL-002", "CALL-003", "CALL-004", "CALL-005"]
        );
    }

    #[test]
    fn test_type_filter_selects_only_matching() {
        let records = sample_records();
        let criteria = FilterCriteria {
            detected_type: TypeFilter::Ai,
            ..FilterCriteria::default()
        };

        let filtered = filter_records(&records, &criteria);
        assert_eq!(ids(&filtered), vec!["CALL-001", "CALL-004"]);
    }

    #[test]
    fn test_spec_example_ai_only() {
        // criteria = { search: "", type: ai, confidence: all } over two
        // records picks only the AI one
        let records = vec![
            record("CALL-001", "****1234", DetectedType::Ai, 94),
            record("CALL-002", "****5678", DetectedType::Human, 87),
        ];
        let criteria = FilterCriteria {
            detected_type: TypeFilter::Ai,
            ..FilterCriteria::default()
        };

        let filtered = filter_records(&records, &criteria);
        assert_eq!(ids(&filtered), vec!["CALL-001"]);
    }

    #[test]
    fn test_spec_example_search_on_caller() {
        let records = vec![
            record("CALL-001", "****1234", DetectedType::Ai, 94),
            record("CALL-002", "****5678", DetectedType::Human, 87),
        ];
        let criteria = FilterCriteria {
            search_term: "5678".to_string(),
            ..FilterCriteria::default()
        };

        let filtered = filter_records(&records, &criteria);
        assert_eq!(ids(&filtered), vec!["CALL-002"]);
    }

    #[test]
    fn test_search_matches_call_id_case_insensitive() {
        let records = sample_records();
        let criteria = FilterCriteria {
            search_term: "call-003".to_string(),
            ..FilterCriteria::default()
        };

        let filtered = filter_records(&records, &criteria);
        assert_eq!(ids(&filtered), vec!["CALL-003"]);
    }

    #[test]
    fn test_axes_combine_conjunctively() {
        let records = sample_records();
        let criteria = FilterCriteria {
            search_term: "call".to_string(),
            detected_type: TypeFilter::Human,
            confidence: ConfidenceFilter::High,
        };

        let filtered = filter_records(&records, &criteria);
        assert_eq!(ids(&filtered), vec!["CALL-002", "CALL-005"]);
    }

    #[rstest]
    #[case(ConfidenceFilter::High, vec!["CALL-001", "CALL-002", "CALL-004", "CALL-005"])]
    #[case(ConfidenceFilter::Medium, vec![])]
    #[case(ConfidenceFilter::Low, vec!["CALL-003"])]
    fn test_confidence_buckets(
        #[case] confidence: ConfidenceFilter,
        #[case] expected: Vec<&str>,
    ) {
        let records = sample_records();
        let criteria = FilterCriteria {
            confidence,
            ..FilterCriteria::default()
        };

        assert_eq!(ids(&filter_records(&records, &criteria)), expected);
    }

    #[test]
    fn test_confidence_boundary_85_is_high_not_medium() {
        let records = vec![record("CALL-100", "****0000", DetectedType::Human, 85)];

        let high = FilterCriteria {
            confidence: ConfidenceFilter::High,
            ..FilterCriteria::default()
        };
        let medium = FilterCriteria {
            confidence: ConfidenceFilter::Medium,
            ..FilterCriteria::default()
        };

        assert_eq!(filter_records(&records, &high).len(), 1);
        assert_eq!(filter_records(&records, &medium).len(), 0);
    }

    #[test]
    fn test_confidence_boundary_70_is_medium_not_low() {
        let records = vec![record("CALL-101", "****0000", DetectedType::Human, 70)];

        let medium = FilterCriteria {
            confidence: ConfidenceFilter::Medium,
            ..FilterCriteria::default()
        };
        let low = FilterCriteria {
            confidence: ConfidenceFilter::Low,
            ..FilterCriteria::default()
        };

        assert_eq!(filter_records(&records, &medium).len(), 1);
        assert_eq!(filter_records(&records, &low).len(), 0);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let criteria = FilterCriteria {
            search_term: "anything".to_string(),
            detected_type: TypeFilter::Ai,
            confidence: ConfidenceFilter::High,
        };

        assert!(filter_records(&[], &criteria).is_empty());
        assert!(filter_records(&[], &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn test_unrecognized_axis_matches_nothing() {
        let records = sample_records();

        let criteria = FilterCriteria {
            detected_type: TypeFilter::Unrecognized,
            ..FilterCriteria::default()
        };
        assert!(filter_records(&records, &criteria).is_empty());

        let criteria = FilterCriteria {
            confidence: ConfidenceFilter::Unrecognized,
            ..FilterCriteria::default()
        };
        assert!(filter_records(&records, &criteria).is_empty());
    }

    #[test]
    fn test_unknown_filter_strings_deserialize_to_unrecognized() {
        let type_filter: TypeFilter = serde_json::from_str("\"robot\"").unwrap();
        assert_eq!(type_filter, TypeFilter::Unrecognized);

        let confidence: ConfidenceFilter = serde_json::from_str("\"extreme\"").unwrap();
        assert_eq!(confidence, ConfidenceFilter::Unrecognized);
    }

    #[test]
    fn test_criteria_default_is_unconstrained() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.search_term, "");
        assert_eq!(criteria.detected_type, TypeFilter::All);
        assert_eq!(criteria.confidence, ConfidenceFilter::All);
    }

    prop_compose! {
        fn arb_record()(
            id_suffix in 0u32..1000,
            caller_digits in 0u32..10000,
            type_pick in 0u8..3,
            confidence in 0u8..=100,
        ) -> CallRecord {
            let detected_type = match type_pick {
                0 => DetectedType::Human,
                1 => DetectedType::Ai,
                _ => DetectedType::Uncertain,
            };
            record(
                &format!("CALL-{id_suffix:03}"),
                &format!("****-****-{caller_digits:04}"),
                detected_type,
                confidence,
            )
        }
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            prop_oneof![Just(String::new()), "[a-z0-9]{1,4}"],
            prop_oneof![
                Just(TypeFilter::All),
                Just(TypeFilter::Human),
                Just(TypeFilter::Ai),
                Just(TypeFilter::Uncertain),
            ],
            prop_oneof![
                Just(ConfidenceFilter::All),
                Just(ConfidenceFilter::High),
                Just(ConfidenceFilter::Medium),
                Just(ConfidenceFilter::Low),
            ],
        )
            .prop_map(|(search_term, detected_type, confidence)| FilterCriteria {
                search_term,
                detected_type,
                confidence,
            })
    }

    proptest! {
        #[test]
        fn test_output_never_grows(
            records in proptest::collection::vec(arb_record(), 0..50),
            criteria in arb_criteria(),
        ) {
            let filtered = filter_records(&records, &criteria);
            prop_assert!(filtered.len() <= records.len());
        }

        #[test]
        fn test_soundness_and_completeness(
            records in proptest::collection::vec(arb_record(), 0..50),
            criteria in arb_criteria(),
        ) {
            let filtered = filter_records(&records, &criteria);

            // Every output record satisfies the criteria
            for call in &filtered {
                prop_assert!(criteria.matches(call));
            }

            // Every input record satisfying the criteria is in the output
            let expected = records.iter().filter(|call| criteria.matches(call)).count();
            prop_assert_eq!(filtered.len(), expected);
        }

        #[test]
        fn test_order_preserved(
            records in proptest::collection::vec(arb_record(), 0..50),
            criteria in arb_criteria(),
        ) {
            let filtered = filter_records(&records, &criteria);

            // Output positions are strictly increasing input positions
            let mut last_index = None;
            for call in filtered {
                let index = records
                    .iter()
                    .position(|candidate| std::ptr::eq(candidate, call));
                prop_assert!(index.is_some());
                if let (Some(prev), Some(current)) = (last_index, index) {
                    prop_assert!(current > prev);
                }
                last_index = index;
            }
        }

        #[test]
        fn test_filter_is_idempotent(
            records in proptest::collection::vec(arb_record(), 0..50),
            criteria in arb_criteria(),
        ) {
            let once: Vec<CallRecord> = filter_records(&records, &criteria)
                .into_iter()
                .cloned()
                .collect();
            let twice = filter_records(&once, &criteria);

            prop_assert_eq!(once.len(), twice.len());
        }
    }
}
