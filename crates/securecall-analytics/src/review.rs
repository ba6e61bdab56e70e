//! Manual review queue and fraud aggregation helpers

use indexmap::IndexMap;
use securecall_core::DetectionConfig;
use securecall_core::types::{CallRecord, CallerId, DetectedType, PendingReview};
use serde::{Deserialize, Serialize};

/// Order a review queue by priority, high first.
///
/// The sort is stable, so entries with equal priority keep their queue
/// arrival order.
#[must_use]
pub fn sort_by_priority(mut reviews: Vec<PendingReview>) -> Vec<PendingReview> {
    reviews.sort_by_key(|review| review.priority);
    reviews
}

/// Select the loaded calls a reviewer should look at next: anything whose
/// confidence sits in the configured review band, plus flagged calls that
/// nobody has reviewed yet. Preserves record order.
#[must_use]
pub fn review_candidates<'a>(
    records: &'a [CallRecord],
    detection: &DetectionConfig,
) -> Vec<&'a CallRecord> {
    records
        .iter()
        .filter(|call| {
            detection.in_review_band(call.confidence) || (call.flagged && !call.reviewed)
        })
        .collect()
}

/// A caller repeatedly flagged for AI calls
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepeatOffender {
    /// Masked caller
    pub caller_id: CallerId,

    /// Number of flagged AI calls from this caller
    pub flagged_calls: u32,
}

/// Find callers with at least `min_flagged` flagged AI-classified calls,
/// most frequent first; ties keep first-appearance order.
#[must_use]
pub fn repeat_offenders(records: &[CallRecord], min_flagged: u32) -> Vec<RepeatOffender> {
    let mut counts: IndexMap<&str, u32> = IndexMap::new();

    for call in records {
        if call.flagged && call.detected_type == DetectedType::Ai {
            *counts.entry(call.caller_id.as_str()).or_insert(0) += 1;
        }
    }

    let mut offenders: Vec<RepeatOffender> = counts
        .into_iter()
        .filter(|&(_, flagged_calls)| flagged_calls >= min_flagged)
        .map(|(caller_id, flagged_calls)| RepeatOffender {
            caller_id: caller_id.to_string(),
            flagged_calls,
        })
        .collect();

    offenders.sort_by(|a, b| b.flagged_calls.cmp(&a.flagged_calls));
    offenders
}
