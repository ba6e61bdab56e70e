//! KPI summary derived from a set of call records

use crate::display::BadgeVariant;
use securecall_core::types::{CallRecord, DetectedType};
use serde::{Deserialize, Serialize};

/// Aggregate detection figures for a call set
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetectionSummary {
    /// Total number of analyzed calls
    pub total_calls: usize,

    /// Calls classified as human
    pub human_calls: usize,

    /// Calls classified as AI
    pub ai_calls: usize,

    /// Calls below the decision threshold
    pub uncertain_calls: usize,

    /// Calls auto-flagged for attention
    pub flagged_calls: usize,

    /// Calls already through manual review
    pub reviewed_calls: usize,

    /// Share of AI calls, percent with one decimal
    pub ai_rate: f64,

    /// Share of human calls, percent with one decimal
    pub human_rate: f64,

    /// Share of uncertain calls, percent with one decimal
    pub uncertain_rate: f64,

    /// Mean confidence across flagged calls, percent with one decimal
    pub avg_flagged_confidence: f64,

    /// Mean duration of AI calls in seconds
    pub avg_ai_duration_seconds: f64,

    /// Mean duration of human calls in seconds
    pub avg_human_duration_seconds: f64,
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[allow(clippy::cast_precision_loss)]
fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round1(count as f64 / total as f64 * 100.0)
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Compute the KPI summary over a call set.
///
/// An empty input yields an all-zero summary; no rate ever divides by zero.
#[must_use]
pub fn summarize(records: &[CallRecord]) -> DetectionSummary {
    let mut summary = DetectionSummary {
        total_calls: records.len(),
        ..DetectionSummary::default()
    };

    let mut flagged_confidence_sum = 0.0;
    let mut ai_duration_sum = 0.0;
    let mut human_duration_sum = 0.0;

    for call in records {
        match call.detected_type {
            DetectedType::Human => {
                summary.human_calls += 1;
                human_duration_sum += call.duration_seconds;
            }
            DetectedType::Ai => {
                summary.ai_calls += 1;
                ai_duration_sum += call.duration_seconds;
            }
            DetectedType::Uncertain => summary.uncertain_calls += 1,
        }

        if call.flagged {
            summary.flagged_calls += 1;
            flagged_confidence_sum += f64::from(call.confidence);
        }
        if call.reviewed {
            summary.reviewed_calls += 1;
        }
    }

    summary.ai_rate = rate(summary.ai_calls, summary.total_calls);
    summary.human_rate = rate(summary.human_calls, summary.total_calls);
    summary.uncertain_rate = rate(summary.uncertain_calls, summary.total_calls);
    summary.avg_flagged_confidence = round1(mean(flagged_confidence_sum, summary.flagged_calls));
    summary.avg_ai_duration_seconds = mean(ai_duration_sum, summary.ai_calls);
    summary.avg_human_duration_seconds = mean(human_duration_sum, summary.human_calls);

    summary
}

/// Direction of a period-over-period change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Value increased
    Up,
    /// Value decreased
    Down,
    /// No change
    Flat,
}

impl TrendDirection {
    /// Derive the direction from a signed percentage change
    #[must_use]
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Self::Up
        } else if change < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    /// Badge variant for a trend arrow
    #[must_use]
    pub const fn variant(self) -> BadgeVariant {
        match self {
            Self::Up => BadgeVariant::Success,
            Self::Down => BadgeVariant::Destructive,
            Self::Flat => BadgeVariant::Secondary,
        }
    }
}

/// A period-over-period change attached to a KPI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendDelta {
    /// Signed percentage change
    pub value: f64,

    /// Comparison period ("last week")
    pub period: String,
}

impl TrendDelta {
    /// Direction of this delta
    #[must_use]
    pub fn direction(&self) -> TrendDirection {
        TrendDirection::from_change(self.value)
    }
}
