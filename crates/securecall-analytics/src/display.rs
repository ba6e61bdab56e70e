//! Derived display classifications
//!
//! Pure, total mappings from domain states to badge variants and severity
//! tiers. Every mapping has an explicit arm per enumerated state; states
//! outside the call/review domain degrade to a neutral variant instead of
//! failing.

use crate::health::{HealthStatus, ModelStage};
use securecall_core::types::{
    AlertSeverity, CallChannel, DetectedType, ReviewOutcome, ReviewPriority, ReviewStatus,
};
use serde::{Deserialize, Serialize};

/// Badge rendering variant consumed by the presentation layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    /// Primary emphasis
    Default,
    /// Neutral, de-emphasized
    Secondary,
    /// Alerting, something is wrong
    Destructive,
    /// Positive confirmation
    Success,
    /// Needs attention
    Warning,
    /// Informational
    Info,
    /// Bordered, minimal emphasis
    Outline,
}

impl std::fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Secondary => write!(f, "secondary"),
            Self::Destructive => write!(f, "destructive"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
            Self::Outline => write!(f, "outline"),
        }
    }
}

/// Severity tier derived from a confidence score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// Confidence of 85 or more
    High,
    /// Confidence in `[70, 85)`
    Medium,
    /// Confidence below 70
    Low,
}

impl ConfidenceTier {
    /// Map a confidence score to its severity tier
    #[must_use]
    pub const fn from_confidence(confidence: u8) -> Self {
        if confidence >= 85 {
            Self::High
        } else if confidence >= 70 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Badge variant for this tier: high confidence reads as good news,
    /// low confidence as trouble
    #[must_use]
    pub const fn variant(self) -> BadgeVariant {
        match self {
            Self::High => BadgeVariant::Success,
            Self::Medium => BadgeVariant::Warning,
            Self::Low => BadgeVariant::Destructive,
        }
    }
}

/// Badge variant for a detected type
#[must_use]
pub const fn detected_type_variant(detected_type: DetectedType) -> BadgeVariant {
    match detected_type {
        DetectedType::Ai => BadgeVariant::Destructive,
        DetectedType::Human => BadgeVariant::Success,
        DetectedType::Uncertain => BadgeVariant::Warning,
    }
}

/// Badge variant for a reviewer outcome
#[must_use]
pub const fn review_outcome_variant(outcome: ReviewOutcome) -> BadgeVariant {
    match outcome {
        ReviewOutcome::ConfirmedAi => BadgeVariant::Destructive,
        ReviewOutcome::FalseAlarm => BadgeVariant::Success,
        ReviewOutcome::Pending => BadgeVariant::Warning,
    }
}

/// Badge variant for a full review state; unreviewed records render as a
/// plain outline badge
#[must_use]
pub const fn review_status_variant(status: ReviewStatus) -> BadgeVariant {
    match status {
        ReviewStatus::NotReviewed => BadgeVariant::Outline,
        ReviewStatus::Reviewed(outcome) => review_outcome_variant(outcome),
    }
}

/// Badge variant for an alert severity
#[must_use]
pub const fn alert_severity_variant(severity: AlertSeverity) -> BadgeVariant {
    match severity {
        AlertSeverity::High => BadgeVariant::Destructive,
        AlertSeverity::Medium => BadgeVariant::Warning,
        AlertSeverity::Low => BadgeVariant::Info,
    }
}

/// Badge variant for a review queue priority
#[must_use]
pub const fn review_priority_variant(priority: ReviewPriority) -> BadgeVariant {
    match priority {
        ReviewPriority::High => BadgeVariant::Destructive,
        ReviewPriority::Medium => BadgeVariant::Warning,
        ReviewPriority::Low => BadgeVariant::Info,
    }
}

/// Badge variant for a health status reading
#[must_use]
pub const fn health_status_variant(status: HealthStatus) -> BadgeVariant {
    match status {
        HealthStatus::Excellent | HealthStatus::Good => BadgeVariant::Success,
        HealthStatus::Warning => BadgeVariant::Warning,
        HealthStatus::Error => BadgeVariant::Destructive,
    }
}

/// Badge variant for a model deployment stage
#[must_use]
pub const fn model_stage_variant(stage: ModelStage) -> BadgeVariant {
    match stage {
        ModelStage::Active => BadgeVariant::Success,
        ModelStage::Staging => BadgeVariant::Warning,
        ModelStage::Deprecated => BadgeVariant::Secondary,
    }
}

/// Badge variant for a call channel; both directions render the same
/// outline badge
#[must_use]
pub const fn channel_variant(channel: CallChannel) -> BadgeVariant {
    match channel {
        CallChannel::Inbound | CallChannel::Outbound => BadgeVariant::Outline,
    }
}

/// Badge variant for the flagged column
#[must_use]
pub const fn flag_variant(flagged: bool) -> BadgeVariant {
    if flagged {
        BadgeVariant::Destructive
    } else {
        BadgeVariant::Secondary
    }
}
