//! Core data types for `SecureCall` analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Opaque call identifier type
pub type CallId = String;

/// Masked caller identifier type
pub type CallerId = String;

/// Call direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CallChannel {
    /// Call received by the monitored line
    Inbound,
    /// Call placed from the monitored line
    Outbound,
}

impl Default for CallChannel {
    fn default() -> Self {
        Self::Inbound
    }
}

impl std::fmt::Display for CallChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inbound => write!(f, "inbound"),
            Self::Outbound => write!(f, "outbound"),
        }
    }
}

/// Classification assigned to a call by the detection model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DetectedType {
    /// Caller classified as human
    Human,
    /// Caller classified as an AI system
    Ai,
    /// Classification below decision threshold
    Uncertain,
}

impl Default for DetectedType {
    fn default() -> Self {
        Self::Uncertain
    }
}

impl std::fmt::Display for DetectedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Ai => write!(f, "ai"),
            Self::Uncertain => write!(f, "uncertain"),
        }
    }
}

/// Outcome recorded by a human reviewer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewOutcome {
    /// Reviewer confirmed the AI classification
    ConfirmedAi,
    /// Reviewer rejected the AI classification
    FalseAlarm,
    /// Review started but no verdict yet
    Pending,
}

impl ReviewOutcome {
    /// Uppercase display label for table badges
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ConfirmedAi => "CONFIRMED AI",
            Self::FalseAlarm => "FALSE ALARM",
            Self::Pending => "PENDING",
        }
    }
}

impl std::fmt::Display for ReviewOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfirmedAi => write!(f, "confirmed-ai"),
            Self::FalseAlarm => write!(f, "false-alarm"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// Tagged view over the `reviewed` flag and the stored outcome.
///
/// A reviewed record with no stored outcome folds to `Reviewed(Pending)`,
/// which renders identically to an explicit pending outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    /// Record has not been through manual review
    NotReviewed,
    /// Record was reviewed with the given outcome
    Reviewed(ReviewOutcome),
}

/// A single analyzed call
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CallRecord {
    /// Unique identifier for the call
    #[validate(length(min = 1, max = 64))]
    pub id: CallId,

    /// Masked phone number of the caller
    #[validate(length(min = 1, max = 32))]
    pub caller_id: CallerId,

    /// When the call occurred
    pub timestamp: DateTime<Utc>,

    /// Call duration in seconds
    pub duration_seconds: f64,

    /// Call direction
    pub channel: CallChannel,

    /// Model classification
    pub detected_type: DetectedType,

    /// Model confidence, 0-100
    #[validate(range(max = 100))]
    pub confidence: u8,

    /// Whether the call was auto-flagged for attention
    pub flagged: bool,

    /// Whether a human reviewer has looked at the call
    pub reviewed: bool,

    /// Reviewer verdict, meaningful only when `reviewed` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_outcome: Option<ReviewOutcome>,
}

impl CallRecord {
    /// Tagged review state derived from `reviewed` and `reviewer_outcome`
    #[must_use]
    pub const fn review_status(&self) -> ReviewStatus {
        if self.reviewed {
            match self.reviewer_outcome {
                Some(outcome) => ReviewStatus::Reviewed(outcome),
                None => ReviewStatus::Reviewed(ReviewOutcome::Pending),
            }
        } else {
            ReviewStatus::NotReviewed
        }
    }
}

impl Default for CallRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            caller_id: String::new(),
            timestamp: Utc::now(),
            duration_seconds: 0.0,
            channel: CallChannel::default(),
            detected_type: DetectedType::default(),
            confidence: 0,
            flagged: false,
            reviewed: false,
            reviewer_outcome: None,
        }
    }
}

/// Category of a fraud alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    /// Same caller repeatedly flagged for AI calls
    RepeatOffender,
    /// Regional spike in detections
    Hotspot,
    /// Compliance or disclosure violation
    Regulatory,
    /// Unusual call pattern
    Anomaly,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RepeatOffender => write!(f, "repeat-offender"),
            Self::Hotspot => write!(f, "hotspot"),
            Self::Regulatory => write!(f, "regulatory"),
            Self::Anomaly => write!(f, "anomaly"),
        }
    }
}

/// Severity of a fraud alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Requires immediate attention
    High,
    /// Should be reviewed soon
    Medium,
    /// Informational
    Low,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// A fraud or compliance alert raised over call activity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FraudAlert {
    /// Unique alert identifier
    #[validate(length(min = 1, max = 64))]
    pub id: String,

    /// Alert category
    pub kind: AlertKind,

    /// Alert severity
    pub severity: AlertSeverity,

    /// Short headline
    #[validate(length(max = 255))]
    pub title: String,

    /// Full description
    pub description: String,

    /// Affected region, if regional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Offending caller, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<CallerId>,

    /// Number of calls behind the alert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_count: Option<u32>,

    /// When the alert was raised
    pub timestamp: DateTime<Utc>,
}

/// Priority of a queued manual review.
///
/// Variant order is the queue order, so sorting ascending puts high
/// priority entries first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ReviewPriority {
    /// Review as soon as possible
    High,
    /// Normal queue position
    Medium,
    /// Review when idle
    Low,
}

impl std::fmt::Display for ReviewPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// A call waiting for human review
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PendingReview {
    /// Call identifier
    #[validate(length(min = 1, max = 64))]
    pub id: CallId,

    /// Masked caller
    #[validate(length(min = 1, max = 32))]
    pub caller_id: CallerId,

    /// Model confidence for the call, 0-100
    #[validate(range(max = 100))]
    pub confidence: u8,

    /// Why the call was queued
    pub flagged_reason: String,

    /// Queue priority
    pub priority: ReviewPriority,

    /// When the call was queued
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
#[allow(
    clippy::missing_panics_doc,
    clippy::field_reassign_with_default,
    clippy::float_cmp,
    clippy::uninlined_format_args,
    clippy::match_same_arms
)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use validator::Validate;

    #[test]
    fn test_detected_type_default() {
        assert_eq!(DetectedType::default(), DetectedType::Uncertain);
    }

    #[test]
    fn test_detected_type_display() {
        assert_eq!(format!("{}", DetectedType::Human), "human");
        assert_eq!(format!("{}", DetectedType::Ai), "ai");
        assert_eq!(format!("{}", DetectedType::Uncertain), "uncertain");
    }

    #[test]
    fn test_detected_type_serialization() {
        let detected = DetectedType::Ai;
        let serialized = serde_json::to_string(&detected).unwrap();
        assert_eq!(serialized, "\"ai\"");

        let deserialized: DetectedType = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, DetectedType::Ai);
    }

    #[test]
    fn test_review_outcome_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&ReviewOutcome::ConfirmedAi).unwrap(),
            "\"confirmed-ai\""
        );
        assert_eq!(
            serde_json::to_string(&ReviewOutcome::FalseAlarm).unwrap(),
            "\"false-alarm\""
        );
        assert_eq!(
            serde_json::to_string(&ReviewOutcome::Pending).unwrap(),
            "\"pending\""
        );
    }

    #[test]
    fn test_review_outcome_labels() {
        assert_eq!(ReviewOutcome::ConfirmedAi.label(), "CONFIRMED AI");
        assert_eq!(ReviewOutcome::FalseAlarm.label(), "FALSE ALARM");
        assert_eq!(ReviewOutcome::Pending.label(), "PENDING");
    }

    #[test]
    fn test_channel_display_and_default() {
        assert_eq!(CallChannel::default(), CallChannel::Inbound);
        assert_eq!(format!("{}", CallChannel::Inbound), "inbound");
        assert_eq!(format!("{}", CallChannel::Outbound), "outbound");
    }

    #[test]
    fn test_call_record_default() {
        let call = CallRecord::default();
        assert_eq!(call.id, "");
        assert_eq!(call.detected_type, DetectedType::Uncertain);
        assert_eq!(call.confidence, 0);
        assert!(!call.flagged);
        assert!(!call.reviewed);
        assert!(call.reviewer_outcome.is_none());
    }

    #[test]
    fn test_review_status_not_reviewed() {
        let call = CallRecord::default();
        assert_eq!(call.review_status(), ReviewStatus::NotReviewed);
    }

    #[test]
    fn test_review_status_with_outcome() {
        let mut call = CallRecord::default();
        call.reviewed = true;
        call.reviewer_outcome = Some(ReviewOutcome::ConfirmedAi);

        assert_eq!(
            call.review_status(),
            ReviewStatus::Reviewed(ReviewOutcome::ConfirmedAi)
        );
    }

    #[test]
    fn test_review_status_folds_missing_outcome_to_pending() {
        let mut call = CallRecord::default();
        call.reviewed = true;
        call.reviewer_outcome = None;

        assert_eq!(
            call.review_status(),
            ReviewStatus::Reviewed(ReviewOutcome::Pending)
        );
    }

    #[test]
    fn test_review_status_ignores_stale_outcome_when_not_reviewed() {
        // Outcome without the reviewed flag is the not-yet-reviewed state
        let mut call = CallRecord::default();
        call.reviewed = false;
        call.reviewer_outcome = Some(ReviewOutcome::FalseAlarm);

        assert_eq!(call.review_status(), ReviewStatus::NotReviewed);
    }

    #[test]
    fn test_call_record_validation_valid() {
        let mut call = CallRecord::default();
        call.id = "CALL-001".to_string();
        call.caller_id = "****-****-1234".to_string();
        call.confidence = 94;

        assert!(call.validate().is_ok());
    }

    #[test]
    fn test_call_record_validation_empty_id() {
        let mut call = CallRecord::default();
        call.caller_id = "****-****-1234".to_string();

        let result = call.validate();
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("id"));
    }

    #[test]
    fn test_call_record_validation_confidence_out_of_range() {
        let mut call = CallRecord::default();
        call.id = "CALL-001".to_string();
        call.caller_id = "****-****-1234".to_string();
        call.confidence = 101;

        let result = call.validate();
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("confidence"));
    }

    #[test]
    fn test_call_record_validation_caller_id_too_long() {
        let mut call = CallRecord::default();
        call.id = "CALL-001".to_string();
        call.caller_id = "9".repeat(33);

        let result = call.validate();
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("caller_id"));
    }

    #[test]
    fn test_call_record_serialization_roundtrip() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 14, 32, 0).unwrap();
        let call = CallRecord {
            id: "CALL-001".to_string(),
            caller_id: "****-****-1234".to_string(),
            timestamp,
            duration_seconds: 263.0,
            channel: CallChannel::Inbound,
            detected_type: DetectedType::Ai,
            confidence: 94,
            flagged: true,
            reviewed: true,
            reviewer_outcome: Some(ReviewOutcome::ConfirmedAi),
        };

        let serialized = serde_json::to_string(&call).unwrap();
        let deserialized: CallRecord = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.id, call.id);
        assert_eq!(deserialized.caller_id, call.caller_id);
        assert_eq!(deserialized.timestamp, call.timestamp);
        assert_eq!(deserialized.detected_type, call.detected_type);
        assert_eq!(deserialized.confidence, call.confidence);
        assert_eq!(deserialized.reviewer_outcome, call.reviewer_outcome);
    }

    #[test]
    fn test_call_record_missing_outcome_field_deserializes() {
        let json = r#"{
            "id": "CALL-002",
            "caller_id": "****-****-5678",
            "timestamp": "2024-01-15T14:28:00Z",
            "duration_seconds": 135.0,
            "channel": "outbound",
            "detected_type": "human",
            "confidence": 87,
            "flagged": false,
            "reviewed": false
        }"#;

        let call: CallRecord = serde_json::from_str(json).unwrap();
        assert_eq!(call.detected_type, DetectedType::Human);
        assert!(call.reviewer_outcome.is_none());
        assert_eq!(call.review_status(), ReviewStatus::NotReviewed);
    }

    #[test]
    fn test_alert_kind_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&AlertKind::RepeatOffender).unwrap(),
            "\"repeat-offender\""
        );
        assert_eq!(format!("{}", AlertKind::Hotspot), "hotspot");
    }

    #[test]
    fn test_fraud_alert_creation() {
        let now = Utc::now();
        let alert = FraudAlert {
            id: "ALERT-001".to_string(),
            kind: AlertKind::RepeatOffender,
            severity: AlertSeverity::High,
            title: "Frequent AI Caller Detected".to_string(),
            description: "Phone number flagged for AI calls 8 times in the past 24 hours"
                .to_string(),
            location: None,
            phone_number: Some("****-****-1234".to_string()),
            call_count: Some(8),
            timestamp: now,
        };

        assert!(alert.validate().is_ok());
        assert_eq!(alert.severity, AlertSeverity::High);
        assert_eq!(alert.call_count, Some(8));
    }

    #[test]
    fn test_priority_ordering_puts_high_first() {
        let mut priorities = vec![
            ReviewPriority::Low,
            ReviewPriority::High,
            ReviewPriority::Medium,
        ];
        priorities.sort();

        assert_eq!(
            priorities,
            vec![
                ReviewPriority::High,
                ReviewPriority::Medium,
                ReviewPriority::Low
            ]
        );
    }

    #[test]
    fn test_pending_review_serialization() {
        let review = PendingReview {
            id: "CALL-234".to_string(),
            caller_id: "****-****-9876".to_string(),
            confidence: 67,
            flagged_reason: "Low confidence score".to_string(),
            priority: ReviewPriority::Medium,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 13, 45, 0).unwrap(),
        };

        let serialized = serde_json::to_string(&review).unwrap();
        let deserialized: PendingReview = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.id, review.id);
        assert_eq!(deserialized.priority, review.priority);
        assert_eq!(deserialized.confidence, 67);
    }

    // Property-based tests using proptest
    proptest! {
        #[test]
        fn test_detected_type_roundtrip(detected in prop_oneof![
            Just(DetectedType::Human),
            Just(DetectedType::Ai),
            Just(DetectedType::Uncertain),
        ]) {
            let serialized = serde_json::to_string(&detected).unwrap();
            let deserialized: DetectedType = serde_json::from_str(&serialized).unwrap();
            prop_assert_eq!(detected, deserialized);
        }

        #[test]
        fn test_review_outcome_roundtrip(outcome in prop_oneof![
            Just(ReviewOutcome::ConfirmedAi),
            Just(ReviewOutcome::FalseAlarm),
            Just(ReviewOutcome::Pending),
        ]) {
            let serialized = serde_json::to_string(&outcome).unwrap();
            let deserialized: ReviewOutcome = serde_json::from_str(&serialized).unwrap();
            prop_assert_eq!(outcome, deserialized);
        }

        #[test]
        fn test_valid_confidence_always_validates(confidence in 0u8..=100u8) {
            let mut call = CallRecord::default();
            call.id = "CALL-001".to_string();
            call.caller_id = "****-****-1234".to_string();
            call.confidence = confidence;
            prop_assert!(call.validate().is_ok());
        }

        #[test]
        fn test_review_status_total(reviewed in any::<bool>(), outcome in prop_oneof![
            Just(None),
            Just(Some(ReviewOutcome::ConfirmedAi)),
            Just(Some(ReviewOutcome::FalseAlarm)),
            Just(Some(ReviewOutcome::Pending)),
        ]) {
            let mut call = CallRecord::default();
            call.reviewed = reviewed;
            call.reviewer_outcome = outcome;

            // Derivation never panics and agrees with the reviewed flag
            match call.review_status() {
                ReviewStatus::NotReviewed => prop_assert!(!reviewed),
                ReviewStatus::Reviewed(_) => prop_assert!(reviewed),
            }
        }
    }
}
