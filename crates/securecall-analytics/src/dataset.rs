//! Dataset loading and the built-in demo fixture
//!
//! The analytics core never fetches data itself; a [`Dataset`] arrives
//! from outside, either as a JSON file or as the embedded demo set used
//! throughout the docs and tests.

use crate::health::{
    HealthStatus, ModelStage, ModelVersion, PerformanceRating, PerformanceSample, QueueSnapshot,
    SystemMetric,
};
use crate::trends::RegionActivity;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use securecall_core::types::{
    AlertKind, AlertSeverity, CallChannel, CallRecord, DetectedType, FraudAlert, PendingReview,
    ReviewOutcome, ReviewPriority,
};
use securecall_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use validator::Validate;

/// Everything the dashboard views consume
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Analyzed calls
    #[serde(default)]
    pub calls: Vec<CallRecord>,

    /// Fraud and compliance alerts
    #[serde(default)]
    pub alerts: Vec<FraudAlert>,

    /// Manual review queue
    #[serde(default)]
    pub pending_reviews: Vec<PendingReview>,

    /// Regional activity figures
    #[serde(default)]
    pub regions: Vec<RegionActivity>,

    /// Platform metric readings
    #[serde(default)]
    pub system_metrics: Vec<SystemMetric>,

    /// Model quality samples over the day
    #[serde(default)]
    pub performance: Vec<PerformanceSample>,

    /// Known model builds
    #[serde(default)]
    pub model_versions: Vec<ModelVersion>,

    /// Processing queue reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<QueueSnapshot>,
}

impl Dataset {
    /// Load a dataset from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// contains call records that fail validation.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::DataLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let dataset: Self = serde_json::from_str(&raw).map_err(|e| Error::DataLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        dataset.validate_calls()?;

        info!(
            calls = dataset.calls.len(),
            alerts = dataset.alerts.len(),
            pending_reviews = dataset.pending_reviews.len(),
            "loaded dataset from {}",
            path.display()
        );

        Ok(dataset)
    }

    /// Check every call record against its field constraints
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, naming the offending record.
    pub fn validate_calls(&self) -> Result<()> {
        for call in &self.calls {
            call.validate().map_err(|e| Error::Validation {
                field: format!("calls[{}]", call.id),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Reference "now" for the demo dataset, so relative timestamps render
    /// the same on every run
    #[must_use]
    pub fn demo_reference_time() -> DateTime<Utc> {
        at(2024, 1, 15, 16, 0)
    }

    /// The built-in demo dataset
    #[must_use]
    pub fn demo() -> Self {
        Self {
            calls: demo_calls(),
            alerts: demo_alerts(),
            pending_reviews: demo_pending_reviews(),
            regions: demo_regions(),
            system_metrics: demo_system_metrics(),
            performance: demo_performance(),
            model_versions: demo_model_versions(),
            queue: Some(QueueSnapshot {
                queue_length: 23,
                avg_wait_seconds: 1.8,
                throughput_per_minute: 50,
                cpu_usage_pct: 67,
            }),
        }
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn demo_calls() -> Vec<CallRecord> {
    vec![
        CallRecord {
            id: "CALL-001".to_string(),
            caller_id: "****-****-1234".to_string(),
            timestamp: at(2024, 1, 15, 14, 32),
            duration_seconds: 263.0,
            channel: CallChannel::Inbound,
            detected_type: DetectedType::Ai,
            confidence: 94,
            flagged: true,
            reviewed: true,
            reviewer_outcome: Some(ReviewOutcome::ConfirmedAi),
        },
        CallRecord {
            id: "CALL-002".to_string(),
            caller_id: "****-****-5678".to_string(),
            timestamp: at(2024, 1, 15, 14, 28),
            duration_seconds: 135.0,
            channel: CallChannel::Outbound,
            detected_type: DetectedType::Human,
            confidence: 87,
            flagged: false,
            reviewed: false,
            reviewer_outcome: None,
        },
        CallRecord {
            id: "CALL-003".to_string(),
            caller_id: "****-****-9012".to_string(),
            timestamp: at(2024, 1, 15, 14, 25),
            duration_seconds: 401.0,
            channel: CallChannel::Inbound,
            detected_type: DetectedType::Uncertain,
            confidence: 63,
            flagged: true,
            reviewed: false,
            reviewer_outcome: None,
        },
        CallRecord {
            id: "CALL-004".to_string(),
            caller_id: "****-****-3456".to_string(),
            timestamp: at(2024, 1, 15, 14, 20),
            duration_seconds: 198.0,
            channel: CallChannel::Inbound,
            detected_type: DetectedType::Ai,
            confidence: 89,
            flagged: true,
            reviewed: true,
            reviewer_outcome: Some(ReviewOutcome::FalseAlarm),
        },
        CallRecord {
            id: "CALL-005".to_string(),
            caller_id: "****-****-7890".to_string(),
            timestamp: at(2024, 1, 15, 14, 15),
            duration_seconds: 112.0,
            channel: CallChannel::Outbound,
            detected_type: DetectedType::Human,
            confidence: 92,
            flagged: false,
            reviewed: false,
            reviewer_outcome: None,
        },
    ]
}

fn demo_alerts() -> Vec<FraudAlert> {
    vec![
        FraudAlert {
            id: "ALERT-001".to_string(),
            kind: AlertKind::RepeatOffender,
            severity: AlertSeverity::High,
            title: "Frequent AI Caller Detected".to_string(),
            description: "Phone number ****-****-1234 has been flagged for AI calls 8 times in the past 24 hours".to_string(),
            location: None,
            phone_number: Some("****-****-1234".to_string()),
            call_count: Some(8),
            timestamp: at(2024, 1, 15, 14, 0),
        },
        FraudAlert {
            id: "ALERT-002".to_string(),
            kind: AlertKind::Hotspot,
            severity: AlertSeverity::Medium,
            title: "Regional Anomaly Detected".to_string(),
            description: "Midwest region showing 40% increase in AI call detection".to_string(),
            location: Some("Midwest Region".to_string()),
            phone_number: None,
            call_count: Some(23),
            timestamp: at(2024, 1, 15, 12, 0),
        },
        FraudAlert {
            id: "ALERT-003".to_string(),
            kind: AlertKind::Regulatory,
            severity: AlertSeverity::High,
            title: "Consent Violation".to_string(),
            description: "AI caller failed to disclose artificial nature during call recording"
                .to_string(),
            location: None,
            phone_number: None,
            call_count: Some(1),
            timestamp: at(2024, 1, 15, 10, 0),
        },
        FraudAlert {
            id: "ALERT-004".to_string(),
            kind: AlertKind::Anomaly,
            severity: AlertSeverity::Low,
            title: "Unusual Call Pattern".to_string(),
            description: "Detected suspicious timing pattern in outbound calls".to_string(),
            location: None,
            phone_number: None,
            call_count: Some(12),
            timestamp: at(2024, 1, 14, 16, 0),
        },
    ]
}

fn demo_pending_reviews() -> Vec<PendingReview> {
    vec![
        PendingReview {
            id: "CALL-234".to_string(),
            caller_id: "****-****-9876".to_string(),
            confidence: 67,
            flagged_reason: "Low confidence score".to_string(),
            priority: ReviewPriority::Medium,
            timestamp: at(2024, 1, 15, 15, 45),
        },
        PendingReview {
            id: "CALL-235".to_string(),
            caller_id: "****-****-5432".to_string(),
            confidence: 45,
            flagged_reason: "Unusual voice patterns".to_string(),
            priority: ReviewPriority::High,
            timestamp: at(2024, 1, 15, 15, 32),
        },
        PendingReview {
            id: "CALL-236".to_string(),
            caller_id: "****-****-1098".to_string(),
            confidence: 72,
            flagged_reason: "Repeat caller".to_string(),
            priority: ReviewPriority::Low,
            timestamp: at(2024, 1, 15, 15, 0),
        },
    ]
}

fn demo_regions() -> Vec<RegionActivity> {
    vec![
        RegionActivity { region: "North East".to_string(), ai_calls: 45, total_calls: 486 },
        RegionActivity { region: "South East".to_string(), ai_calls: 38, total_calls: 521 },
        RegionActivity { region: "Midwest".to_string(), ai_calls: 52, total_calls: 467 },
        RegionActivity { region: "West Coast".to_string(), ai_calls: 29, total_calls: 398 },
        RegionActivity { region: "Southwest".to_string(), ai_calls: 41, total_calls: 445 },
        RegionActivity { region: "Northwest".to_string(), ai_calls: 22, total_calls: 274 },
    ]
}

fn demo_system_metrics() -> Vec<SystemMetric> {
    vec![
        SystemMetric {
            title: "Model Accuracy".to_string(),
            value: 94.2,
            unit: "%".to_string(),
            change: 1.3,
            status: HealthStatus::Good,
        },
        SystemMetric {
            title: "Processing Speed".to_string(),
            value: 1.2,
            unit: "sec/call".to_string(),
            change: -0.2,
            status: HealthStatus::Good,
        },
        SystemMetric {
            title: "System Uptime".to_string(),
            value: 99.8,
            unit: "%".to_string(),
            change: 0.0,
            status: HealthStatus::Excellent,
        },
        SystemMetric {
            title: "Error Rate".to_string(),
            value: 0.3,
            unit: "%".to_string(),
            change: -0.1,
            status: HealthStatus::Good,
        },
    ]
}

fn demo_performance() -> Vec<PerformanceSample> {
    vec![
        PerformanceSample { time: "00:00".to_string(), accuracy: 94.1, precision: 92.3, recall: 91.8, f1: 92.0 },
        PerformanceSample { time: "04:00".to_string(), accuracy: 94.3, precision: 92.5, recall: 92.1, f1: 92.3 },
        PerformanceSample { time: "08:00".to_string(), accuracy: 94.0, precision: 92.1, recall: 91.9, f1: 92.0 },
        PerformanceSample { time: "12:00".to_string(), accuracy: 94.5, precision: 92.8, recall: 92.4, f1: 92.6 },
        PerformanceSample { time: "16:00".to_string(), accuracy: 94.2, precision: 92.4, recall: 92.0, f1: 92.2 },
        PerformanceSample { time: "20:00".to_string(), accuracy: 94.4, precision: 92.6, recall: 92.2, f1: 92.4 },
    ]
}

fn demo_model_versions() -> Vec<ModelVersion> {
    vec![
        ModelVersion {
            version: "v2.4.1".to_string(),
            stage: ModelStage::Active,
            deployed: date(2024, 1, 10),
            accuracy: 94.2,
            performance: PerformanceRating::High,
        },
        ModelVersion {
            version: "v2.4.0".to_string(),
            stage: ModelStage::Staging,
            deployed: date(2024, 1, 8),
            accuracy: 93.8,
            performance: PerformanceRating::High,
        },
        ModelVersion {
            version: "v2.3.2".to_string(),
            stage: ModelStage::Deprecated,
            deployed: date(2023, 12, 15),
            accuracy: 92.1,
            performance: PerformanceRating::Medium,
        },
    ]
}
