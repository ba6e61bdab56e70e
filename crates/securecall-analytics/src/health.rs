//! System health reporting types
//!
//! Pure reporting structures for the health view. Nothing here measures a
//! live system; values arrive with the dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Qualitative status of a platform metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Operating beyond target
    Excellent,
    /// Operating within target
    Good,
    /// Degraded, keep an eye on it
    Warning,
    /// Out of tolerance
    Error,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "excellent"),
            Self::Good => write!(f, "good"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Deployment stage of a detection model build
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModelStage {
    /// Serving production traffic
    Active,
    /// Candidate under evaluation
    Staging,
    /// Retired
    Deprecated,
}

impl std::fmt::Display for ModelStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Staging => write!(f, "staging"),
            Self::Deprecated => write!(f, "deprecated"),
        }
    }
}

/// Coarse performance rating attached to a model build
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceRating {
    /// Full accuracy tier
    High,
    /// Acceptable accuracy tier
    Medium,
    /// Below target
    Low,
}

impl std::fmt::Display for PerformanceRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// One platform metric reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemMetric {
    /// Metric name ("Model Accuracy")
    pub title: String,

    /// Current reading
    pub value: f64,

    /// Unit suffix ("%", "sec/call")
    pub unit: String,

    /// Signed change since the previous reading
    pub change: f64,

    /// Qualitative status
    pub status: HealthStatus,
}

/// Model quality measurements at a point in time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceSample {
    /// Sample time of day ("08:00")
    pub time: String,

    /// Accuracy percentage
    pub accuracy: f64,

    /// Precision percentage
    pub precision: f64,

    /// Recall percentage
    pub recall: f64,

    /// F1 score percentage
    pub f1: f64,
}

/// A detection model build and its rollout state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelVersion {
    /// Version string ("v2.4.1")
    pub version: String,

    /// Rollout stage
    pub stage: ModelStage,

    /// Deployment date
    pub deployed: NaiveDate,

    /// Offline accuracy percentage
    pub accuracy: f64,

    /// Coarse performance rating
    pub performance: PerformanceRating,
}

/// Processing queue reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueSnapshot {
    /// Calls waiting for analysis
    pub queue_length: u32,

    /// Mean wait before analysis starts, in seconds
    pub avg_wait_seconds: f64,

    /// Calls analyzed per minute
    pub throughput_per_minute: u32,

    /// CPU usage percentage
    pub cpu_usage_pct: u8,
}
