//! Subcommand implementations
//!
//! Each command takes the loaded dataset, runs the relevant analytics and
//! prints either a table view or pretty JSON.

use crate::output::{render_pairs, render_table};
use chrono::{DateTime, Utc};
use securecall_analytics::dataset::Dataset;
use securecall_analytics::display::{
    ConfidenceTier, detected_type_variant, flag_variant, health_status_variant,
    model_stage_variant, review_priority_variant, review_status_variant,
};
use securecall_analytics::filter::{
    ConfidenceFilter, FilterCriteria, TypeFilter, filter_records,
};
use securecall_analytics::review::{repeat_offenders, review_candidates, sort_by_priority};
use securecall_analytics::summary::summarize;
use securecall_analytics::trends::{confidence_histogram, daily_volume, type_distribution};
use securecall_core::types::{CallRecord, ReviewStatus};
use securecall_core::{DetectionConfig, Result, utils};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing::info;

/// Parse a detected-type filter value; unknown spellings become the
/// match-nothing axis rather than an error
fn parse_type_filter(raw: &str) -> TypeFilter {
    serde_json::from_value(serde_json::Value::String(raw.to_lowercase()))
        .unwrap_or(TypeFilter::Unrecognized)
}

/// Parse a confidence-bucket filter value, with the same lenient fallback
fn parse_confidence_filter(raw: &str) -> ConfidenceFilter {
    serde_json::from_value(serde_json::Value::String(raw.to_lowercase()))
        .unwrap_or(ConfidenceFilter::Unrecognized)
}

fn build_criteria(search: &str, detected_type: &str, confidence: &str) -> FilterCriteria {
    FilterCriteria {
        search_term: search.to_string(),
        detected_type: parse_type_filter(detected_type),
        confidence: parse_confidence_filter(confidence),
    }
}

/// One row of the call listing, with display variants resolved
#[derive(Debug, Serialize)]
struct CallRow {
    id: String,
    caller_id: String,
    timestamp: String,
    duration: String,
    channel: String,
    detected_type: String,
    type_variant: String,
    confidence: u8,
    confidence_tier: String,
    flagged: bool,
    flag_variant: String,
    review: String,
    review_variant: String,
}

impl CallRow {
    fn from_record(call: &CallRecord) -> Self {
        let status = call.review_status();
        let review = match status {
            ReviewStatus::NotReviewed => "Pending".to_string(),
            ReviewStatus::Reviewed(outcome) => outcome.label().to_string(),
        };

        Self {
            id: call.id.clone(),
            caller_id: call.caller_id.clone(),
            timestamp: call.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            duration: utils::format_duration(call.duration_seconds),
            channel: call.channel.to_string(),
            detected_type: call.detected_type.to_string(),
            type_variant: detected_type_variant(call.detected_type).to_string(),
            confidence: call.confidence,
            confidence_tier: confidence_tier_name(call.confidence).to_string(),
            flagged: call.flagged,
            flag_variant: flag_variant(call.flagged).to_string(),
            review,
            review_variant: review_status_variant(status).to_string(),
        }
    }
}

const fn confidence_tier_name(confidence: u8) -> &'static str {
    match ConfidenceTier::from_confidence(confidence) {
        ConfidenceTier::High => "high",
        ConfidenceTier::Medium => "medium",
        ConfidenceTier::Low => "low",
    }
}

/// List calls with filtering
pub fn calls(
    dataset: &Dataset,
    search: &str,
    detected_type: &str,
    confidence: &str,
    format: &str,
) -> Result<()> {
    let criteria = build_criteria(search, detected_type, confidence);
    let filtered = filter_records(&dataset.calls, &criteria);

    info!(
        matched = filtered.len(),
        total = dataset.calls.len(),
        "filtered call listing"
    );

    let rows: Vec<CallRow> = filtered.iter().map(|call| CallRow::from_record(call)).collect();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No calls found matching your criteria");
    } else {
        let table_rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    row.id.clone(),
                    row.caller_id.clone(),
                    row.timestamp.clone(),
                    row.duration.clone(),
                    row.channel.clone(),
                    row.detected_type.to_uppercase(),
                    format!("{}% ({})", row.confidence, row.confidence_tier),
                    if row.flagged { "Flagged" } else { "Clear" }.to_string(),
                    row.review.clone(),
                ]
            })
            .collect();

        println!(
            "{}",
            render_table(
                &[
                    "Call ID",
                    "Caller ID",
                    "Timestamp",
                    "Duration",
                    "Channel",
                    "Type",
                    "Confidence",
                    "Status",
                    "Review",
                ],
                &table_rows,
            )
        );
    }

    println!(
        "Showing {} of {} calls",
        filtered.len(),
        dataset.calls.len()
    );
    Ok(())
}

/// KPI summary plus the configured detection thresholds
pub fn summary(dataset: &Dataset, detection: &DetectionConfig, format: &str) -> Result<()> {
    let summary = summarize(&dataset.calls);

    if format == "json" {
        let payload = json!({
            "summary": summary,
            "thresholds": detection,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let pairs = [
        ("Total Calls Analyzed", summary.total_calls.to_string()),
        (
            "AI-Detected Calls",
            format!(
                "{} ({})",
                summary.ai_calls,
                utils::format_percent(summary.ai_rate)
            ),
        ),
        (
            "Human Calls",
            format!(
                "{} ({})",
                summary.human_calls,
                utils::format_percent(summary.human_rate)
            ),
        ),
        (
            "Uncertain Cases",
            format!(
                "{} ({})",
                summary.uncertain_calls,
                utils::format_percent(summary.uncertain_rate)
            ),
        ),
        ("Flagged Calls", summary.flagged_calls.to_string()),
        ("Reviewed Calls", summary.reviewed_calls.to_string()),
        (
            "Avg Confidence (flagged)",
            utils::format_percent(summary.avg_flagged_confidence),
        ),
        (
            "Avg AI Call Duration",
            utils::format_duration(summary.avg_ai_duration_seconds),
        ),
        (
            "Avg Human Call Duration",
            utils::format_duration(summary.avg_human_duration_seconds),
        ),
        (
            "AI Detection Threshold",
            format!("{}% confidence", detection.ai_threshold),
        ),
        (
            "Auto-Flag Threshold",
            format!("{}% confidence", detection.auto_flag_threshold),
        ),
        (
            "Manual Review Band",
            format!(
                "{}-{}% confidence",
                detection.review_band_low, detection.review_band_high
            ),
        ),
    ];

    print!("{}", render_pairs(&pairs));
    Ok(())
}

/// Volume, distribution, confidence and regional trends
pub fn trends(dataset: &Dataset, format: &str) -> Result<()> {
    let volumes = daily_volume(&dataset.calls);
    let distribution = type_distribution(&dataset.calls);
    let histogram = confidence_histogram(&dataset.calls);

    if format == "json" {
        let payload = json!({
            "daily_volume": volumes,
            "distribution": distribution,
            "confidence_histogram": histogram,
            "regions": dataset.regions,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Call Volume Trends");
    let volume_rows: Vec<Vec<String>> = volumes
        .iter()
        .map(|day| {
            vec![
                day.date.to_string(),
                day.human.to_string(),
                day.ai.to_string(),
                day.uncertain.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        render_table(&["Date", "Human", "AI", "Uncertain"], &volume_rows)
    );

    println!("Detection Distribution");
    print!(
        "{}",
        render_pairs(&[
            ("Human", distribution.human.to_string()),
            ("AI Detected", distribution.ai.to_string()),
            ("Uncertain", distribution.uncertain.to_string()),
        ])
    );
    println!();

    println!("Confidence Distribution");
    let histogram_rows: Vec<Vec<String>> = histogram
        .iter()
        .map(|band| vec![band.range.to_string(), band.count.to_string()])
        .collect();
    println!("{}", render_table(&["Range", "Count"], &histogram_rows));

    if !dataset.regions.is_empty() {
        println!("Regional AI Activity");
        let region_rows: Vec<Vec<String>> = dataset
            .regions
            .iter()
            .map(|region| {
                vec![
                    region.region.clone(),
                    region.ai_calls.to_string(),
                    region.total_calls.to_string(),
                    utils::format_percent(region.detection_rate()),
                ]
            })
            .collect();
        println!(
            "{}",
            render_table(&["Region", "AI Calls", "Total Calls", "Rate"], &region_rows)
        );
    }

    Ok(())
}

/// Fraud alert feed plus computed repeat offenders
pub fn alerts(
    dataset: &Dataset,
    min_flagged: u32,
    now: DateTime<Utc>,
    format: &str,
) -> Result<()> {
    let offenders = repeat_offenders(&dataset.calls, min_flagged);

    info!(
        alerts = dataset.alerts.len(),
        offenders = offenders.len(),
        "rendering fraud view"
    );

    if format == "json" {
        let payload = json!({
            "alerts": dataset.alerts,
            "repeat_offenders": offenders,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Fraud Alerts");
    let alert_rows: Vec<Vec<String>> = dataset
        .alerts
        .iter()
        .map(|alert| {
            vec![
                alert.id.clone(),
                alert.severity.to_string().to_uppercase(),
                alert.kind.to_string(),
                alert.title.clone(),
                alert
                    .call_count
                    .map_or_else(|| "-".to_string(), |count| count.to_string()),
                utils::format_relative(alert.timestamp, now),
            ]
        })
        .collect();
    println!(
        "{}",
        render_table(
            &["Alert ID", "Severity", "Kind", "Title", "Calls", "Age"],
            &alert_rows,
        )
    );

    if offenders.is_empty() {
        println!("No repeat offenders at threshold {min_flagged}");
    } else {
        println!("Repeat Offenders (>= {min_flagged} flagged AI calls)");
        let offender_rows: Vec<Vec<String>> = offenders
            .iter()
            .map(|offender| {
                vec![
                    offender.caller_id.clone(),
                    offender.flagged_calls.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            render_table(&["Caller", "Flagged AI Calls"], &offender_rows)
        );
    }

    Ok(())
}

/// Manual review queue and review candidates from the loaded calls
pub fn reviews(
    dataset: &Dataset,
    detection: &DetectionConfig,
    now: DateTime<Utc>,
    format: &str,
) -> Result<()> {
    let queue = sort_by_priority(dataset.pending_reviews.clone());
    let candidates = review_candidates(&dataset.calls, detection);

    if format == "json" {
        let candidate_rows: Vec<CallRow> = candidates
            .iter()
            .map(|call| CallRow::from_record(call))
            .collect();
        let payload = json!({
            "queue": queue,
            "candidates": candidate_rows,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Manual Review Queue");
    let queue_rows: Vec<Vec<String>> = queue
        .iter()
        .map(|review| {
            vec![
                review.id.clone(),
                review.caller_id.clone(),
                format!(
                    "{}% ({})",
                    review.confidence,
                    confidence_tier_name(review.confidence)
                ),
                format!(
                    "{} [{}]",
                    review.priority.to_string().to_uppercase(),
                    review_priority_variant(review.priority)
                ),
                review.flagged_reason.clone(),
                utils::format_relative(review.timestamp, now),
            ]
        })
        .collect();
    println!(
        "{}",
        render_table(
            &["Call ID", "Caller", "Confidence", "Priority", "Reason", "Age"],
            &queue_rows,
        )
    );

    if candidates.is_empty() {
        println!("No loaded calls need review");
    } else {
        println!("Review Candidates (from loaded calls)");
        let candidate_rows: Vec<Vec<String>> = candidates
            .iter()
            .map(|call| {
                vec![
                    call.id.clone(),
                    call.caller_id.clone(),
                    format!("{}%", call.confidence),
                    if call.flagged { "Flagged" } else { "Clear" }.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            render_table(&["Call ID", "Caller", "Confidence", "Status"], &candidate_rows)
        );
    }

    Ok(())
}

/// System health, model performance and processing queue status
pub fn health(dataset: &Dataset, format: &str) -> Result<()> {
    if format == "json" {
        let payload = json!({
            "system_metrics": dataset.system_metrics,
            "performance": dataset.performance,
            "model_versions": dataset.model_versions,
            "queue": dataset.queue,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("System Metrics");
    let metric_rows: Vec<Vec<String>> = dataset
        .system_metrics
        .iter()
        .map(|metric| {
            vec![
                metric.title.clone(),
                format!("{}{}", metric.value, metric.unit),
                format!("{:+}", metric.change),
                format!(
                    "{} [{}]",
                    metric.status,
                    health_status_variant(metric.status)
                ),
            ]
        })
        .collect();
    println!(
        "{}",
        render_table(&["Metric", "Value", "Change", "Status"], &metric_rows)
    );

    if !dataset.performance.is_empty() {
        println!("Model Performance (24h)");
        let sample_rows: Vec<Vec<String>> = dataset
            .performance
            .iter()
            .map(|sample| {
                vec![
                    sample.time.clone(),
                    utils::format_percent(sample.accuracy),
                    utils::format_percent(sample.precision),
                    utils::format_percent(sample.recall),
                    utils::format_percent(sample.f1),
                ]
            })
            .collect();
        println!(
            "{}",
            render_table(
                &["Time", "Accuracy", "Precision", "Recall", "F1"],
                &sample_rows,
            )
        );
    }

    if !dataset.model_versions.is_empty() {
        println!("Model Versions");
        let version_rows: Vec<Vec<String>> = dataset
            .model_versions
            .iter()
            .map(|version| {
                vec![
                    version.version.clone(),
                    format!(
                        "{} [{}]",
                        version.stage,
                        model_stage_variant(version.stage)
                    ),
                    version.deployed.to_string(),
                    utils::format_percent(version.accuracy),
                    version.performance.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            render_table(
                &["Version", "Stage", "Deployed", "Accuracy", "Performance"],
                &version_rows,
            )
        );
    }

    if let Some(queue) = &dataset.queue {
        println!("Processing Queue");
        print!(
            "{}",
            render_pairs(&[
                ("Queue Length", format!("{} calls", queue.queue_length)),
                ("Avg Wait Time", format!("{} sec", queue.avg_wait_seconds)),
                (
                    "Throughput",
                    format!("{} calls/min", queue.throughput_per_minute),
                ),
                ("CPU Usage", format!("{}%", queue.cpu_usage_pct)),
            ])
        );
    }

    Ok(())
}

/// Export a filtered call listing as CSV
pub fn export(
    dataset: &Dataset,
    search: &str,
    detected_type: &str,
    confidence: &str,
    output: &Path,
) -> Result<()> {
    let criteria = build_criteria(search, detected_type, confidence);
    let filtered = filter_records(&dataset.calls, &criteria);

    let file = std::fs::File::create(output)?;
    securecall_analytics::export::write_csv(&filtered, file)?;

    info!(
        exported = filtered.len(),
        path = %output.display(),
        "wrote CSV export"
    );
    println!(
        "Exported {} of {} calls to {}",
        filtered.len(),
        dataset.calls.len(),
        output.display()
    );
    Ok(())
}
