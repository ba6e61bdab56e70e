//! Chart-facing aggregations over call records

use chrono::NaiveDate;
use securecall_core::types::{CallRecord, DetectedType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-day call counts split by classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyVolume {
    /// UTC calendar date
    pub date: NaiveDate,

    /// Human-classified calls that day
    pub human: usize,

    /// AI-classified calls that day
    pub ai: usize,

    /// Uncertain calls that day
    pub uncertain: usize,
}

/// Group records into per-day volumes, in chronological order
#[must_use]
pub fn daily_volume(records: &[CallRecord]) -> Vec<DailyVolume> {
    let mut days: BTreeMap<NaiveDate, DailyVolume> = BTreeMap::new();

    for call in records {
        let date = call.timestamp.date_naive();
        let entry = days.entry(date).or_insert(DailyVolume {
            date,
            human: 0,
            ai: 0,
            uncertain: 0,
        });

        match call.detected_type {
            DetectedType::Human => entry.human += 1,
            DetectedType::Ai => entry.ai += 1,
            DetectedType::Uncertain => entry.uncertain += 1,
        }
    }

    days.into_values().collect()
}

/// Call counts per classification, for the distribution chart
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeDistribution {
    /// Human-classified calls
    pub human: usize,

    /// AI-classified calls
    pub ai: usize,

    /// Uncertain calls
    pub uncertain: usize,
}

/// Count records per classification
#[must_use]
pub fn type_distribution(records: &[CallRecord]) -> TypeDistribution {
    let mut distribution = TypeDistribution::default();

    for call in records {
        match call.detected_type {
            DetectedType::Human => distribution.human += 1,
            DetectedType::Ai => distribution.ai += 1,
            DetectedType::Uncertain => distribution.uncertain += 1,
        }
    }

    distribution
}

/// One bar of the confidence histogram
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfidenceBand {
    /// Band label as charted ("61-80%")
    pub range: &'static str,

    /// Records whose confidence falls in the band
    pub count: usize,
}

/// Histogram band labels, lowest band first
const BAND_LABELS: [&str; 5] = ["0-20%", "21-40%", "41-60%", "61-80%", "81-100%"];

/// Bucket records into the five fixed confidence bands.
///
/// Band bounds are inclusive as labeled: 20 falls in `0-20%`, 21 in
/// `21-40%`, 81 in `81-100%`.
#[must_use]
pub fn confidence_histogram(records: &[CallRecord]) -> [ConfidenceBand; 5] {
    let mut counts = [0usize; 5];

    for call in records {
        let band = match call.confidence {
            0..=20 => 0,
            21..=40 => 1,
            41..=60 => 2,
            61..=80 => 3,
            _ => 4,
        };
        if let Some(slot) = counts.get_mut(band) {
            *slot += 1;
        }
    }

    let mut bands = BAND_LABELS.map(|range| ConfidenceBand { range, count: 0 });
    for (band, count) in bands.iter_mut().zip(counts) {
        band.count = count;
    }
    bands
}

/// Regional call activity, supplied alongside the call data.
///
/// Call records carry no region, so these figures arrive as their own
/// dataset; only the detection rate is derived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionActivity {
    /// Region name
    pub region: String,

    /// AI-classified calls in the region
    pub ai_calls: u32,

    /// All calls in the region
    pub total_calls: u32,
}

impl RegionActivity {
    /// AI share of the region's calls, percent with one decimal
    #[must_use]
    pub fn detection_rate(&self) -> f64 {
        if self.total_calls == 0 {
            return 0.0;
        }
        let rate = f64::from(self.ai_calls) / f64::from(self.total_calls) * 100.0;
        (rate * 10.0).round() / 10.0
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::float_cmp)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record_on(day: u32, hour: u32, detected_type: DetectedType) -> CallRecord {
        CallRecord {
            id: format!("CALL-{day:02}{hour:02}"),
            caller_id: "****-****-0000".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap(),
            detected_type,
            ..CallRecord::default()
        }
    }

    fn record_with_confidence(confidence: u8) -> CallRecord {
        CallRecord {
            id: format!("CALL-{confidence:03}"),
            caller_id: "****-****-0000".to_string(),
            confidence,
            ..CallRecord::default()
        }
    }

    #[test]
    fn test_daily_volume_groups_and_sorts() {
        let records = vec![
            record_on(15, 14, DetectedType::Ai),
            record_on(14, 9, DetectedType::Human),
            record_on(15, 16, DetectedType::Human),
            record_on(14, 11, DetectedType::Uncertain),
            record_on(15, 18, DetectedType::Ai),
        ];

        let volumes = daily_volume(&records);

        assert_eq!(volumes.len(), 2);
        let first = &volumes[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
        assert_eq!(first.human, 1);
        assert_eq!(first.uncertain, 1);
        assert_eq!(first.ai, 0);

        let second = &volumes[1];
        assert_eq!(second.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(second.ai, 2);
        assert_eq!(second.human, 1);
    }

    #[test]
    fn test_daily_volume_empty() {
        assert!(daily_volume(&[]).is_empty());
    }

    #[test]
    fn test_type_distribution_counts() {
        let records = vec![
            record_on(15, 10, DetectedType::Human),
            record_on(15, 11, DetectedType::Human),
            record_on(15, 12, DetectedType::Ai),
            record_on(15, 13, DetectedType::Uncertain),
        ];

        let distribution = type_distribution(&records);
        assert_eq!(distribution.human, 2);
        assert_eq!(distribution.ai, 1);
        assert_eq!(distribution.uncertain, 1);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(20, 0)]
    #[case(21, 1)]
    #[case(40, 1)]
    #[case(41, 2)]
    #[case(60, 2)]
    #[case(61, 3)]
    #[case(80, 3)]
    #[case(81, 4)]
    #[case(100, 4)]
    fn test_confidence_band_edges(#[case] confidence: u8, #[case] expected_band: usize) {
        let histogram = confidence_histogram(&[record_with_confidence(confidence)]);

        for (index, band) in histogram.iter().enumerate() {
            let expected = usize::from(index == expected_band);
            assert_eq!(
                band.count, expected,
                "confidence {confidence} should fall only in band {expected_band}"
            );
        }
    }

    #[test]
    fn test_histogram_band_labels() {
        let histogram = confidence_histogram(&[]);
        let labels: Vec<&str> = histogram.iter().map(|band| band.range).collect();
        assert_eq!(labels, vec!["0-20%", "21-40%", "41-60%", "61-80%", "81-100%"]);
    }

    #[test]
    fn test_histogram_counts_sum_to_input_len() {
        let records: Vec<CallRecord> = (0..=100).step_by(7).map(record_with_confidence).collect();
        let histogram = confidence_histogram(&records);

        let total: usize = histogram.iter().map(|band| band.count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_region_detection_rate() {
        let region = RegionActivity {
            region: "Midwest".to_string(),
            ai_calls: 52,
            total_calls: 467,
        };
        assert_eq!(region.detection_rate(), 11.1);
    }

    #[test]
    fn test_region_detection_rate_zero_total() {
        let region = RegionActivity {
            region: "Nowhere".to_string(),
            ai_calls: 0,
            total_calls: 0,
        };
        assert_eq!(region.detection_rate(), 0.0);
    }
}
