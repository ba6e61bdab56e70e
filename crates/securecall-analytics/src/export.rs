//! CSV export of call listings

use securecall_core::types::CallRecord;
use securecall_core::{Error, Result, utils};
use std::io::Write;

/// Column headers, matching the insight table layout
const HEADERS: [&str; 9] = [
    "call_id",
    "caller_id",
    "timestamp",
    "duration",
    "channel",
    "detected_type",
    "confidence",
    "flagged",
    "review",
];

/// Write a call slice as CSV, one row per record in slice order
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_csv<W: Write>(records: &[&CallRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADERS)
        .map_err(|e| Error::Csv(e.to_string()))?;

    for call in records {
        let review = match call.review_status() {
            securecall_core::ReviewStatus::NotReviewed => "not-reviewed".to_string(),
            securecall_core::ReviewStatus::Reviewed(outcome) => outcome.to_string(),
        };

        let row = [
            call.id.clone(),
            call.caller_id.clone(),
            call.timestamp.to_rfc3339(),
            utils::format_duration(call.duration_seconds),
            call.channel.to_string(),
            call.detected_type.to_string(),
            call.confidence.to_string(),
            call.flagged.to_string(),
            review,
        ];
        csv_writer
            .write_record(&row)
            .map_err(|e| Error::Csv(e.to_string()))?;
    }

    csv_writer.flush()?;
    Ok(())
}
