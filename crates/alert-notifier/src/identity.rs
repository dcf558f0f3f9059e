//! Alert identity and toast construction from raw API records.

use chrono::{DateTime, Utc};
use ward_client::AlertRecord;

use crate::types::{AlertToast, Severity};

const DEFAULT_MESSAGE: &str = "New alert triggered";

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Stable identifier for an alert record.
///
/// Prefers `alert_id`, then `_id`, then `"{patient_id}-{message}"`. Records
/// carrying none of these have no identity and are never announced.
pub fn identify(record: &AlertRecord) -> Option<String> {
    if let Some(id) = non_empty(&record.alert_id) {
        return Some(id.to_string());
    }
    if let Some(id) = non_empty(&record.object_id) {
        return Some(id.to_string());
    }

    let patient = non_empty(&record.patient_id);
    let message = non_empty(&record.message);
    if patient.is_none() && message.is_none() {
        return None;
    }
    Some(format!(
        "{}-{}",
        patient.unwrap_or_default(),
        message.unwrap_or_default()
    ))
}

/// Build the toast shown for a newly detected record.
pub fn toast_from_record(id: String, record: &AlertRecord, now: DateTime<Utc>) -> AlertToast {
    AlertToast {
        id,
        severity: record
            .severity
            .as_deref()
            .map(Severity::from_str_lenient)
            .unwrap_or_default(),
        message: non_empty(&record.message)
            .unwrap_or(DEFAULT_MESSAGE)
            .to_string(),
        patient_name: non_empty(&record.patient_name).map(str::to_string),
        rule: non_empty(&record.triggered_rule)
            .or_else(|| non_empty(&record.rule))
            .map(str::to_string),
        created_at: now,
    }
}
