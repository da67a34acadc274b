//! Formatted output projection of the classifier.
//!
//! Client-facing callers want display strings rather than date objects.
//! This module is a projection of [`classify_punches`] — it never
//! re-implements the classification rules, so the two output shapes cannot
//! drift apart.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::{DailyAttendanceRecord, RawPunch, Slot};

use super::classify::{ClassificationDiagnostics, classify_punches};

/// Placeholder for a slot with no value.
pub const EMPTY_SLOT: &str = "---";

/// A daily attendance record with slots rendered as display strings.
///
/// Unset slots hold the [`EMPTY_SLOT`] placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedRecord {
    /// The calendar date this record belongs to.
    pub date: NaiveDate,
    /// Start of the working day.
    pub time_in: String,
    /// Leaving for the lunch break.
    pub break_out: String,
    /// Returning from the lunch break.
    pub break_in: String,
    /// End of the working day.
    pub time_out: String,
}

impl FormattedRecord {
    /// Returns the rendered value of the given slot.
    pub fn slot(&self, slot: Slot) -> &str {
        match slot {
            Slot::TimeIn => &self.time_in,
            Slot::BreakOut => &self.break_out,
            Slot::BreakIn => &self.break_in,
            Slot::TimeOut => &self.time_out,
        }
    }
}

/// The result of classifying one day's punches into display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResult {
    /// The derived record, rendered with the configured time format.
    pub record: FormattedRecord,
    /// Data-quality signals for this classification.
    pub diagnostics: ClassificationDiagnostics,
}

/// Renders a raw record's slots with the configured time format.
///
/// # Example
///
/// ```
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::DailyAttendanceRecord;
/// use attendance_engine::reconcile::{EMPTY_SLOT, format_record};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
/// let mut record = DailyAttendanceRecord::empty(date);
/// record.time_in = date.and_hms_opt(8, 2, 0);
///
/// let formatted = format_record(&record, &EngineConfig::default());
/// assert_eq!(formatted.time_in, "8:02 AM");
/// assert_eq!(formatted.time_out, EMPTY_SLOT);
/// ```
pub fn format_record(record: &DailyAttendanceRecord, cfg: &EngineConfig) -> FormattedRecord {
    FormattedRecord {
        date: record.date,
        time_in: format_slot(record.time_in, cfg),
        break_out: format_slot(record.break_out, cfg),
        break_in: format_slot(record.break_in, cfg),
        time_out: format_slot(record.time_out, cfg),
    }
}

/// Classifies one day's punches and renders the result as display strings.
///
/// Applies identical classification logic to [`classify_punches`]; only the
/// serialization of the four slot values differs.
pub fn classify_punches_formatted(
    date: NaiveDate,
    punches: &[RawPunch],
    cfg: &EngineConfig,
) -> FormattedResult {
    let result = classify_punches(date, punches, cfg);
    FormattedResult {
        record: format_record(&result.record, cfg),
        diagnostics: result.diagnostics,
    }
}

fn format_slot(value: Option<NaiveDateTime>, cfg: &EngineConfig) -> String {
    match value {
        Some(v) => v.format(&cfg.time_format).to_string(),
        None => EMPTY_SLOT.to_string(),
    }
}
