//! Meridiem (AM/PM) repair for persisted attendance records.
//!
//! Upstream ingestion can store a slot on the right date but the wrong
//! half of the day. This pass re-anchors each slot to the authoritative
//! record date and flips it by twelve hours when the stored hour
//! contradicts the slot's expected meridiem. It never re-derives which
//! punch belongs to which slot.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::models::{DailyAttendanceRecord, Slot};

use super::classify::{ClassificationResult, MORNING_CUTOFF_HOUR};

/// Repairs meridiem mislabeling in an already-assigned four-slot record.
///
/// For each slot independently: unset slots stay unset; otherwise the
/// slot's date components are replaced by `date` (preserving time of day),
/// then twelve hours are subtracted from a Time In found at/after noon, or
/// added to a Break Out/Break In/Time Out found before noon. Slots are
/// never dropped or reordered.
///
/// Running this on a record whose slots already satisfy their expected
/// meridiem is a no-op, so the pass is idempotent.
///
/// Records produced by the classifier's single-punch fallback can
/// legitimately violate the expectation and must not be passed here; use
/// [`normalize_classification`] when the classification diagnostics are at
/// hand.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DailyAttendanceRecord;
/// use attendance_engine::reconcile::normalize_meridiem;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
/// let mut record = DailyAttendanceRecord::empty(date);
/// // Stored as 2 PM, but Time In expects a morning hour.
/// record.time_in = date.and_hms_opt(14, 0, 0);
///
/// let repaired = normalize_meridiem(&record, date);
/// assert_eq!(repaired.time_in, date.and_hms_opt(2, 0, 0));
/// ```
pub fn normalize_meridiem(record: &DailyAttendanceRecord, date: NaiveDate) -> DailyAttendanceRecord {
    let mut normalized = DailyAttendanceRecord::empty(date);
    for slot in Slot::ALL {
        let value = record.slot(slot).map(|v| normalize_slot(v, date, slot));
        normalized.set_slot(slot, value);
    }
    normalized
}

/// Normalizes a classification result, skipping fallback-tagged records.
///
/// The single-punch fallback can assign a Time Out before noon or a
/// Time In after noon; blindly repairing those would corrupt them, so
/// fallback-tagged records are returned unchanged.
pub fn normalize_classification(
    result: &ClassificationResult,
    date: NaiveDate,
) -> DailyAttendanceRecord {
    if result.diagnostics.single_punch_fallback {
        return result.record.clone();
    }
    normalize_meridiem(&result.record, date)
}

/// Re-anchors one slot value to `date` and enforces its expected meridiem.
fn normalize_slot(value: NaiveDateTime, date: NaiveDate, slot: Slot) -> NaiveDateTime {
    let anchored = date.and_time(value.time());
    if slot.expects_morning() {
        if anchored.hour() >= MORNING_CUTOFF_HOUR {
            anchored - Duration::hours(12)
        } else {
            anchored
        }
    } else if anchored.hour() < MORNING_CUTOFF_HOUR {
        anchored + Duration::hours(12)
    } else {
        anchored
    }
}
