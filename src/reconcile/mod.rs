//! Reconciliation logic for the Attendance Punch Reconciliation Engine.
//!
//! This module contains the temporal-window classifier that assigns raw
//! punches to the four canonical slots, the formatted output projection of
//! the same rules, and the meridiem normalizer that repairs AM/PM
//! mislabeling in already-persisted records.

mod classify;
mod format;
mod meridiem;

pub use classify::{
    BREAK_WINDOW_END_HOUR, BREAK_WINDOW_START_HOUR, ClassificationDiagnostics,
    ClassificationResult, LONE_BREAK_OUT_LATEST_MINUTE, MORNING_CUTOFF_HOUR,
    TIME_OUT_EARLIEST_HOUR, classify_punches,
};
pub use format::{
    EMPTY_SLOT, FormattedRecord, FormattedResult, classify_punches_formatted, format_record,
};
pub use meridiem::{normalize_classification, normalize_meridiem};
