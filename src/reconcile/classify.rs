//! Temporal-window punch classification.
//!
//! The biometric device's own state labels are unreliable, so slot
//! assignment is re-derived purely from each punch's local wall-clock time
//! using fixed hour-of-day windows and tie-break rules. The same rule
//! engine backs both the raw-value and the formatted output projections.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::{DailyAttendanceRecord, RawPunch};

/// Punches strictly before this local hour are Time In candidates.
pub const MORNING_CUTOFF_HOUR: u32 = 12;

/// Punches at or after this local hour are Time Out candidates.
pub const TIME_OUT_EARLIEST_HOUR: u32 = 14;

/// Start of the lunch window for break candidates (inclusive).
pub const BREAK_WINDOW_START_HOUR: u32 = 11;

/// End of the lunch window for break candidates (exclusive).
pub const BREAK_WINDOW_END_HOUR: u32 = 14;

/// A lone break candidate at 12:MM with MM at or below this minute is
/// classified as Break Out; anything later in the window is Break In.
pub const LONE_BREAK_OUT_LATEST_MINUTE: u32 = 30;

/// Data-quality signals produced alongside a classification.
///
/// Callers that need to distinguish observed from assumed breaks, or to
/// alert on possible double-clocking, read these rather than re-deriving
/// them from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassificationDiagnostics {
    /// Mid-window break punches discarded by the earliest/latest collapse.
    ///
    /// Whether extra lunch-window punches indicate double-clocking or a
    /// legitimate second short break is undecided upstream, so the engine
    /// surfaces the count instead of guessing.
    pub discarded_break_candidates: usize,
    /// True when the record came from the degenerate single-punch path.
    ///
    /// Such records can legitimately violate a slot's expected meridiem
    /// and must not be fed through the meridiem normalizer.
    pub single_punch_fallback: bool,
    /// True when the standard 12:00/13:00 lunch was synthesized rather
    /// than observed.
    pub default_break_applied: bool,
}

/// The result of classifying one day's punches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The derived daily attendance record.
    pub record: DailyAttendanceRecord,
    /// Data-quality signals for this classification.
    pub diagnostics: ClassificationDiagnostics,
}

/// Classifies one calendar day's punches into the four canonical slots.
///
/// The input list may arrive in any order; punches are sorted internally.
/// The caller is responsible for isolating the list to a single day in the
/// operational timezone.
///
/// Rules, applied in order:
/// 1. Time In is the earliest punch before noon; Time Out the latest punch
///    at or after 14:00.
/// 2. If neither exists and punches remain, the earliest punch alone is
///    assigned (Time Out when at/after noon, Time In otherwise) and
///    classification stops without break detection.
/// 3. Remaining punches with an hour in `[11, 14)` are break candidates:
///    with two or more, the earliest is Break Out and the latest Break In
///    (mid-window extras are discarded and counted); a lone candidate is
///    split at 12:30.
/// 4. When both day ends are set but no break was found and
///    `default_break_fill` is enabled, a 12:00/13:00 lunch is synthesized
///    on the record's date.
///
/// An empty input yields a record with all four slots unset.
///
/// # Example
///
/// ```
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::RawPunch;
/// use attendance_engine::reconcile::classify_punches;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
/// let punches: Vec<RawPunch> = [(8, 0), (12, 0), (13, 0), (17, 0)]
///     .iter()
///     .map(|(h, m)| RawPunch {
///         timestamp: date.and_hms_opt(*h, *m, 0).unwrap(),
///         reported_state: None,
///     })
///     .collect();
///
/// let result = classify_punches(date, &punches, &EngineConfig::default());
/// assert_eq!(result.record.time_in, date.and_hms_opt(8, 0, 0));
/// assert_eq!(result.record.break_out, date.and_hms_opt(12, 0, 0));
/// assert_eq!(result.record.break_in, date.and_hms_opt(13, 0, 0));
/// assert_eq!(result.record.time_out, date.and_hms_opt(17, 0, 0));
/// ```
pub fn classify_punches(
    date: NaiveDate,
    punches: &[RawPunch],
    cfg: &EngineConfig,
) -> ClassificationResult {
    let mut times: Vec<NaiveDateTime> = punches.iter().map(|p| p.timestamp).collect();
    times.sort();

    let mut record = DailyAttendanceRecord::empty(date);
    let mut diagnostics = ClassificationDiagnostics::default();

    let time_in = times
        .iter()
        .copied()
        .find(|t| t.hour() < MORNING_CUTOFF_HOUR);
    let time_out = times
        .iter()
        .rev()
        .copied()
        .find(|t| t.hour() >= TIME_OUT_EARLIEST_HOUR);

    // Degenerate day: every punch sits between noon and 14:00. Assign the
    // earliest punch alone and skip break detection entirely.
    if time_in.is_none() && time_out.is_none() {
        if let Some(first) = times.first().copied() {
            if first.hour() >= MORNING_CUTOFF_HOUR {
                record.time_out = Some(first);
            } else {
                record.time_in = Some(first);
            }
            diagnostics.single_punch_fallback = true;
        }
        return ClassificationResult {
            record,
            diagnostics,
        };
    }

    record.time_in = time_in;
    record.time_out = time_out;

    let break_candidates: Vec<NaiveDateTime> = times
        .iter()
        .copied()
        .filter(|t| Some(*t) != time_in && Some(*t) != time_out)
        .filter(|t| (BREAK_WINDOW_START_HOUR..BREAK_WINDOW_END_HOUR).contains(&t.hour()))
        .collect();

    match break_candidates.len() {
        0 => {}
        1 => {
            let lone = break_candidates[0];
            if lone_candidate_is_break_out(lone) {
                record.break_out = Some(lone);
            } else {
                record.break_in = Some(lone);
            }
        }
        n => {
            record.break_out = break_candidates.first().copied();
            record.break_in = break_candidates.last().copied();
            diagnostics.discarded_break_candidates = n - 2;
        }
    }

    if cfg.default_break_fill
        && record.time_in.is_some()
        && record.time_out.is_some()
        && record.break_out.is_none()
        && record.break_in.is_none()
    {
        record.break_out = date.and_hms_opt(12, 0, 0);
        record.break_in = date.and_hms_opt(13, 0, 0);
        diagnostics.default_break_applied = true;
    }

    debug_assert!(record.is_chronological());

    ClassificationResult {
        record,
        diagnostics,
    }
}

/// Splits a lone lunch-window candidate at the 12:30 boundary.
fn lone_candidate_is_break_out(t: NaiveDateTime) -> bool {
    t.hour() < MORNING_CUTOFF_HOUR
        || (t.hour() == MORNING_CUTOFF_HOUR && t.minute() <= LONE_BREAK_OUT_LATEST_MINUTE)
}
