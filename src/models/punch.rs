//! Raw punch events and their wire representation.
//!
//! A punch is a single biometric clock event. The device attaches its own
//! state label ("Time In", "Break Out", ...) but those labels are unreliable
//! and are deliberately ignored by classification; they are kept on the
//! model only for audit and debugging display.

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Naive timestamp format emitted by biometric device exports.
const DEVICE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A raw row as returned by a punch-log store, prior to validation.
///
/// The timestamp is still a string at this point; rows whose timestamps
/// cannot be parsed are dropped (with a warning) rather than failing the
/// whole day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchRow {
    /// The raw timestamp string as stored.
    pub timestamp: String,
    /// The device-reported state label, if any.
    #[serde(default)]
    pub state: Option<String>,
}

/// A single validated biometric clock event.
///
/// `timestamp` is local wall-clock time in the operational timezone.
/// `reported_state` MUST NOT be treated as ground truth: slot assignment is
/// re-derived purely from the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPunch {
    /// When the punch occurred, as local wall-clock time.
    pub timestamp: NaiveDateTime,
    /// The device's own label for this punch. Informational only.
    pub reported_state: Option<String>,
}

impl RawPunch {
    /// Parses a wire row into a validated punch.
    ///
    /// Two timestamp encodings are accepted:
    /// - RFC 3339 with an offset (API feeds), converted into `tz` wall-clock
    /// - the device's naive `YYYY-MM-DD HH:MM:SS` export format, taken as
    ///   already being local time
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimestamp`] when neither encoding
    /// matches.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{PunchRow, RawPunch};
    /// use chrono_tz::Asia::Manila;
    ///
    /// let row = PunchRow {
    ///     timestamp: "2025-03-17 08:02:11".to_string(),
    ///     state: Some("Time In".to_string()),
    /// };
    /// let punch = RawPunch::from_row(&row, Manila).unwrap();
    /// assert_eq!(punch.timestamp.to_string(), "2025-03-17 08:02:11");
    /// ```
    pub fn from_row(row: &PunchRow, tz: Tz) -> EngineResult<Self> {
        let timestamp = if let Ok(instant) = DateTime::parse_from_rfc3339(&row.timestamp) {
            instant.with_timezone(&tz).naive_local()
        } else if let Ok(naive) =
            NaiveDateTime::parse_from_str(&row.timestamp, DEVICE_TIMESTAMP_FORMAT)
        {
            naive
        } else {
            return Err(EngineError::InvalidTimestamp {
                value: row.timestamp.clone(),
            });
        };

        Ok(Self {
            timestamp,
            reported_state: row.state.clone(),
        })
    }
}
