//! The daily attendance record and its four canonical slots.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One of the four canonical attendance slots of a daily time record.
///
/// Each slot carries an expected meridiem: Time In should fall in the
/// morning; the other three in the afternoon. The meridiem normalizer uses
/// this expectation to repair AM/PM mislabeling in persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Start of the working day.
    TimeIn,
    /// Leaving for the lunch break.
    BreakOut,
    /// Returning from the lunch break.
    BreakIn,
    /// End of the working day.
    TimeOut,
}

impl Slot {
    /// All four slots in chronological order.
    pub const ALL: [Slot; 4] = [Slot::TimeIn, Slot::BreakOut, Slot::BreakIn, Slot::TimeOut];

    /// Whether this slot is expected to fall before noon.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::Slot;
    ///
    /// assert!(Slot::TimeIn.expects_morning());
    /// assert!(!Slot::BreakOut.expects_morning());
    /// ```
    pub fn expects_morning(&self) -> bool {
        matches!(self, Slot::TimeIn)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::TimeIn => write!(f, "Time In"),
            Slot::BreakOut => write!(f, "Break Out"),
            Slot::BreakIn => write!(f, "Break In"),
            Slot::TimeOut => write!(f, "Time Out"),
        }
    }
}

/// The payroll-facing daily time record with four canonical slots.
///
/// A record is derived fresh on every classification call; persistence is
/// an external collaborator's job. Each slot is independently unset when no
/// punch could be assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendanceRecord {
    /// The calendar date this record belongs to.
    pub date: NaiveDate,
    /// Start of the working day, if observed.
    pub time_in: Option<NaiveDateTime>,
    /// Leaving for the lunch break, if observed or assumed.
    pub break_out: Option<NaiveDateTime>,
    /// Returning from the lunch break, if observed or assumed.
    pub break_in: Option<NaiveDateTime>,
    /// End of the working day, if observed.
    pub time_out: Option<NaiveDateTime>,
}

impl DailyAttendanceRecord {
    /// Creates a record for `date` with all four slots unset.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            time_in: None,
            break_out: None,
            break_in: None,
            time_out: None,
        }
    }

    /// Returns the value of the given slot.
    pub fn slot(&self, slot: Slot) -> Option<NaiveDateTime> {
        match slot {
            Slot::TimeIn => self.time_in,
            Slot::BreakOut => self.break_out,
            Slot::BreakIn => self.break_in,
            Slot::TimeOut => self.time_out,
        }
    }

    /// Sets the value of the given slot.
    pub fn set_slot(&mut self, slot: Slot, value: Option<NaiveDateTime>) {
        match slot {
            Slot::TimeIn => self.time_in = value,
            Slot::BreakOut => self.break_out = value,
            Slot::BreakIn => self.break_in = value,
            Slot::TimeOut => self.time_out = value,
        }
    }

    /// True when no slot has a value.
    pub fn is_empty(&self) -> bool {
        Slot::ALL.iter().all(|s| self.slot(*s).is_none())
    }

    /// True when the set slots are in non-decreasing chronological order.
    ///
    /// Unset slots are skipped; an empty record is trivially chronological.
    /// The classifier produces chronological records by construction of its
    /// hour windows, so a violation indicates corrupted persisted data.
    pub fn is_chronological(&self) -> bool {
        let values: Vec<NaiveDateTime> =
            Slot::ALL.iter().filter_map(|s| self.slot(*s)).collect();
        values.windows(2).all(|pair| pair[0] <= pair[1])
    }
}
