//! Core data models for the Attendance Punch Reconciliation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod identifier;
mod punch;
mod record;

pub use identifier::{CandidateKind, EmployeeDescriptor, FetchSource, IdentifierCandidate};
pub use punch::{PunchRow, RawPunch};
pub use record::{DailyAttendanceRecord, Slot};
