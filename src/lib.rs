//! Attendance Punch Reconciliation Engine
//!
//! This crate reconstructs the four canonical daily attendance slots
//! (Time In, Break Out, Break In, Time Out) from raw biometric clock events
//! whose device-reported labels are unreliable. Classification is driven
//! purely by temporal-window heuristics, with a separate normalization pass
//! that repairs AM/PM mislabeling in already-persisted records.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod reconcile;
