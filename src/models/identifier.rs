//! Employee identifier candidates for punch-log resolution.
//!
//! The punch-log store may key one logical employee's records under any of
//! several historical identifier formats. The descriptor exposes all of
//! them; the fetch aggregator tries the candidates in a fixed priority
//! order and records which one produced data.

use serde::{Deserialize, Serialize};

/// Which historical identifier format a candidate value is in.
///
/// The variant order is the fixed priority order candidates are tried in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// The normalized employee id.
    NormalizedId,
    /// Digits-only form of the raw id with leading zeros stripped.
    DigitsOnlyId,
    /// The alternate employee number.
    AlternateNumber,
    /// The raw employee id exactly as stored.
    RawId,
}

impl std::fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateKind::NormalizedId => write!(f, "normalizedEmpId"),
            CandidateKind::DigitsOnlyId => write!(f, "digitsOnlyEmpId"),
            CandidateKind::AlternateNumber => write!(f, "alternateEmpNo"),
            CandidateKind::RawId => write!(f, "rawEmpId"),
        }
    }
}

/// One identifier value to try against the punch-log store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierCandidate {
    /// Which identifier format this value is in.
    pub kind: CandidateKind,
    /// The identifier value.
    pub value: String,
}

/// Which identifier candidate a fetch's punches came from.
///
/// `NoneFound` distinguishes "really zero punches under every identifier"
/// from an arbitrary empty result for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchSource {
    /// Punches were found under this identifier candidate.
    Candidate(CandidateKind),
    /// Every candidate yielded zero records.
    NoneFound,
}

impl std::fmt::Display for FetchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchSource::Candidate(kind) => write!(f, "{}", kind),
            FetchSource::NoneFound => write!(f, "none-found"),
        }
    }
}

/// An employee's identifiers as known to the surrounding HR application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDescriptor {
    /// The raw employee id exactly as stored.
    pub employee_id: String,
    /// The normalized employee id, when one has been assigned.
    #[serde(default)]
    pub normalized_id: Option<String>,
    /// The alternate employee number, when one exists.
    #[serde(default)]
    pub alternate_number: Option<String>,
}

impl EmployeeDescriptor {
    /// Builds the identifier candidate list in priority order.
    ///
    /// The digits-only candidate is derived from the raw id by keeping only
    /// ASCII digits and stripping leading zeros. Duplicate values are
    /// removed, keeping the first-seen kind, so the store is never queried
    /// twice with the same value.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{CandidateKind, EmployeeDescriptor};
    ///
    /// let descriptor = EmployeeDescriptor {
    ///     employee_id: "EMP-00123".to_string(),
    ///     normalized_id: Some("123".to_string()),
    ///     alternate_number: None,
    /// };
    ///
    /// let candidates = descriptor.candidates();
    /// // "123" appears once, under its first-seen kind.
    /// assert_eq!(candidates.len(), 2);
    /// assert_eq!(candidates[0].kind, CandidateKind::NormalizedId);
    /// assert_eq!(candidates[0].value, "123");
    /// assert_eq!(candidates[1].kind, CandidateKind::RawId);
    /// ```
    pub fn candidates(&self) -> Vec<IdentifierCandidate> {
        let mut candidates: Vec<IdentifierCandidate> = Vec::new();
        let mut push = |kind: CandidateKind, value: Option<String>| {
            let Some(value) = value else { return };
            if value.is_empty() {
                return;
            }
            if candidates.iter().any(|c| c.value == value) {
                return;
            }
            candidates.push(IdentifierCandidate { kind, value });
        };

        push(CandidateKind::NormalizedId, self.normalized_id.clone());
        push(CandidateKind::DigitsOnlyId, self.digits_only_id());
        push(
            CandidateKind::AlternateNumber,
            self.alternate_number.clone(),
        );
        push(CandidateKind::RawId, Some(self.employee_id.clone()));

        candidates
    }

    /// The digits-only, zero-stripped form of the raw id, if non-empty.
    fn digits_only_id(&self) -> Option<String> {
        let digits: String = self
            .employee_id
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        let stripped = digits.trim_start_matches('0');
        if stripped.is_empty() {
            None
        } else {
            Some(stripped.to_string())
        }
    }
}
