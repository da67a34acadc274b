//! Identifier resolution and fetch aggregation.

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::models::{EmployeeDescriptor, FetchSource, IdentifierCandidate, PunchRow, RawPunch};

use super::store::{PAGE_SIZE, PunchStore};

/// The punches resolved for one employee, plus where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Validated punches, sorted by timestamp.
    pub punches: Vec<RawPunch>,
    /// Which identifier candidate produced the data, for diagnostics
    /// ("Source: normalizedEmpId"), or the none-found sentinel.
    pub source: FetchSource,
}

/// Resolves an employee's punch log across their identifier candidates.
///
/// Candidates are tried strictly in priority order; the first one whose
/// paginated fetch returns at least one row wins and later candidates are
/// never queried. Pagination for a candidate runs sequentially until a
/// short page signals exhaustion. A store error for a candidate is logged
/// and treated as zero rows, so resolution falls through to the next
/// candidate instead of aborting.
///
/// Winning rows are parsed into [`RawPunch`] values (rows with unparseable
/// timestamps are logged and dropped) and sorted by timestamp. If every
/// candidate yields zero rows the result is the empty list with
/// [`FetchSource::NoneFound`], which keeps "really zero punches"
/// distinguishable from a failed fetch.
pub fn fetch_punches<S: PunchStore>(
    store: &S,
    descriptor: &EmployeeDescriptor,
    cfg: &EngineConfig,
) -> FetchResult {
    for candidate in descriptor.candidates() {
        let rows = fetch_all_pages(store, &candidate);
        if !rows.is_empty() {
            debug!(
                identifier = %candidate.kind,
                rows = rows.len(),
                "resolved punch log identifier"
            );
            return FetchResult {
                punches: parse_and_sort(&rows, cfg),
                source: FetchSource::Candidate(candidate.kind),
            };
        }
    }

    FetchResult {
        punches: Vec::new(),
        source: FetchSource::NoneFound,
    }
}

/// Paginates one candidate's punch log to exhaustion.
///
/// A fetch failure mid-pagination abandons the candidate entirely rather
/// than returning a partial log.
fn fetch_all_pages<S: PunchStore>(store: &S, candidate: &IdentifierCandidate) -> Vec<PunchRow> {
    let mut rows: Vec<PunchRow> = Vec::new();
    loop {
        match store.fetch_page(&candidate.value, rows.len(), PAGE_SIZE) {
            Ok(page) => {
                let count = page.len();
                rows.extend(page);
                if count < PAGE_SIZE {
                    break;
                }
            }
            Err(error) => {
                warn!(
                    identifier = %candidate.kind,
                    %error,
                    "punch fetch failed; treating candidate as empty"
                );
                rows.clear();
                break;
            }
        }
    }
    rows
}

fn parse_and_sort(rows: &[PunchRow], cfg: &EngineConfig) -> Vec<RawPunch> {
    let mut punches: Vec<RawPunch> = rows
        .iter()
        .filter_map(|row| match RawPunch::from_row(row, cfg.timezone) {
            Ok(punch) => Some(punch),
            Err(error) => {
                warn!(%error, "dropping unparseable punch row");
                None
            }
        })
        .collect();
    punches.sort_by_key(|p| p.timestamp);
    punches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::CandidateKind;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory store that records which identifiers were queried.
    struct MapStore {
        rows: HashMap<String, Vec<PunchRow>>,
        failing: Vec<String>,
        queried: RefCell<Vec<String>>,
    }

    impl MapStore {
        fn new() -> Self {
            Self {
                rows: HashMap::new(),
                failing: Vec::new(),
                queried: RefCell::new(Vec::new()),
            }
        }

        fn with_rows(mut self, identifier: &str, count: usize) -> Self {
            let rows = (0..count)
                .map(|i| PunchRow {
                    timestamp: format!("2025-03-17 08:{:02}:00", i % 60),
                    state: None,
                })
                .collect();
            self.rows.insert(identifier.to_string(), rows);
            self
        }

        fn with_failure(mut self, identifier: &str) -> Self {
            self.failing.push(identifier.to_string());
            self
        }

        fn queried(&self) -> Vec<String> {
            self.queried.borrow().clone()
        }
    }

    impl PunchStore for MapStore {
        fn fetch_page(
            &self,
            identifier: &str,
            offset: usize,
            limit: usize,
        ) -> crate::error::EngineResult<Vec<PunchRow>> {
            self.queried.borrow_mut().push(identifier.to_string());
            if self.failing.iter().any(|f| f == identifier) {
                return Err(EngineError::StoreError {
                    identifier: identifier.to_string(),
                    message: "connection reset".to_string(),
                });
            }
            let all = self.rows.get(identifier).cloned().unwrap_or_default();
            let end = (offset + limit).min(all.len());
            Ok(all.get(offset..end).unwrap_or(&[]).to_vec())
        }
    }

    fn descriptor(raw: &str, normalized: Option<&str>, alternate: Option<&str>) -> EmployeeDescriptor {
        EmployeeDescriptor {
            employee_id: raw.to_string(),
            normalized_id: normalized.map(str::to_string),
            alternate_number: alternate.map(str::to_string),
        }
    }

    // ==========================================================================
    // FA-001: First productive candidate wins; later ones never queried
    // ==========================================================================
    #[test]
    fn test_fa_001_first_productive_candidate_wins() {
        // Candidate order: normalized "A" (0 rows), alternate "B" (3 rows),
        // raw "C" (10 rows). B must win and C must never be queried.
        let store = MapStore::new().with_rows("B", 3).with_rows("C", 10);
        let descriptor = descriptor("C", Some("A"), Some("B"));

        let result = fetch_punches(&store, &descriptor, &EngineConfig::default());
        assert_eq!(result.punches.len(), 3);
        assert_eq!(
            result.source,
            FetchSource::Candidate(CandidateKind::AlternateNumber)
        );
        assert!(!store.queried().contains(&"C".to_string()));
    }

    // ==========================================================================
    // FA-002: All candidates empty yields the none-found sentinel
    // ==========================================================================
    #[test]
    fn test_fa_002_all_empty_yields_none_found() {
        let store = MapStore::new();
        let descriptor = descriptor("EMP-9", Some("9"), None);

        let result = fetch_punches(&store, &descriptor, &EngineConfig::default());
        assert!(result.punches.is_empty());
        assert_eq!(result.source, FetchSource::NoneFound);
        assert_eq!(result.source.to_string(), "none-found");
        // Every candidate was attempted before giving up.
        assert_eq!(store.queried(), vec!["9", "EMP-9"]);
    }

    // ==========================================================================
    // FA-003: A failing candidate falls through to the next one
    // ==========================================================================
    #[test]
    fn test_fa_003_store_error_falls_through_to_next_candidate() {
        let store = MapStore::new().with_failure("A").with_rows("B", 2);
        let descriptor = descriptor("B", Some("A"), None);

        let result = fetch_punches(&store, &descriptor, &EngineConfig::default());
        assert_eq!(result.punches.len(), 2);
        assert_eq!(result.source, FetchSource::Candidate(CandidateKind::RawId));
    }

    #[test]
    fn test_fa_004_all_candidates_failing_yields_none_found() {
        let store = MapStore::new().with_failure("A").with_failure("B");
        let descriptor = descriptor("B", Some("A"), None);

        let result = fetch_punches(&store, &descriptor, &EngineConfig::default());
        assert!(result.punches.is_empty());
        assert_eq!(result.source, FetchSource::NoneFound);
    }

    // ==========================================================================
    // FA-005: Pagination concatenates pages until a short page
    // ==========================================================================
    #[test]
    fn test_fa_005_pagination_exhausts_long_logs() {
        let store = MapStore::new().with_rows("7", 1200);
        let descriptor = descriptor("7", None, None);

        let result = fetch_punches(&store, &descriptor, &EngineConfig::default());
        assert_eq!(result.punches.len(), 1200);
        // 500 + 500 + 200: three pages for the single candidate.
        assert_eq!(store.queried().len(), 3);
    }

    #[test]
    fn test_fa_006_pagination_stops_on_exact_page_multiple() {
        let store = MapStore::new().with_rows("7", 1000);
        let descriptor = descriptor("7", None, None);

        let result = fetch_punches(&store, &descriptor, &EngineConfig::default());
        assert_eq!(result.punches.len(), 1000);
        // Two full pages plus the empty page that signals exhaustion.
        assert_eq!(store.queried().len(), 3);
    }

    // ==========================================================================
    // FA-006: Output is sorted and cleaned of unparseable rows
    // ==========================================================================
    #[test]
    fn test_fa_007_rows_sorted_by_timestamp() {
        let mut store = MapStore::new();
        store.rows.insert(
            "7".to_string(),
            vec![
                PunchRow {
                    timestamp: "2025-03-17 17:01:00".to_string(),
                    state: None,
                },
                PunchRow {
                    timestamp: "2025-03-17 08:02:00".to_string(),
                    state: None,
                },
            ],
        );
        let descriptor = descriptor("7", None, None);

        let result = fetch_punches(&store, &descriptor, &EngineConfig::default());
        assert_eq!(result.punches.len(), 2);
        assert!(result.punches[0].timestamp < result.punches[1].timestamp);
    }

    #[test]
    fn test_fa_008_unparseable_rows_dropped_not_fatal() {
        let mut store = MapStore::new();
        store.rows.insert(
            "7".to_string(),
            vec![
                PunchRow {
                    timestamp: "garbage".to_string(),
                    state: None,
                },
                PunchRow {
                    timestamp: "2025-03-17 08:02:00".to_string(),
                    state: None,
                },
            ],
        );
        let descriptor = descriptor("7", None, None);

        let result = fetch_punches(&store, &descriptor, &EngineConfig::default());
        // The candidate still wins on raw row count; only the bad row is lost.
        assert_eq!(result.punches.len(), 1);
        assert_eq!(result.source, FetchSource::Candidate(CandidateKind::DigitsOnlyId));
    }
}
