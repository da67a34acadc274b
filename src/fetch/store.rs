//! Punch-log store abstraction.

use crate::error::EngineResult;
use crate::models::PunchRow;

/// Rows fetched per page when paginating a candidate's punch log.
pub const PAGE_SIZE: usize = 500;

/// Read access to a punch-log store, keyed by identifier value.
///
/// Implementations own the actual transport (database, HTTP, file dump);
/// the engine only ever reads pages. Retry and timeout policy belong to
/// the implementation, not to the aggregator.
pub trait PunchStore {
    /// Fetches up to `limit` rows for `identifier` starting at `offset`.
    ///
    /// Returning fewer than `limit` rows signals that the log for this
    /// identifier is exhausted.
    fn fetch_page(
        &self,
        identifier: &str,
        offset: usize,
        limit: usize,
    ) -> EngineResult<Vec<PunchRow>>;
}
