//! Identifier resolution and paginated punch-log fetching.
//!
//! The punch-log store may key one employee's records under any of several
//! historical identifier formats. This module tries each candidate in
//! priority order, paginates the first productive one to exhaustion, and
//! records which identifier the data came from.

mod aggregator;
mod store;

pub use aggregator::{FetchResult, fetch_punches};
pub use store::{PAGE_SIZE, PunchStore};
