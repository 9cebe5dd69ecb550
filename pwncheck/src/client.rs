use std::future::Future;

use crate::error::Error;
use crate::range::RangeMap;

/// Capability to fetch every known breach entry for one disclosed
/// 5-character hash prefix.
///
/// The engine depends only on this contract. The networked
/// implementation lives in `pwncheck-api`; tests substitute in-memory
/// stubs. Implementations must surface transport failures and
/// non-success responses as [`Error::Transport`] (carrying status and
/// body where available) and must treat an empty response body as a
/// valid empty map, never as an error.
pub trait RangeClient {
    /// Returns the suffix-to-count map for `prefix`.
    fn range(&self, prefix: &str) -> impl Future<Output = Result<RangeMap, Error>> + Send;
}
