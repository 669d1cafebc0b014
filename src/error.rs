//! Errors shared by the selection routines.

use thiserror::Error;

/// Failure of a selection call. No partial results accompany an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// At least one item was requested from an empty (effective) source.
    #[error("cannot select from an empty source")]
    EmptySource,
    /// A signed count from the host was negative.
    #[error("count must be >= 0 (got {0})")]
    InvalidCount(i64),
}

/// Convert a signed count coming from a host API into a `usize`.
///
/// The selection functions take `usize`, so this is the only place a negative
/// count can be rejected.
pub fn count_from_signed(n: i64) -> Result<usize, SelectError> {
    usize::try_from(n).map_err(|_| SelectError::InvalidCount(n))
}
