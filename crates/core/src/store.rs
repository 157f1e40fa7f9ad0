//! Error type shared by the persistence seams.

use thiserror::Error;

/// Errors surfaced by store trait implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The aggregate was modified concurrently; the write was rejected.
    #[error("aggregate version is stale")]
    Conflict,

    /// The storage backend failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}
