//! Cart error types.

use crate::storage::StorageError;

/// Errors surfaced by cart store operations.
///
/// All variants are recoverable: by the time an error is returned the
/// in-memory mutation has already been applied, and the cart remains
/// usable. Callers may retry the write (any later mutation re-persists the
/// full snapshot) or report the failure and move on.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// Writing the snapshot to storage failed.
    #[error("failed to persist cart snapshot: {0}")]
    Persist(#[from] StorageError),

    /// Serializing the snapshot failed.
    #[error("failed to encode cart snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}
