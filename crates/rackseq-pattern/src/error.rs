//! Errors for the rename commit gate.

use rackseq_core::EntityId;
use thiserror::Error;

/// Returned by [`PatternPreview::renames()`](crate::PatternPreview::renames)
/// while any entry in the preview is still in conflict.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{conflicts} conflicting label(s) block the rename, first at entity {first}")]
pub struct CommitBlocked {
    /// Number of conflicting entries.
    pub conflicts: usize,
    /// Entity of the first conflicting entry, in visiting order.
    pub first: EntityId,
}
