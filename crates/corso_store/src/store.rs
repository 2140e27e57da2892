//! Record store trait definition.

use corso_core::{UserId, UserRecord};
use corso_error::CorsoResult;
use std::collections::BTreeMap;

/// The full persisted state: one record per user id.
pub type RecordMap = BTreeMap<UserId, UserRecord>;

/// Trait for pluggable record persistence backends.
///
/// The store is never a hard dependency for availability: `read` recovers
/// from any backing fault by reporting an empty map, and callers treat a
/// failed `write` as acceptable eventual-consistency loss rather than an
/// operation failure.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the full record map.
    ///
    /// Never fails. A missing, empty, unreadable or malformed backing file
    /// yields an empty map; the fault is logged and treated as absence.
    async fn read(&self) -> RecordMap;

    /// Replace the full record map.
    ///
    /// Atomic from the perspective of any concurrent `read`: the new content
    /// is fully staged before being swapped into place, so a crash mid-write
    /// never leaves a partial file observable to readers.
    ///
    /// # Errors
    ///
    /// Returns an error if staging or the final replace fails. Callers log
    /// and continue on the in-memory state.
    async fn write(&self, records: &RecordMap) -> CorsoResult<()>;
}
