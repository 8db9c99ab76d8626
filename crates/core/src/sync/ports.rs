//! Port interfaces for record synchronization
//!
//! These traits define the boundaries between the synchronizer and the two
//! stores it mediates. The remote store is a document collection that assigns
//! ids and timestamps server-side; the mirror is durable local key-value
//! storage holding one serialized record array plus the edit-state key.

use async_trait::async_trait;
use roster_domain::{RecordDraft, Result, RosterRecord};
use serde_json::Value;

/// Trait for the preferred remote document store
#[async_trait]
pub trait RemoteRecordStore: Send + Sync {
    /// Create a record; the store assigns id and creation/update timestamps
    async fn create(&self, draft: &RecordDraft) -> Result<RosterRecord>;

    /// Replace the record with this id, returning the stored result
    async fn update(&self, id: &str, draft: &RecordDraft) -> Result<RosterRecord>;

    /// Delete the record with this id
    async fn delete(&self, id: &str) -> Result<()>;

    /// Fetch every record, ordered by creation time descending
    async fn fetch_all(&self) -> Result<Vec<RosterRecord>>;
}

/// Trait for the local mirror store
#[async_trait]
pub trait MirrorStore: Send + Sync {
    /// Read the raw mirrored array, `None` when the key was never written.
    ///
    /// Raw JSON values rather than typed records: legacy entries can carry a
    /// rank string in `occupation` or a deprecated `zipCode` field, and the
    /// migration pass normalizes them before typed decoding.
    async fn read_raw(&self) -> Result<Option<Vec<Value>>>;

    /// Overwrite the mirror with this record set
    async fn write(&self, records: &[RosterRecord]) -> Result<()>;

    /// Id of the record currently being edited, if any
    async fn editing_id(&self) -> Result<Option<String>>;

    /// Remember which record is being edited
    async fn set_editing_id(&self, id: &str) -> Result<()>;

    /// Forget the edit-state key
    async fn clear_editing_id(&self) -> Result<()>;
}
