//! Record synchronizer - core business logic
//!
//! Mediates every create/read/update/delete on roster records across the
//! preferred remote store and the local mirror:
//!
//! - remote is tried first whenever a client handle exists;
//! - the mirror is rewritten after every successful operation;
//! - when remote is unavailable or fails, the mirror is the sole source of
//!   truth and the operation completes locally.
//!
//! Remote-path failures are absorbed and logged, never surfaced; an error
//! reaches the caller only when the local path fails too. Reads never error
//! at all ("never block the dashboard"). Every operation reports which store
//! actually served it via [`StoreSource`], so callers and tests can assert
//! the path taken instead of inferring it from logs.
//!
//! The in-memory cache is owned here and all operations are serialized
//! behind a single-flight guard, so a delete can no longer interleave with a
//! save and leave the cache reflecting neither outcome.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use roster_domain::{RecordDraft, Result, RosterError, RosterRecord};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use super::migration::migrate_records;
use super::ports::{MirrorStore, RemoteRecordStore};

/// Prefix of ids minted when a record is created while remote is down.
const LOCAL_ID_PREFIX: &str = "local_";

const ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Which store actually served an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreSource {
    Remote,
    Local,
}

/// Outcome of a full read: the records and the store they came from.
#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    pub source: StoreSource,
    pub records: Vec<RosterRecord>,
}

/// Outcome of a save: the stored record and the store that assigned its id.
#[derive(Debug, Clone, Serialize)]
pub struct SavedRecord {
    pub source: StoreSource,
    pub record: RosterRecord,
}

/// Record synchronizer
pub struct SyncService {
    remote: Option<Arc<dyn RemoteRecordStore>>,
    mirror: Arc<dyn MirrorStore>,
    cache: RwLock<Vec<RosterRecord>>,
    /// Serializes logical operations; one in-flight call at a time.
    op_guard: Mutex<()>,
}

impl SyncService {
    /// Create a synchronizer. `remote` is `None` when the remote client could
    /// not be initialised at startup; the service then runs mirror-only.
    pub fn new(remote: Option<Arc<dyn RemoteRecordStore>>, mirror: Arc<dyn MirrorStore>) -> Self {
        Self { remote, mirror, cache: RwLock::new(Vec::new()), op_guard: Mutex::new(()) }
    }

    /// Whether a remote client handle exists.
    ///
    /// Not a live probe: a remote that initialised fine but is unreachable
    /// now still reports available, and each operation pays the
    /// failure-and-fallback path instead.
    pub fn is_remote_available(&self) -> bool {
        self.remote.is_some()
    }

    /// Load every record, remote-first with mirror fallback.
    ///
    /// Never errors: remote failures fall back to the mirror, an unreadable
    /// or absent mirror yields an empty set.
    pub async fn load_all(&self) -> SyncOutcome {
        let _guard = self.op_guard.lock().await;

        if let Some(remote) = &self.remote {
            match remote.fetch_all().await {
                Ok(records) => {
                    if let Err(err) = self.mirror.write(&records).await {
                        warn!(error = %err, "failed to refresh mirror after remote fetch");
                    }
                    *self.cache.write().await = records.clone();
                    debug!(count = records.len(), "records loaded from remote");
                    return SyncOutcome { source: StoreSource::Remote, records };
                }
                Err(err) => {
                    warn!(error = %err, "remote fetch failed, falling back to mirror");
                }
            }
        }

        let records = self.load_mirror().await;
        *self.cache.write().await = records.clone();
        debug!(count = records.len(), "records loaded from mirror");
        SyncOutcome { source: StoreSource::Local, records }
    }

    /// Create a record, remote-first.
    ///
    /// Exactly one path runs per call: either the remote assigns the id and
    /// timestamps, or a `local_`-prefixed id is minted and stamped here.
    /// Never both.
    pub async fn save(&self, draft: RecordDraft) -> Result<SavedRecord> {
        let _guard = self.op_guard.lock().await;

        if let Some(remote) = &self.remote {
            match remote.create(&draft).await {
                Ok(record) => {
                    let mut cache = self.cache.write().await;
                    cache.push(record.clone());
                    if let Err(err) = self.mirror.write(&cache).await {
                        warn!(error = %err, "failed to mirror remote create");
                    }
                    info!(record_id = %record.id, source = "remote", "record saved");
                    return Ok(SavedRecord { source: StoreSource::Remote, record });
                }
                Err(err) => {
                    warn!(error = %err, "remote create failed, saving to mirror only");
                }
            }
        }

        let now = Utc::now();
        let record = draft.into_record(local_record_id(), Some(now), Some(now));

        let mut cache = self.cache.write().await;
        cache.push(record.clone());
        // Local path: a mirror failure here means both stores failed, so it
        // propagates.
        self.mirror.write(&cache).await?;

        info!(record_id = %record.id, source = "local", "record saved");
        Ok(SavedRecord { source: StoreSource::Local, record })
    }

    /// Replace the record with this id wholesale.
    ///
    /// Full-replace semantics: the stored record becomes exactly the draft
    /// (plus id and store-assigned timestamps); fields absent from the draft
    /// are lost. A missing cache entry is not an error, the cache just stays
    /// stale until the next [`load_all`](Self::load_all).
    pub async fn update(&self, id: &str, draft: RecordDraft) -> Result<StoreSource> {
        if id.is_empty() {
            return Err(RosterError::InvalidInput("record id is required for update".into()));
        }

        let _guard = self.op_guard.lock().await;

        if let Some(remote) = &self.remote {
            match remote.update(id, &draft).await {
                Ok(record) => {
                    let mut cache = self.cache.write().await;
                    replace_in_cache(&mut cache, id, record);
                    if let Err(err) = self.mirror.write(&cache).await {
                        warn!(error = %err, "failed to mirror remote update");
                    }
                    info!(record_id = %id, source = "remote", "record updated");
                    return Ok(StoreSource::Remote);
                }
                Err(err) => {
                    warn!(error = %err, "remote update failed, updating mirror only");
                }
            }
        }

        let record = draft.into_record(id.to_string(), None, Some(Utc::now()));

        let mut cache = self.cache.write().await;
        replace_in_cache(&mut cache, id, record);
        self.mirror.write(&cache).await?;

        info!(record_id = %id, source = "local", "record updated");
        Ok(StoreSource::Local)
    }

    /// Delete the record with this id.
    ///
    /// Remote deletion failures are absorbed; the record is filtered out of
    /// the cache and mirror unconditionally. Idempotent: deleting an unknown
    /// id succeeds.
    pub async fn delete(&self, id: &str) -> Result<StoreSource> {
        if id.is_empty() {
            return Err(RosterError::InvalidInput("record id is required for delete".into()));
        }

        let _guard = self.op_guard.lock().await;

        let mut remote_ok = false;
        if let Some(remote) = &self.remote {
            match remote.delete(id).await {
                Ok(()) => remote_ok = true,
                Err(err) => {
                    warn!(error = %err, "remote delete failed, removing from mirror only");
                }
            }
        }

        let mut cache = self.cache.write().await;
        cache.retain(|record| record.id != id);

        let mirror_result = self.mirror.write(&cache).await;
        if remote_ok {
            if let Err(err) = mirror_result {
                warn!(error = %err, "failed to mirror remote delete");
            }
            info!(record_id = %id, source = "remote", "record deleted");
            Ok(StoreSource::Remote)
        } else {
            mirror_result?;
            info!(record_id = %id, source = "local", "record deleted");
            Ok(StoreSource::Local)
        }
    }

    /// Whether another known record (different id) already uses this email.
    ///
    /// Backs the caller-side uniqueness check over the cached set; storage
    /// itself never enforces it.
    pub async fn email_conflict(&self, email: &str, exclude_id: Option<&str>) -> bool {
        let cache = self.cache.read().await;
        cache
            .iter()
            .any(|record| record.email == email && Some(record.id.as_str()) != exclude_id)
    }

    /// Snapshot of the in-memory working copy.
    pub async fn cached_records(&self) -> Vec<RosterRecord> {
        self.cache.read().await.clone()
    }

    /// Read the mirror, run the migration pass, decode.
    ///
    /// All failures are absorbed into an empty set; a changed payload is
    /// written back so migration happens at most once per legacy record.
    async fn load_mirror(&self) -> Vec<RosterRecord> {
        let raw = match self.mirror.read_raw().await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "mirror unreadable, starting empty");
                return Vec::new();
            }
        };

        let (migrated, changed) = migrate_records(raw);
        let records = decode_records(migrated);

        if changed {
            info!(count = records.len(), "legacy mirror records migrated");
            if let Err(err) = self.mirror.write(&records).await {
                warn!(error = %err, "failed to persist migrated mirror");
            }
        }

        records
    }
}

fn replace_in_cache(cache: &mut Vec<RosterRecord>, id: &str, record: RosterRecord) {
    match cache.iter_mut().find(|existing| existing.id == id) {
        Some(existing) => *existing = record,
        None => {
            // Store-side update succeeded but the working copy never held the
            // record; it will reappear on the next full load.
            warn!(record_id = %id, "updated record not in cache, cache stale until next load");
        }
    }
}

fn decode_records(raw: Vec<Value>) -> Vec<RosterRecord> {
    raw.into_iter()
        .filter_map(|value| match serde_json::from_value::<RosterRecord>(value) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(error = %err, "dropping undecodable mirror record");
                None
            }
        })
        .collect()
}

/// Mint a mirror-only record id: fixed prefix, millisecond timestamp, nine
/// random base36 chars. Uniqueness is probabilistic, not guaranteed; there is
/// deliberately no collision check against existing ids.
fn local_record_id() -> String {
    let mut rng = rand::thread_rng();
    let mut suffix = String::with_capacity(9);
    for _ in 0..9 {
        let idx = rng.gen_range(0..ID_CHARSET.len());
        suffix.push(ID_CHARSET[idx] as char);
    }
    format!("{}{}_{}", LOCAL_ID_PREFIX, Utc::now().timestamp_millis(), suffix)
}
