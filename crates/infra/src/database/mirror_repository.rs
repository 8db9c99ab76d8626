//! Mirror store implementation on the SQLite key-value table
//!
//! Persists the full serialized record array under one fixed key and the
//! edit-state id under another. Reads hand raw JSON back to the core so the
//! migration pass can normalize legacy entries before typed decoding.

use std::sync::Arc;

use async_trait::async_trait;
use roster_core::MirrorStore;
use roster_domain::{Result, RosterError, RosterRecord};
use rusqlite::{params, OptionalExtension};
use serde_json::Value;
use tokio::task;

use super::manager::DbManager;
use crate::errors::InfraError;

/// Key holding the mirrored record array.
const RECORDS_KEY: &str = "users";

/// Key holding the id of the record currently being edited.
const EDITING_KEY: &str = "editingUserId";

/// SQLite-backed implementation of [`MirrorStore`]
pub struct SqliteMirrorStore {
    db: Arc<DbManager>,
}

impl SqliteMirrorStore {
    /// Create a new store over the shared database manager
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    async fn get_value(&self, key: &'static str) -> Result<Option<String>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<Option<String>> {
            let conn = db.get_connection()?;
            let value = conn
                .query_row(
                    "SELECT value FROM kv_store WHERE key = ?1",
                    params![key],
                    |row| row.get::<_, String>(0),
                )
                .optional()
                .map_err(InfraError::from)?;
            Ok(value)
        })
        .await
        .map_err(InfraError::from)?
    }

    async fn put_value(&self, key: &'static str, value: String) -> Result<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at = excluded.updated_at",
                params![key, value],
            )
            .map_err(InfraError::from)?;
            Ok(())
        })
        .await
        .map_err(InfraError::from)?
    }

    async fn delete_value(&self, key: &'static str) -> Result<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<()> {
            let conn = db.get_connection()?;
            conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])
                .map_err(InfraError::from)?;
            Ok(())
        })
        .await
        .map_err(InfraError::from)?
    }
}

#[async_trait]
impl MirrorStore for SqliteMirrorStore {
    async fn read_raw(&self) -> Result<Option<Vec<Value>>> {
        let Some(payload) = self.get_value(RECORDS_KEY).await? else {
            return Ok(None);
        };

        let parsed: Value =
            serde_json::from_str(&payload).map_err(|e| RosterError::Serialization(e.to_string()))?;

        match parsed {
            Value::Array(records) => Ok(Some(records)),
            other => Err(RosterError::Storage(format!(
                "mirror key '{RECORDS_KEY}' holds {} instead of an array",
                type_name(&other)
            ))),
        }
    }

    async fn write(&self, records: &[RosterRecord]) -> Result<()> {
        let payload = serde_json::to_string(records)
            .map_err(|e| RosterError::Serialization(e.to_string()))?;
        self.put_value(RECORDS_KEY, payload).await
    }

    async fn editing_id(&self) -> Result<Option<String>> {
        self.get_value(EDITING_KEY).await
    }

    async fn set_editing_id(&self, id: &str) -> Result<()> {
        self.put_value(EDITING_KEY, id.to_string()).await
    }

    async fn clear_editing_id(&self) -> Result<()> {
        self.delete_value(EDITING_KEY).await
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
