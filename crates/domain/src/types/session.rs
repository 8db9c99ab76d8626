//! Session and credential types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the credential table the auth gate validates against.
///
/// `password` is the stored secret in whatever form the configured verifier
/// expects (plaintext for the compatibility verifier, hex digest for the
/// hashed one). It is never serialized outward; public projections go through
/// [`AccountSummary`].
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: String,
}

impl Credential {
    /// Public projection without the stored secret.
    pub fn summary(&self) -> AccountSummary {
        AccountSummary { id: self.id, username: self.username.clone(), role: self.role.clone() }
    }
}

/// Public account fields returned by login, session checks and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: i64,
    pub username: String,
    pub role: String,
}

/// Server-side session record, keyed by opaque bearer token.
///
/// Sessions have no TTL: they live until explicit logout or process restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub login_time: DateTime<Utc>,
}

impl Session {
    pub fn summary(&self) -> AccountSummary {
        AccountSummary { id: self.id, username: self.username.clone(), role: self.role.clone() }
    }
}
