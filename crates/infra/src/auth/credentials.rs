//! Static in-memory credential table
//!
//! The roster ships with a single seeded admin account; a real persistence
//! backend slots in behind the same [`CredentialRepository`] trait without
//! touching the gate.

use async_trait::async_trait;
use roster_core::CredentialRepository;
use roster_domain::{Credential, Result};

/// Fixed-size in-memory implementation of [`CredentialRepository`]
pub struct StaticCredentialRepository {
    entries: Vec<Credential>,
}

impl StaticCredentialRepository {
    /// Build a table from explicit entries
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    /// The seeded single-admin table the service starts with
    pub fn seeded() -> Self {
        Self::new(vec![Credential {
            id: 1,
            username: "omar".to_string(),
            password: "1111".to_string(),
            role: "admin".to_string(),
        }])
    }
}

#[async_trait]
impl CredentialRepository for StaticCredentialRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>> {
        Ok(self.entries.iter().find(|entry| entry.username == username).cloned())
    }

    async fn list(&self) -> Result<Vec<Credential>> {
        Ok(self.entries.clone())
    }
}
