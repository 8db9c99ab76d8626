//! Port interfaces for the session auth gate
//!
//! These traits define the boundaries between the gate's logic and the
//! credential storage / password verification implementations, so the gate
//! can move from a static table and plaintext comparison to a real backend
//! without changing.

use async_trait::async_trait;
use roster_domain::{Credential, Result};

/// Trait for credential lookup and listing
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Find the credential entry with this exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>>;

    /// List all credential entries
    async fn list(&self) -> Result<Vec<Credential>>;
}

/// Trait for comparing a supplied password against the stored secret
///
/// Injected at gate construction. Implementations decide the stored form
/// (plaintext for source compatibility, digest for hash-and-compare).
pub trait PasswordVerifier: Send + Sync {
    /// Whether `supplied` matches `stored`
    fn verify(&self, supplied: &str, stored: &str) -> bool;
}
