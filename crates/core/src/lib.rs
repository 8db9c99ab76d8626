//! # Roster Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The session auth gate ([`SessionService`])
//! - The record synchronizer ([`SyncService`]) and its fallback policy
//! - The legacy mirror migration pass
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `roster-domain`
//! - No database or HTTP code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod auth;
pub mod sync;

// Re-export specific items to avoid ambiguity
pub use auth::ports::{CredentialRepository, PasswordVerifier};
pub use auth::{LoginOutcome, SessionService};
pub use sync::ports::{MirrorStore, RemoteRecordStore};
pub use sync::{SavedRecord, StoreSource, SyncOutcome, SyncService};
