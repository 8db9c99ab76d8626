//! # Roster Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The SQLite-backed mirror store (local fallback persistence)
//! - The HTTP client for the remote document store
//! - Credential table and password verifiers for the auth gate
//! - Configuration loading (environment first, file fallback)
//!
//! ## Architecture
//! - Implements traits defined in `roster-core`
//! - Depends on `roster-domain` and `roster-core`
//! - Contains all "impure" code (I/O, vendors)

pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod remote;

// Re-export commonly used items
pub use auth::{PlainTextVerifier, Sha256Verifier, StaticCredentialRepository};
pub use database::{DbManager, SqliteMirrorStore};
pub use errors::InfraError;
pub use remote::HttpRemoteStore;
