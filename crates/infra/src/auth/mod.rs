//! Credential storage and password verification adapters

pub mod credentials;
pub mod verifier;

pub use credentials::StaticCredentialRepository;
pub use verifier::{PlainTextVerifier, Sha256Verifier};
