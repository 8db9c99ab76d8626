//! Password verifiers
//!
//! Two implementations of the gate's [`PasswordVerifier`] seam: the direct
//! comparison the roster has always used, and a SHA-256 hex-digest comparison
//! for credential tables that store hashes instead of secrets.

use roster_core::PasswordVerifier;
use sha2::{Digest, Sha256};

/// Compares the supplied password to the stored value directly.
pub struct PlainTextVerifier;

impl PasswordVerifier for PlainTextVerifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        supplied == stored
    }
}

/// Compares the SHA-256 hex digest of the supplied password to the stored
/// digest. Case-insensitive on the stored hex.
pub struct Sha256Verifier;

impl Sha256Verifier {
    /// Digest a password into the stored form.
    pub fn digest(password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }
}

impl PasswordVerifier for Sha256Verifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        Self::digest(supplied) == stored.to_lowercase()
    }
}
