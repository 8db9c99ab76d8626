//! Session auth gate - core business logic
//!
//! Validates username/password pairs against the credential repository,
//! mints opaque bearer tokens and keeps the token -> session mapping.
//! Sessions have no expiry and are not persisted: logout or process restart
//! are the only ways a token dies.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use rand::Rng;
use roster_domain::{AccountSummary, Result, RosterError, Session};
use serde::Serialize;
use tracing::{debug, info};

use super::ports::{CredentialRepository, PasswordVerifier};

/// Alphabet for token suffixes, matching the base36 tokens the roster has
/// always issued. Not cryptographic.
const TOKEN_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Successful login payload: the minted token plus the public account fields.
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    pub token: String,
    pub user: AccountSummary,
}

/// Session auth gate
pub struct SessionService {
    credentials: Arc<dyn CredentialRepository>,
    verifier: Arc<dyn PasswordVerifier>,
    sessions: DashMap<String, Session>,
}

impl SessionService {
    /// Create a new gate over the given credential source and verifier
    pub fn new(
        credentials: Arc<dyn CredentialRepository>,
        verifier: Arc<dyn PasswordVerifier>,
    ) -> Self {
        Self { credentials, verifier, sessions: DashMap::new() }
    }

    /// Validate a username/password pair and open a session.
    ///
    /// Unknown username and wrong password return the identical
    /// `InvalidCredentials` error; missing fields fail earlier with
    /// `BadRequest`.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        if username.is_empty() || password.is_empty() {
            return Err(RosterError::BadRequest("Username and password required".into()));
        }

        let credential = self
            .credentials
            .find_by_username(username)
            .await?
            .ok_or(RosterError::InvalidCredentials)?;

        if !self.verifier.verify(password, &credential.password) {
            debug!(username, "password mismatch");
            return Err(RosterError::InvalidCredentials);
        }

        let token = mint_token();
        let session = Session {
            id: credential.id,
            username: credential.username.clone(),
            role: credential.role.clone(),
            login_time: Utc::now(),
        };
        self.sessions.insert(token.clone(), session);

        info!(username, "login successful");

        Ok(LoginOutcome { token, user: credential.summary() })
    }

    /// Resolve a bearer token to its session, or `Unauthorized`.
    ///
    /// This is the precondition filter every protected operation runs first.
    pub fn authenticate(&self, token: &str) -> Result<Session> {
        self.sessions
            .get(token)
            .map(|entry| entry.value().clone())
            .ok_or(RosterError::Unauthorized)
    }

    /// Drop the session keyed by this token.
    ///
    /// Idempotent: an already-absent token is not an error.
    pub fn logout(&self, token: &str) {
        if self.sessions.remove(token).is_some() {
            info!("session closed");
        }
    }

    /// Return the session behind a valid token
    pub fn check_session(&self, token: &str) -> Result<Session> {
        self.authenticate(token)
    }

    /// Public summaries of every credential entry
    pub async fn accounts(&self) -> Result<Vec<AccountSummary>> {
        let credentials = self.credentials.list().await?;
        Ok(credentials.iter().map(|credential| credential.summary()).collect())
    }

    /// Number of live sessions (diagnostics)
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

/// Mint an opaque bearer token: 11 random base36 chars plus the current
/// millisecond timestamp in base36, mirroring the historical token shape.
fn mint_token() -> String {
    let mut rng = rand::thread_rng();
    let mut token = String::with_capacity(20);
    for _ in 0..11 {
        let idx = rng.gen_range(0..TOKEN_CHARSET.len());
        token.push(TOKEN_CHARSET[idx] as char);
    }
    token.push_str(&to_base36(Utc::now().timestamp_millis()));
    token
}

fn to_base36(mut value: i64) -> String {
    if value <= 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(TOKEN_CHARSET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // Charset bytes are ASCII, so this cannot fail.
    String::from_utf8_lossy(&digits).into_owned()
}
