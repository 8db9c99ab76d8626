//! Infrastructure error types and their domain mapping

use roster_domain::RosterError;
use thiserror::Error;

/// Errors raised inside infrastructure adapters before they cross into the
/// domain `Result`.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<InfraError> for RosterError {
    fn from(err: InfraError) -> Self {
        match err {
            InfraError::Pool(e) => Self::Storage(e.to_string()),
            InfraError::Sqlite(e) => Self::Storage(e.to_string()),
            InfraError::Http(e) => Self::Remote(e.to_string()),
            InfraError::Json(e) => Self::Serialization(e.to_string()),
            InfraError::Join(e) => Self::Internal(e.to_string()),
        }
    }
}
