//! Domain error to HTTP response mapping
//!
//! Every handler returns [`ApiError`] on failure; the response body keeps the
//! `{ "success": false, "error": ... }` shape the dashboard expects.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_domain::RosterError;
use serde_json::json;
use tracing::error;

/// Wrapper turning a [`RosterError`] into an HTTP response.
pub struct ApiError(RosterError);

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RosterError::BadRequest(_) | RosterError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RosterError::InvalidCredentials | RosterError::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            RosterError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.0, "request failed");
        }

        (status, Json(json!({ "success": false, "error": self.0.to_string() }))).into_response()
    }
}

/// 409 response for the caller-side email uniqueness check.
pub fn email_conflict() -> Response {
    (
        StatusCode::CONFLICT,
        Json(json!({ "success": false, "error": "A record with this email already exists" })),
    )
        .into_response()
}
