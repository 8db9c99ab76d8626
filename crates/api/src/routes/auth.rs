//! Auth gate endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use roster_domain::{Result, RosterError, Session};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::ApiJson;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/login
pub async fn login(
    State(ctx): State<Arc<AppContext>>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> std::result::Result<Json<Value>, ApiError> {
    let outcome = ctx.auth.login(&body.username, &body.password).await?;
    Ok(Json(json!({ "success": true, "token": outcome.token, "user": outcome.user })))
}

/// POST /api/logout
///
/// Gated: an unknown token is rejected before the session is dropped, so a
/// successful response always means a live session was closed.
pub async fn logout(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
) -> std::result::Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers).ok_or(RosterError::Unauthorized)?;
    ctx.auth.authenticate(&token)?;
    ctx.auth.logout(&token);
    Ok(Json(json!({ "success": true, "message": "Logged out successfully" })))
}

/// GET /api/auth/check
pub async fn check(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
) -> std::result::Result<Json<Value>, ApiError> {
    let session = authorize(&ctx, &headers)?;
    Ok(Json(json!({ "success": true, "user": session })))
}

/// GET /api/users
///
/// Public summaries of the credential table; passwords never leave the
/// repository boundary.
pub async fn list_accounts(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
) -> std::result::Result<Json<Value>, ApiError> {
    authorize(&ctx, &headers)?;
    let users = ctx.auth.accounts().await?;
    Ok(Json(json!({ "success": true, "users": users })))
}

/// Resolve the request's bearer token to a session.
fn authorize(ctx: &AppContext, headers: &HeaderMap) -> Result<Session> {
    let token = bearer_token(headers).ok_or(RosterError::Unauthorized)?;
    ctx.auth.authenticate(&token)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    value.split(' ').nth(1).map(str::to_string)
}
