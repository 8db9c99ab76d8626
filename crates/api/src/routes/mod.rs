//! HTTP routes
//!
//! Two trust domains share one router: the auth endpoints (`/api/login`,
//! `/api/logout`, `/api/auth/check`, `/api/users`) sit behind the bearer
//! token gate, while the record endpoints are open to the dashboard without
//! authentication.

pub mod auth;
pub mod records;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::json;

use crate::context::AppContext;

/// Assemble the application router over a shared context.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/auth/check", get(auth::check))
        .route("/api/users", get(auth::list_accounts))
        .route("/api/records", get(records::list).post(records::create))
        .route(
            "/api/records/editing",
            get(records::editing).put(records::set_editing).delete(records::clear_editing),
        )
        .route("/api/records/{id}", put(records::update).delete(records::remove))
        .fallback(not_found)
        .with_state(ctx)
}

/// Fallback body for unknown routes, kept in the shape clients already parse.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Route not found" })))
}
