//! Record and edit-state endpoints
//!
//! Unauthenticated: the dashboard drives these directly. Every mutating
//! response reports which store served it (`"remote"` or `"local"`) so the
//! client can surface degraded-mode operation.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_domain::{RecordDraft, RosterError};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::context::AppContext;
use crate::error::{email_conflict, ApiError};
use crate::extract::ApiJson;

/// GET /api/records
///
/// Never fails: a remote outage falls back to the mirror and an unreadable
/// mirror yields an empty set.
pub async fn list(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let outcome = ctx.sync.load_all().await;
    Json(json!({ "success": true, "source": outcome.source, "records": outcome.records }))
}

/// POST /api/records
pub async fn create(
    State(ctx): State<Arc<AppContext>>,
    ApiJson(draft): ApiJson<RecordDraft>,
) -> Result<Response, ApiError> {
    if ctx.sync.email_conflict(&draft.email, None).await {
        return Ok(email_conflict());
    }

    let saved = ctx.sync.save(draft).await?;
    Ok(Json(json!({ "success": true, "source": saved.source, "record": saved.record }))
        .into_response())
}

/// PUT /api/records/{id}
pub async fn update(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    ApiJson(draft): ApiJson<RecordDraft>,
) -> Result<Response, ApiError> {
    // The record being edited keeps its own email.
    if ctx.sync.email_conflict(&draft.email, Some(&id)).await {
        return Ok(email_conflict());
    }

    let source = ctx.sync.update(&id, draft).await?;
    Ok(Json(json!({ "success": true, "source": source })).into_response())
}

/// DELETE /api/records/{id}
pub async fn remove(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let source = ctx.sync.delete(&id).await?;
    Ok(Json(json!({ "success": true, "source": source })))
}

/// GET /api/records/editing
pub async fn editing(State(ctx): State<Arc<AppContext>>) -> Result<Json<Value>, ApiError> {
    let id = ctx.mirror.editing_id().await?;
    Ok(Json(json!({ "success": true, "editingId": id })))
}

#[derive(Debug, Deserialize)]
pub struct EditingRequest {
    #[serde(default)]
    pub id: String,
}

/// PUT /api/records/editing
pub async fn set_editing(
    State(ctx): State<Arc<AppContext>>,
    ApiJson(body): ApiJson<EditingRequest>,
) -> Result<Json<Value>, ApiError> {
    if body.id.is_empty() {
        return Err(RosterError::BadRequest("Record id required".into()).into());
    }
    ctx.mirror.set_editing_id(&body.id).await?;
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/records/editing
pub async fn clear_editing(State(ctx): State<Arc<AppContext>>) -> Result<Json<Value>, ApiError> {
    ctx.mirror.clear_editing_id().await?;
    Ok(Json(json!({ "success": true })))
}
