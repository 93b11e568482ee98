use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use arbor_catalog::get_protocol;
use arbor_core::models::response::{RaterRole, ResponseValue};
use arbor_core::models::summary::AssessmentSummary;
use arbor_session::{ResponseOutcome, SessionState};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub assessment_definition_id: String,
}

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, ApiError> {
    let protocol = get_protocol(&req.assessment_definition_id).ok_or_else(|| {
        ApiError::NotFound(format!(
            "protocol not found: {}",
            req.assessment_definition_id
        ))
    })?;

    let definition = Arc::new(protocol.definition().clone());
    let session = SessionState::new(definition)?;
    let session_id = session.id();

    state
        .sessions
        .write()
        .await
        .insert(session_id, Arc::new(Mutex::new(session)));

    tracing::info!(
        session_id = %session_id,
        protocol = %req.assessment_definition_id,
        "session_created"
    );
    Ok(Json(CreateSessionResponse { session_id }))
}

async fn session_handle(
    state: &AppState,
    id: Uuid,
) -> Result<Arc<Mutex<SessionState>>, ApiError> {
    state
        .sessions
        .read()
        .await
        .get(&id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))
}

#[derive(Deserialize)]
pub struct RecordResponseRequest {
    pub item_id: String,
    #[serde(default)]
    pub role: RaterRole,
    pub value: ResponseValue,
}

pub async fn record_response(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RecordResponseRequest>,
) -> Result<Json<ResponseOutcome>, ApiError> {
    let handle = session_handle(&state, id).await?;
    let mut session = handle.lock().await;
    let outcome = session.record_response(&req.item_id, req.role, req.value)?;
    Ok(Json(outcome))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentSummary>, ApiError> {
    let handle = session_handle(&state, id).await?;
    let session = handle.lock().await;
    Ok(Json(session.summary()?))
}

#[derive(Serialize)]
pub struct AdvanceResponse {
    /// `None` once every domain is finished.
    pub current_domain: Option<String>,
}

pub async fn advance_domain(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdvanceResponse>, ApiError> {
    let handle = session_handle(&state, id).await?;
    let mut session = handle.lock().await;
    let current_domain = session.advance_domain()?;
    Ok(Json(AdvanceResponse { current_domain }))
}

pub async fn finalize_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentSummary>, ApiError> {
    let handle = session_handle(&state, id).await?;
    let mut session = handle.lock().await;
    let summary = session.finalize()?;
    tracing::info!(session_id = %id, "session_finalized");
    Ok(Json(summary))
}
