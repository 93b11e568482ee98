use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use arbor_catalog::error::CatalogError;
use arbor_engine::error::EngineError;
use arbor_session::error::SessionError;

/// Unified API error type for all route handlers.
///
/// The mapping is the engine's stable taxonomy: invalid responses and
/// unknown items are the client's to fix (400), writes to a finalized
/// session conflict (409), catalog defects are operator problems (500)
/// and never a client error.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidResponse { .. }
            | EngineError::UnknownItem { .. }
            | EngineError::UnknownDomain { .. } => ApiError::BadRequest(e.to_string()),
            EngineError::Catalog(cat) => ApiError::Internal(cat.to_string()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Finalized { .. } | SessionError::IncompleteDomain { .. } => {
                ApiError::Conflict(e.to_string())
            }
            SessionError::UnknownDomain { .. } | SessionError::NotHeld { .. } => {
                ApiError::BadRequest(e.to_string())
            }
            SessionError::Engine(engine) => engine.into(),
            SessionError::Catalog(cat) => ApiError::Internal(cat.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::UnknownProtocol(id) => {
                ApiError::NotFound(format!("protocol not found: {id}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}
