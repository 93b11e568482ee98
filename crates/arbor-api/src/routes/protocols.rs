use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use arbor_catalog::catalog::AssessmentDefinition;
use arbor_catalog::{all_protocols, get_protocol};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct ProtocolSummary {
    id: String,
    name: String,
}

pub async fn list_protocols() -> Json<Vec<ProtocolSummary>> {
    let protocols: Vec<ProtocolSummary> = all_protocols()
        .iter()
        .map(|p| ProtocolSummary {
            id: p.id().to_string(),
            name: p.name().to_string(),
        })
        .collect();
    Json(protocols)
}

pub async fn get_protocol_detail(
    Path(id): Path<String>,
) -> Result<Json<AssessmentDefinition>, ApiError> {
    let protocol = get_protocol(&id)
        .ok_or_else(|| ApiError::NotFound(format!("protocol not found: {id}")))?;
    Ok(Json(protocol.definition().clone()))
}
