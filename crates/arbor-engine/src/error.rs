use thiserror::Error;

use arbor_catalog::error::CatalogError;

#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// A submitted value falls outside the item's declared response
    /// type. Recoverable: the client corrects and resends.
    #[error("invalid response for item '{item_id}': {detail}")]
    InvalidResponse { item_id: String, detail: String },

    #[error("unknown item '{item_id}'")]
    UnknownItem { item_id: String },

    #[error("unknown domain '{domain_id}'")]
    UnknownDomain { domain_id: String },

    /// A catalog defect reached the engine. Fatal for the request; no
    /// partial scoring is returned on this path.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl EngineError {
    pub fn invalid(item_id: &str, detail: impl Into<String>) -> Self {
        Self::InvalidResponse {
            item_id: item_id.to_string(),
            detail: detail.into(),
        }
    }
}
