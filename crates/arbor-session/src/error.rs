use thiserror::Error;
use uuid::Uuid;

use arbor_catalog::error::CatalogError;
use arbor_engine::error::EngineError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Write attempted after finalization. Recoverable: the client
    /// starts a new session.
    #[error("session {session_id} is finalized and read-only")]
    Finalized { session_id: Uuid },

    #[error("cannot finalize session {session_id}: domain '{domain_id}' is not complete")]
    IncompleteDomain { session_id: Uuid, domain_id: String },

    #[error("unknown domain '{domain_id}'")]
    UnknownDomain { domain_id: String },

    #[error("domain '{domain_id}' is not held for review")]
    NotHeld { domain_id: String },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
