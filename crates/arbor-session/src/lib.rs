//! arbor-session
//!
//! Owns the mutable state of one assessment sitting: the response map,
//! the per-domain adaptive progress, cached domain scores, and the
//! finalized summary. All computation is delegated to arbor-engine; a
//! session is single-owner and does no locking of its own.

pub mod error;
pub mod session;

pub use session::{ResponseOutcome, SessionState};
