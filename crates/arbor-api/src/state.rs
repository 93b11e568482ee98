use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use arbor_session::SessionState;

/// Shared application state, injected into route handlers via Axum
/// state. Each session carries its own mutex so writes serialize per
/// session id; the outer map lock is held only long enough to look a
/// session up.
#[derive(Clone, Default)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<Uuid, Arc<Mutex<SessionState>>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
