use std::sync::Arc;

use signup_core::validation::ValidationEngine;

use crate::config::ServerConfig;
use crate::store::UserStore;

/// Shared application state available to all handlers via axum's `State` extractor.
///
/// Cheap to clone: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The same rule set the form runs client-side.
    pub engine: Arc<ValidationEngine>,
    /// In-memory registrations.
    pub users: Arc<UserStore>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(ValidationEngine::default()),
            users: Arc::new(UserStore::new()),
        }
    }
}
