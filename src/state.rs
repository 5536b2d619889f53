use std::sync::Arc;

use crate::application::services::UserService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Creates the state from its service dependencies.
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }
}
