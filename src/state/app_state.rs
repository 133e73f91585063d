//! Application state shared across handlers

use std::sync::Arc;

use crate::auth::{AuthService, SessionService};
use crate::social::FollowService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub session_service: Arc<SessionService>,
    pub follow_service: Arc<FollowService>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        session_service: Arc<SessionService>,
        follow_service: Arc<FollowService>,
    ) -> Self {
        Self {
            auth_service,
            session_service,
            follow_service,
        }
    }
}
