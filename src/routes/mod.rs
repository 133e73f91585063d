//! Route definitions for the Mingle API

mod auth;
mod social;

use axum::Router;

use crate::state::AppState;

pub use auth::auth_routes;
pub use social::social_routes;

/// All API routes, without middleware layers
pub fn api_router() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(social_routes())
}
