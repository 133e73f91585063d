//! Social graph routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::social;
use crate::state::AppState;

/// Create social graph routes
pub fn social_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/social/follow/:user_id",
            post(social::follow_user).delete(social::unfollow_user),
        )
        .route("/social/followers", get(social::followers))
        .route("/social/following", get(social::following))
}
