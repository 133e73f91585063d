//! Social graph HTTP handlers
//!
//! Follow/unfollow mutations and follower listings, gated by the session.
//! Authorization runs before any database work: a request without a valid
//! session is rejected without touching the follows table.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{ActionResponse, UserResponse};
use crate::social::{FollowOutcome, UnfollowOutcome};
use crate::state::AppState;

fn not_authorised() -> (StatusCode, Json<ActionResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ActionResponse::failed("not authorised")),
    )
}

/// POST /social/follow/:user_id - Follow a user
pub async fn follow_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(user_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ActionResponse>), ApiError> {
    let actor = match state.session_service.current_user(&jar) {
        Ok(actor) => actor,
        Err(_) => return Ok(not_authorised()),
    };

    match state.follow_service.follow(actor.id, user_id).await? {
        FollowOutcome::Followed(_) => Ok((
            StatusCode::OK,
            Json(ActionResponse::ok("followed successfully")),
        )),
        FollowOutcome::AlreadyFollowing => Ok((
            StatusCode::CONFLICT,
            Json(ActionResponse::failed("already following")),
        )),
    }
}

/// DELETE /social/follow/:user_id - Unfollow a user
pub async fn unfollow_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(user_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ActionResponse>), ApiError> {
    let actor = match state.session_service.current_user(&jar) {
        Ok(actor) => actor,
        Err(_) => return Ok(not_authorised()),
    };

    match state.follow_service.unfollow(actor.id, user_id).await? {
        UnfollowOutcome::Unfollowed => Ok((
            StatusCode::OK,
            Json(ActionResponse::ok("unfollowed successfully")),
        )),
        UnfollowOutcome::NotFollowing => Ok((
            StatusCode::NOT_FOUND,
            Json(ActionResponse::failed("not following")),
        )),
    }
}

/// GET /social/followers - Users following the authenticated user
pub async fn followers(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let actor = state
        .session_service
        .current_user(&jar)
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    let users = state.follow_service.followers(actor.id).await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /social/following - Users the authenticated user follows
pub async fn following(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let actor = state
        .session_service
        .current_user(&jar)
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    let users = state.follow_service.following(actor.id).await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
