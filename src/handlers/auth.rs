//! Authentication HTTP handlers
//!
//! Registration, login/logout and session inspection endpoints.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{
    ActionResponse, LoginRequest, RegisterRequest, SessionStatusResponse, SessionUser,
    UserResponse,
};
use crate::state::AppState;

/// POST /auth/register - Create a new account
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate()?;

    let user = state
        .auth_service
        .register(&req.username, &req.email, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /auth/login - Verify credentials and create a session
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ActionResponse>), ApiError> {
    let user = state
        .auth_service
        .verify_credentials(&req.username, &req.password)
        .await?;

    let (jar, result) = state
        .session_service
        .create_session(jar, &SessionUser::from(&user));

    Ok((jar, Json(result)))
}

/// GET /auth/session - Whether the caller holds a session cookie
pub async fn session_status(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Json<SessionStatusResponse> {
    Json(SessionStatusResponse {
        authenticated: state.session_service.verify_session(&jar),
    })
}

/// GET /auth/me - The authenticated user's account
pub async fn me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<UserResponse>, ApiError> {
    let subject = state
        .session_service
        .current_user(&jar)
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    let user = state.auth_service.get_user_by_id(subject.id).await?;

    Ok(Json(user.into()))
}

/// POST /auth/logout - Destroy the session
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ActionResponse>) {
    let (jar, result) = state.session_service.delete_session(jar);
    (jar, Json(result))
}
