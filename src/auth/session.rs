//! Session facade
//!
//! Composes the token codec and the cookie store into create/verify/destroy
//! operations. This service is the only component that touches the session
//! cookie; handlers and other services go through it.

use axum_extra::extract::cookie::CookieJar;

use crate::models::{ActionResponse, SessionUser};

use super::cookie;
use super::token::{TokenCodec, TokenError};

/// Session lifecycle operations over a signed cookie
#[derive(Clone)]
pub struct SessionService {
    codec: TokenCodec,
    ttl_seconds: i64,
}

impl SessionService {
    pub fn new(jwt_secret: String, ttl_seconds: i64) -> Self {
        Self {
            codec: TokenCodec::new(jwt_secret),
            ttl_seconds,
        }
    }

    /// Encode `user` and store the result in the session cookie.
    ///
    /// On signing failure the jar is returned untouched and the result
    /// reports failure; the raw error goes to the log only.
    pub fn create_session(&self, jar: CookieJar, user: &SessionUser) -> (CookieJar, ActionResponse) {
        match self.codec.encode(user) {
            Ok(token) => (
                cookie::write(jar, token, self.ttl_seconds),
                ActionResponse::ok("login successful"),
            ),
            Err(e) => {
                tracing::error!(error = %e, "failed to sign session token");
                (jar, ActionResponse::failed("unable to login"))
            }
        }
    }

    /// True iff the session cookie is present.
    ///
    /// Presence only: the signature is not checked here. Protected
    /// operations authenticate through [`current_user`](Self::current_user)
    /// instead.
    pub fn verify_session(&self, jar: &CookieJar) -> bool {
        cookie::read(jar).is_some()
    }

    /// Decode the session cookie into the acting user
    pub fn current_user(&self, jar: &CookieJar) -> Result<SessionUser, TokenError> {
        self.codec.decode(cookie::read(jar).as_deref())
    }

    /// Remove the session cookie
    pub fn delete_session(&self, jar: CookieJar) -> (CookieJar, ActionResponse) {
        (
            cookie::clear(jar),
            ActionResponse::ok("session deleted"),
        )
    }
}
