//! Session cookie storage
//!
//! One named cookie holds the signed session token. Attributes are fixed:
//! Secure, HttpOnly, Path=/, SameSite=Strict, Max-Age one hour computed at
//! write time (absolute, not refreshed on later requests).

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Store the token in the session cookie
pub fn write(jar: CookieJar, token: String, ttl_seconds: i64) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .secure(true)
        .http_only(true)
        .path("/")
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(ttl_seconds))
        .build();

    jar.add(cookie)
}

/// Read the current session cookie value, if any
pub fn read(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// Remove the session cookie
///
/// The removal cookie must carry the same path as the one written, or
/// browsers will keep the original.
pub fn clear(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/").build())
}
