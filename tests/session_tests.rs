//! Session facade tests over an in-memory cookie jar
//!
//! No server or database needed: the facade operates on a `CookieJar`
//! value directly.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use uuid::Uuid;

use mingle_server::auth::{SessionService, SESSION_COOKIE};
use mingle_server::models::SessionUser;

fn service() -> SessionService {
    SessionService::new("test-secret-key".to_string(), 3600)
}

fn test_subject() -> SessionUser {
    SessionUser {
        id: Uuid::new_v4(),
        username: "amara".to_string(),
    }
}

#[test]
fn test_create_session_then_verify() {
    let sessions = service();
    let subject = test_subject();

    let (jar, result) = sessions.create_session(CookieJar::new(), &subject);

    assert!(result.success);
    assert_eq!(result.message, "login successful");
    assert!(sessions.verify_session(&jar));
}

#[test]
fn test_create_session_round_trips_subject() {
    let sessions = service();
    let subject = test_subject();

    let (jar, _) = sessions.create_session(CookieJar::new(), &subject);

    let decoded = sessions.current_user(&jar).unwrap();
    assert_eq!(decoded, subject);
}

#[test]
fn test_delete_session_clears_cookie() {
    let sessions = service();

    let (jar, _) = sessions.create_session(CookieJar::new(), &test_subject());
    assert!(sessions.verify_session(&jar));

    let (jar, result) = sessions.delete_session(jar);

    assert!(result.success);
    assert_eq!(result.message, "session deleted");
    assert!(!sessions.verify_session(&jar));
    assert!(jar.get(SESSION_COOKIE).is_none());
}

#[test]
fn test_verify_session_checks_presence_only() {
    let sessions = service();

    // A cookie that would never decode still counts as "present"
    let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "not-a-real-token"));

    assert!(sessions.verify_session(&jar));
    assert!(sessions.current_user(&jar).is_err());
}

#[test]
fn test_current_user_rejects_foreign_secret() {
    let subject = test_subject();

    let (jar, _) =
        SessionService::new("secret1".to_string(), 3600).create_session(CookieJar::new(), &subject);

    let other = SessionService::new("secret2".to_string(), 3600);
    assert!(other.current_user(&jar).is_err());
}

#[test]
fn test_empty_jar_has_no_user() {
    let sessions = service();
    let jar = CookieJar::new();

    assert!(!sessions.verify_session(&jar));
    assert!(sessions.current_user(&jar).is_err());
}
