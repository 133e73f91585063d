//! Authentication module for Mingle
//!
//! - Session token signing and verification
//! - Cookie-backed session storage
//! - Session facade composing the two
//! - Account registration and credential login

pub mod cookie;
mod service;
mod session;
mod token;

pub use cookie::SESSION_COOKIE;
pub use service::{AuthError, AuthService};
pub use session::SessionService;
pub use token::{TokenCodec, TokenError};
