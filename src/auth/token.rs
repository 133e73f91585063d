//! Session token encoding and verification
//!
//! Signs a small user value into a compact HS256 token and verifies it back.
//! The token carries only the subject claim; its lifetime is bounded by the
//! session cookie, not by an expiry claim inside the token.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::SessionUser;

/// Token codec errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("not authorised")]
    Missing,

    #[error("not authorised")]
    Invalid,
}

/// Claims for session tokens. Only the subject is set.
#[derive(Debug, Serialize, Deserialize, Clone)]
struct Claims {
    /// Subject (the authenticated user).
    ///
    /// Serialized under a non-reserved key: the JWT library validates the
    /// registered `sub` claim as a string, but this carries a structured
    /// subject, so the reserved name would make every decode fail.
    #[serde(rename = "usr")]
    sub: SessionUser,
}

/// Signs and verifies session tokens with a symmetric secret.
///
/// The secret is injected at construction and lives as long as the process;
/// nothing in here reads ambient environment state.
#[derive(Clone)]
pub struct TokenCodec {
    secret: String,
}

impl TokenCodec {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Encode a subject into a signed compact token
    pub fn encode(&self, subject: &SessionUser) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.clone(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return the embedded subject
    ///
    /// Accepts an absent token so callers can pass a cookie lookup straight
    /// through. Any failure (missing, malformed, tampered, wrong secret)
    /// comes back as an error value; this never panics.
    pub fn decode(&self, token: Option<&str>) -> Result<SessionUser, TokenError> {
        let token = token.ok_or(TokenError::Missing)?;

        let mut validation = Validation::new(Algorithm::HS256);
        // The encoder sets no exp claim; expiry is the cookie's job.
        validation.validate_exp = false;
        validation.required_spec_claims = Default::default();

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| TokenError::Invalid)?;

        Ok(data.claims.sub)
    }
}
