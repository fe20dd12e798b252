use axum::{extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::error::ApiError;
use crate::middleware::policy::{self, Access};
use crate::models::auth::{Claims, Session};

/// Extension type carrying the session-token secret through request extensions.
#[derive(Clone)]
pub struct JwtSecret(pub String);

/// Resolve the session carried by a request, if any. Absence of a session
/// is an ordinary outcome, not an error.
pub fn resolve_session(parts: &Parts) -> Option<Session> {
    let secret = parts.extensions.get::<JwtSecret>()?;
    let token = parts
        .headers
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;
    decode_access_token(token, &secret.0).ok()
}

pub fn decode_access_token(token: &str, secret: &str) -> anyhow::Result<Session> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let data = decode::<Claims>(token, &key, &validation)?;
    let claims = data.claims;

    Ok(Session {
        operator_id: claims.sub.parse()?,
        email: claims.email,
    })
}

/// Handler-level session check. The edge filter already gates protected
/// prefixes; this is the second call site of the same policy.
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = resolve_session(parts);
        match policy::authorize(session.as_ref(), parts.uri.path()) {
            Access::Allow => session.ok_or(ApiError::Unauthorized),
            Access::Deny => Err(ApiError::Unauthorized),
        }
    }
}
