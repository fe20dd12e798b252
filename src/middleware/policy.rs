use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::middleware::auth;
use crate::models::auth::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

/// Path prefixes reachable without a session: the auth provider, public
/// catalog reads, payment redirects, uploaded assets, and liveness.
/// Everything else requires a session.
const PUBLIC_PREFIXES: &[&str] = &[
    "/health",
    "/auth/",
    "/children/public",
    "/children/stats",
    "/beneficiaries/public",
    "/payments/",
    "/uploads/",
];

/// The single authorization policy: (caller-or-absent, path) -> allow/deny.
/// Called once by the edge filter and once by the per-handler extractor.
pub fn authorize(session: Option<&Session>, path: &str) -> Access {
    // A prefix like "/uploads/" also covers the bare "/uploads" path.
    let is_public = PUBLIC_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix) || path == prefix.trim_end_matches('/'));
    if is_public {
        return Access::Allow;
    }
    if session.is_some() {
        Access::Allow
    } else {
        Access::Deny
    }
}

/// Router-level filter running before any handler. Denied requests never
/// reach a handler.
pub async fn edge_auth_filter(request: Request, next: Next) -> Result<Response, ApiError> {
    let (parts, body) = request.into_parts();
    let session = auth::resolve_session(&parts);
    match authorize(session.as_ref(), parts.uri.path()) {
        Access::Allow => Ok(next.run(Request::from_parts(parts, body)).await),
        Access::Deny => Err(ApiError::Unauthorized),
    }
}
