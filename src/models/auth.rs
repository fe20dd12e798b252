use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in the session access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // operator UUID
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

/// Extracted from the validated session token — available via Axum extractors
#[derive(Debug, Clone)]
pub struct Session {
    pub operator_id: Uuid,
    pub email: String,
}
