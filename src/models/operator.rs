use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An account that may hold a session. Seeded out of band; there is no
/// self-service registration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub operator: OperatorProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&Operator> for OperatorProfile {
    fn from(op: &Operator) -> Self {
        Self {
            id: op.id,
            email: op.email.clone(),
            name: op.name.clone(),
        }
    }
}
