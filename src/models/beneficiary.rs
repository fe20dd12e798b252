use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub id: Uuid,
    pub name: String,
    pub contact: Option<String>,
    pub details: Option<String>,
    pub photos: Vec<String>,
    pub help_type: String,
    pub location: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBeneficiaryRequest {
    pub name: String,
    pub contact: Option<String>,
    pub details: Option<String>,
    pub photos: Option<Vec<String>>,
    pub help_type: String,
    pub location: String,
    pub is_active: Option<bool>,
}
