use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub photo_url: Option<String>,
    pub is_active: bool,
    pub is_sponsored: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChildRequest {
    pub name: String,
    pub location: String,
    pub photo_url: Option<String>,
    pub is_active: Option<bool>,
    pub is_sponsored: Option<bool>,
}

/// Fixed-shape summary returned by the public stats endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildStats {
    pub total_children: i64,
    pub sponsored_children: i64,
    pub available_children: i64,
    pub countries: i64,
}
