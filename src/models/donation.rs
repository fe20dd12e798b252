use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::sponsor::Sponsor;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: Uuid,
    pub amount: f64,
    pub method: String,
    pub sponsor_id: Option<Uuid>,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    pub amount: f64,
    pub method: String,
    pub sponsor_id: Option<Uuid>,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub status: Option<String>,
}

/// Donation with its sponsor joined, as returned by the authenticated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationWithSponsor {
    #[serde(flatten)]
    pub donation: Donation,
    pub sponsor: Option<Sponsor>,
}
