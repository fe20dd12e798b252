use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::donation::Donation;
use super::sponsorship::SponsorshipWithChild;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSponsorRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Sponsor with its donations and sponsorships nested, as returned
/// by the authenticated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorWithRelations {
    #[serde(flatten)]
    pub sponsor: Sponsor,
    pub donations: Vec<Donation>,
    pub sponsorships: Vec<SponsorshipWithChild>,
}
