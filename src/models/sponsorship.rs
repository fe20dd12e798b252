use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::child::Child;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Sponsorship {
    pub id: Uuid,
    pub sponsor_id: Uuid,
    pub child_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Sponsorship with the sponsored child joined, nested under the sponsor listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorshipWithChild {
    #[serde(flatten)]
    pub sponsorship: Sponsorship,
    pub child: Option<Child>,
}
