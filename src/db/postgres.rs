use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    beneficiary::{Beneficiary, CreateBeneficiaryRequest},
    child::{Child, CreateChildRequest},
    donation::{CreateDonationRequest, Donation, DonationWithSponsor},
    operator::Operator,
    sponsor::{CreateSponsorRequest, Sponsor, SponsorWithRelations},
    sponsorship::{Sponsorship, SponsorshipWithChild},
};

use super::repository::{
    BeneficiaryRepository, ChildRepository, DonationRepository, OperatorRepository,
    SponsorRepository,
};

pub struct PgChildRepository {
    pool: PgPool,
}

impl PgChildRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChildRepository for PgChildRepository {
    async fn create(&self, req: &CreateChildRequest) -> anyhow::Result<Child> {
        let child = sqlx::query_as::<_, Child>(
            "INSERT INTO children (name, location, photo_url, is_active, is_sponsored)
             VALUES ($1, $2, $3, COALESCE($4, TRUE), COALESCE($5, FALSE))
             RETURNING *",
        )
        .bind(&req.name)
        .bind(&req.location)
        .bind(&req.photo_url)
        .bind(req.is_active)
        .bind(req.is_sponsored)
        .fetch_one(&self.pool)
        .await?;
        Ok(child)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Child>> {
        let children =
            sqlx::query_as::<_, Child>("SELECT * FROM children ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(children)
    }

    async fn list_active(&self) -> anyhow::Result<Vec<Child>> {
        let children = sqlx::query_as::<_, Child>(
            "SELECT * FROM children WHERE is_active = TRUE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(children)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Child>> {
        let child = sqlx::query_as::<_, Child>("SELECT * FROM children WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(child)
    }

    async fn count_active(&self) -> anyhow::Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM children WHERE is_active = TRUE")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    async fn count_sponsored(&self) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM children WHERE is_active = TRUE AND is_sponsored = TRUE",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn count_active_locations(&self) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(DISTINCT location) FROM children WHERE is_active = TRUE",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

pub struct PgSponsorRepository {
    pool: PgPool,
}

impl PgSponsorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SponsorRepository for PgSponsorRepository {
    async fn create(&self, req: &CreateSponsorRequest) -> anyhow::Result<SponsorWithRelations> {
        let sponsor = sqlx::query_as::<_, Sponsor>(
            "INSERT INTO sponsors (name, email, phone, address)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.address)
        .fetch_one(&self.pool)
        .await?;
        Ok(SponsorWithRelations {
            sponsor,
            donations: Vec::new(),
            sponsorships: Vec::new(),
        })
    }

    async fn list_with_relations(&self) -> anyhow::Result<Vec<SponsorWithRelations>> {
        let sponsors =
            sqlx::query_as::<_, Sponsor>("SELECT * FROM sponsors ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        let donations = sqlx::query_as::<_, Donation>(
            "SELECT * FROM donations WHERE sponsor_id IS NOT NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let sponsorships =
            sqlx::query_as::<_, Sponsorship>("SELECT * FROM sponsorships ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        let children = sqlx::query_as::<_, Child>("SELECT * FROM children")
            .fetch_all(&self.pool)
            .await?;
        let children_by_id: HashMap<Uuid, Child> =
            children.into_iter().map(|c| (c.id, c)).collect();

        let mut donations_by_sponsor: HashMap<Uuid, Vec<Donation>> = HashMap::new();
        for donation in donations {
            if let Some(sponsor_id) = donation.sponsor_id {
                donations_by_sponsor.entry(sponsor_id).or_default().push(donation);
            }
        }

        let mut sponsorships_by_sponsor: HashMap<Uuid, Vec<SponsorshipWithChild>> = HashMap::new();
        for sponsorship in sponsorships {
            let child = children_by_id.get(&sponsorship.child_id).cloned();
            sponsorships_by_sponsor
                .entry(sponsorship.sponsor_id)
                .or_default()
                .push(SponsorshipWithChild { sponsorship, child });
        }

        Ok(sponsors
            .into_iter()
            .map(|sponsor| {
                let donations = donations_by_sponsor.remove(&sponsor.id).unwrap_or_default();
                let sponsorships =
                    sponsorships_by_sponsor.remove(&sponsor.id).unwrap_or_default();
                SponsorWithRelations {
                    sponsor,
                    donations,
                    sponsorships,
                }
            })
            .collect())
    }
}

pub struct PgDonationRepository {
    pool: PgPool,
}

impl PgDonationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonationRepository for PgDonationRepository {
    async fn create(&self, req: &CreateDonationRequest) -> anyhow::Result<DonationWithSponsor> {
        let donation = sqlx::query_as::<_, Donation>(
            "INSERT INTO donations (amount, method, sponsor_id, description, reference, status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'pending'))
             RETURNING *",
        )
        .bind(req.amount)
        .bind(&req.method)
        .bind(req.sponsor_id)
        .bind(&req.description)
        .bind(&req.reference)
        .bind(&req.status)
        .fetch_one(&self.pool)
        .await?;

        let sponsor = match donation.sponsor_id {
            Some(sponsor_id) => {
                sqlx::query_as::<_, Sponsor>("SELECT * FROM sponsors WHERE id = $1")
                    .bind(sponsor_id)
                    .fetch_optional(&self.pool)
                    .await?
            }
            None => None,
        };

        Ok(DonationWithSponsor { donation, sponsor })
    }

    async fn list_with_sponsor(&self) -> anyhow::Result<Vec<DonationWithSponsor>> {
        let donations =
            sqlx::query_as::<_, Donation>("SELECT * FROM donations ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        let sponsors = sqlx::query_as::<_, Sponsor>("SELECT * FROM sponsors")
            .fetch_all(&self.pool)
            .await?;
        let sponsors_by_id: HashMap<Uuid, Sponsor> =
            sponsors.into_iter().map(|s| (s.id, s)).collect();

        Ok(donations
            .into_iter()
            .map(|donation| {
                let sponsor = donation
                    .sponsor_id
                    .and_then(|id| sponsors_by_id.get(&id).cloned());
                DonationWithSponsor { donation, sponsor }
            })
            .collect())
    }
}

pub struct PgBeneficiaryRepository {
    pool: PgPool,
}

impl PgBeneficiaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BeneficiaryRepository for PgBeneficiaryRepository {
    async fn create(&self, req: &CreateBeneficiaryRequest) -> anyhow::Result<Beneficiary> {
        let beneficiary = sqlx::query_as::<_, Beneficiary>(
            "INSERT INTO beneficiaries (name, contact, details, photos, help_type, location, is_active)
             VALUES ($1, $2, $3, COALESCE($4, ARRAY[]::TEXT[]), $5, $6, COALESCE($7, TRUE))
             RETURNING *",
        )
        .bind(&req.name)
        .bind(&req.contact)
        .bind(&req.details)
        .bind(&req.photos)
        .bind(&req.help_type)
        .bind(&req.location)
        .bind(req.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(beneficiary)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Beneficiary>> {
        let beneficiaries =
            sqlx::query_as::<_, Beneficiary>("SELECT * FROM beneficiaries ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(beneficiaries)
    }

    async fn list_active(&self) -> anyhow::Result<Vec<Beneficiary>> {
        let beneficiaries = sqlx::query_as::<_, Beneficiary>(
            "SELECT * FROM beneficiaries WHERE is_active = TRUE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(beneficiaries)
    }
}

pub struct PgOperatorRepository {
    pool: PgPool,
}

impl PgOperatorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OperatorRepository for PgOperatorRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Operator>> {
        let operator =
            sqlx::query_as::<_, Operator>("SELECT * FROM operators WHERE LOWER(email) = LOWER($1)")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(operator)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Operator>> {
        let operator = sqlx::query_as::<_, Operator>("SELECT * FROM operators WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(operator)
    }
}
