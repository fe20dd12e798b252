use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    beneficiary::{Beneficiary, CreateBeneficiaryRequest},
    child::{Child, CreateChildRequest},
    donation::{CreateDonationRequest, DonationWithSponsor},
    operator::Operator,
    sponsor::{CreateSponsorRequest, SponsorWithRelations},
};

use super::postgres::{
    PgBeneficiaryRepository, PgChildRepository, PgDonationRepository, PgOperatorRepository,
    PgSponsorRepository,
};

/// Record access for children. Public listings filter on the active flag;
/// authenticated listings see every row.
#[async_trait]
pub trait ChildRepository: Send + Sync {
    async fn create(&self, req: &CreateChildRequest) -> anyhow::Result<Child>;
    async fn list_all(&self) -> anyhow::Result<Vec<Child>>;
    async fn list_active(&self) -> anyhow::Result<Vec<Child>>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Child>>;
    async fn count_active(&self) -> anyhow::Result<i64>;
    async fn count_sponsored(&self) -> anyhow::Result<i64>;
    async fn count_active_locations(&self) -> anyhow::Result<i64>;
}

#[async_trait]
pub trait SponsorRepository: Send + Sync {
    async fn create(&self, req: &CreateSponsorRequest) -> anyhow::Result<SponsorWithRelations>;
    async fn list_with_relations(&self) -> anyhow::Result<Vec<SponsorWithRelations>>;
}

#[async_trait]
pub trait DonationRepository: Send + Sync {
    async fn create(&self, req: &CreateDonationRequest) -> anyhow::Result<DonationWithSponsor>;
    async fn list_with_sponsor(&self) -> anyhow::Result<Vec<DonationWithSponsor>>;
}

#[async_trait]
pub trait BeneficiaryRepository: Send + Sync {
    async fn create(&self, req: &CreateBeneficiaryRequest) -> anyhow::Result<Beneficiary>;
    async fn list_all(&self) -> anyhow::Result<Vec<Beneficiary>>;
    async fn list_active(&self) -> anyhow::Result<Vec<Beneficiary>>;
}

#[async_trait]
pub trait OperatorRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Operator>>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Operator>>;
}

/// The set of repositories handlers depend on. Built from a [`PgPool`] in
/// production; tests swap in in-memory fakes.
#[derive(Clone)]
pub struct Repositories {
    pub children: Arc<dyn ChildRepository>,
    pub sponsors: Arc<dyn SponsorRepository>,
    pub donations: Arc<dyn DonationRepository>,
    pub beneficiaries: Arc<dyn BeneficiaryRepository>,
    pub operators: Arc<dyn OperatorRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            children: Arc::new(PgChildRepository::new(pool.clone())),
            sponsors: Arc::new(PgSponsorRepository::new(pool.clone())),
            donations: Arc::new(PgDonationRepository::new(pool.clone())),
            beneficiaries: Arc::new(PgBeneficiaryRepository::new(pool.clone())),
            operators: Arc::new(PgOperatorRepository::new(pool)),
        }
    }
}
