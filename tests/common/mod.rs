#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use hopechain_api::{
    build_router,
    config::Config,
    db::repository::{
        BeneficiaryRepository, ChildRepository, DonationRepository, OperatorRepository,
        Repositories, SponsorRepository,
    },
    models::{
        beneficiary::{Beneficiary, CreateBeneficiaryRequest},
        child::{Child, CreateChildRequest},
        donation::{CreateDonationRequest, Donation, DonationWithSponsor},
        operator::Operator,
        sponsor::{CreateSponsorRequest, Sponsor, SponsorWithRelations},
    },
    services::auth::AuthService,
    AppState,
};

#[derive(Default)]
pub struct FakeChildRepository {
    rows: Mutex<Vec<Child>>,
    fail: AtomicBool,
}

impl FakeChildRepository {
    pub fn seed(&self, child: Child) {
        self.rows.lock().unwrap().push(child);
    }

    pub fn set_failing(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("database unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl ChildRepository for FakeChildRepository {
    async fn create(&self, req: &CreateChildRequest) -> anyhow::Result<Child> {
        self.check()?;
        let child = Child {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            location: req.location.clone(),
            photo_url: req.photo_url.clone(),
            is_active: req.is_active.unwrap_or(true),
            is_sponsored: req.is_sponsored.unwrap_or(false),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(child.clone());
        Ok(child)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Child>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_active(&self) -> anyhow::Result<Vec<Child>> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Child>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn count_active(&self) -> anyhow::Result<i64> {
        self.check()?;
        Ok(self.rows.lock().unwrap().iter().filter(|c| c.is_active).count() as i64)
    }

    async fn count_sponsored(&self) -> anyhow::Result<i64> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_active && c.is_sponsored)
            .count() as i64)
    }

    async fn count_active_locations(&self) -> anyhow::Result<i64> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        let mut locations: Vec<&str> = rows
            .iter()
            .filter(|c| c.is_active)
            .map(|c| c.location.as_str())
            .collect();
        locations.sort_unstable();
        locations.dedup();
        Ok(locations.len() as i64)
    }
}

#[derive(Default)]
pub struct FakeSponsorRepository {
    rows: Mutex<Vec<SponsorWithRelations>>,
}

impl FakeSponsorRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl SponsorRepository for FakeSponsorRepository {
    async fn create(&self, req: &CreateSponsorRequest) -> anyhow::Result<SponsorWithRelations> {
        let sponsor = SponsorWithRelations {
            sponsor: Sponsor {
                id: Uuid::new_v4(),
                name: req.name.clone(),
                email: req.email.clone(),
                phone: req.phone.clone(),
                address: req.address.clone(),
                created_at: Utc::now(),
            },
            donations: Vec::new(),
            sponsorships: Vec::new(),
        };
        self.rows.lock().unwrap().push(sponsor.clone());
        Ok(sponsor)
    }

    async fn list_with_relations(&self) -> anyhow::Result<Vec<SponsorWithRelations>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct FakeDonationRepository {
    rows: Mutex<Vec<DonationWithSponsor>>,
}

impl FakeDonationRepository {
    pub fn seed(&self, row: DonationWithSponsor) {
        self.rows.lock().unwrap().push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl DonationRepository for FakeDonationRepository {
    async fn create(&self, req: &CreateDonationRequest) -> anyhow::Result<DonationWithSponsor> {
        let row = DonationWithSponsor {
            donation: Donation {
                id: Uuid::new_v4(),
                amount: req.amount,
                method: req.method.clone(),
                sponsor_id: req.sponsor_id,
                description: req.description.clone(),
                reference: req.reference.clone(),
                status: req.status.clone().unwrap_or_else(|| "pending".into()),
                created_at: Utc::now(),
            },
            sponsor: None,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_with_sponsor(&self) -> anyhow::Result<Vec<DonationWithSponsor>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct FakeBeneficiaryRepository {
    rows: Mutex<Vec<Beneficiary>>,
}

impl FakeBeneficiaryRepository {
    pub fn seed(&self, beneficiary: Beneficiary) {
        self.rows.lock().unwrap().push(beneficiary);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl BeneficiaryRepository for FakeBeneficiaryRepository {
    async fn create(&self, req: &CreateBeneficiaryRequest) -> anyhow::Result<Beneficiary> {
        let beneficiary = Beneficiary {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            contact: req.contact.clone(),
            details: req.details.clone(),
            photos: req.photos.clone().unwrap_or_default(),
            help_type: req.help_type.clone(),
            location: req.location.clone(),
            is_active: req.is_active.unwrap_or(true),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(beneficiary.clone());
        Ok(beneficiary)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Beneficiary>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_active(&self) -> anyhow::Result<Vec<Beneficiary>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.is_active)
            .cloned()
            .collect())
    }
}

pub struct FakeOperatorRepository {
    operators: Vec<Operator>,
}

#[async_trait]
impl OperatorRepository for FakeOperatorRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Operator>> {
        Ok(self
            .operators
            .iter()
            .find(|o| o.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Operator>> {
        Ok(self.operators.iter().find(|o| o.id == id).cloned())
    }
}

pub const TEST_SECRET: &str = "test-secret";
pub const OPERATOR_EMAIL: &str = "admin@example.org";
pub const OPERATOR_PASSWORD: &str = "secret";

pub struct TestApp {
    pub router: Router,
    pub children: Arc<FakeChildRepository>,
    pub sponsors: Arc<FakeSponsorRepository>,
    pub donations: Arc<FakeDonationRepository>,
    pub beneficiaries: Arc<FakeBeneficiaryRepository>,
    pub token: String,
    pub upload_dir: String,
}

pub fn test_app() -> TestApp {
    let children = Arc::new(FakeChildRepository::default());
    let sponsors = Arc::new(FakeSponsorRepository::default());
    let donations = Arc::new(FakeDonationRepository::default());
    let beneficiaries = Arc::new(FakeBeneficiaryRepository::default());

    let operator = Operator {
        id: Uuid::new_v4(),
        email: OPERATOR_EMAIL.into(),
        // Low cost keeps the suite fast; nothing here is a real secret.
        password_hash: bcrypt::hash(OPERATOR_PASSWORD, 4).unwrap(),
        name: "Demo Admin".into(),
        created_at: Utc::now(),
    };
    let token = AuthService::issue_access_token(&operator, TEST_SECRET, 3600).unwrap();
    let operators = Arc::new(FakeOperatorRepository {
        operators: vec![operator],
    });

    let upload_dir = std::env::temp_dir()
        .join(format!("hopechain-test-{}", Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();

    let config = Config {
        database_url: String::new(),
        jwt_secret: TEST_SECRET.into(),
        jwt_expiry_seconds: 3600,
        upload_dir: upload_dir.clone(),
        host: "127.0.0.1".into(),
        port: 0,
        paypal_donate_url: "https://www.paypal.com/donate".into(),
        stripe_donate_url: "https://buy.stripe.com/test".into(),
    };

    let state = AppState {
        repos: Repositories {
            children: children.clone(),
            sponsors: sponsors.clone(),
            donations: donations.clone(),
            beneficiaries: beneficiaries.clone(),
            operators,
        },
        config: Arc::new(config),
    };

    TestApp {
        router: build_router(state),
        children,
        sponsors,
        donations,
        beneficiaries,
        token,
        upload_dir,
    }
}

pub fn child(name: &str, location: &str, is_active: bool, is_sponsored: bool) -> Child {
    Child {
        id: Uuid::new_v4(),
        name: name.into(),
        location: location.into(),
        photo_url: None,
        is_active,
        is_sponsored,
        created_at: Utc::now(),
    }
}

pub fn beneficiary(name: &str, is_active: bool) -> Beneficiary {
    Beneficiary {
        id: Uuid::new_v4(),
        name: name.into(),
        contact: None,
        details: None,
        photos: Vec::new(),
        help_type: "education".into(),
        location: "Nairobi, Kenya".into(),
        is_active,
        created_at: Utc::now(),
    }
}

/// Drive the router with one request and collect status, headers, and the
/// body parsed as JSON (Null when the body is empty or not JSON).
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

pub async fn get(router: &Router, path: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let (status, _, body) = send(router, builder.body(Body::empty()).unwrap()).await;
    (status, body)
}

pub async fn post_json(
    router: &Router,
    path: &str,
    token: Option<&str>,
    body: &Value,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    let (status, _, body) = send(router, request).await;
    (status, body)
}
