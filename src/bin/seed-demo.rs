//! Demo data seed script
//!
//! Seeds the database with a demo operator account and a small catalog:
//! - 1 operator (admin@hopechain.org)
//! - 6 children across 3 countries, one inactive, two sponsored
//! - 3 beneficiaries, one inactive
//! - 1 sponsor with a donation and a sponsorship
//!
//! Usage:
//!   DATABASE_URL=... SEED_PASSWORD=Demo2024! ./seed-demo
//!
//! Environment variables:
//!   DATABASE_URL   — PostgreSQL connection string (required)
//!   SEED_PASSWORD  — Password for the demo operator (default: Demo2024!)

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::env;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL required")?;
    let seed_password = env::var("SEED_PASSWORD").unwrap_or_else(|_| "Demo2024!".to_string());

    println!("=== Seed Demo Data ===");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    hopechain_api::db::run_migrations(&pool).await?;

    println!("Cleaning existing demo data...");
    sqlx::raw_sql(
        "TRUNCATE sponsorships, donations, sponsors, children, beneficiaries, operators",
    )
    .execute(&pool)
    .await?;

    println!("Creating operator admin@hopechain.org...");
    let password_hash = bcrypt::hash(&seed_password, bcrypt::DEFAULT_COST)?;
    sqlx::query("INSERT INTO operators (email, password_hash, name) VALUES ($1, $2, $3)")
        .bind("admin@hopechain.org")
        .bind(&password_hash)
        .bind("Demo Admin")
        .execute(&pool)
        .await?;

    println!("Creating children...");
    let children = [
        ("Amara", "Kenya", true, true),
        ("Kwame", "Ghana", true, false),
        ("Esi", "Ghana", true, true),
        ("Joseph", "Uganda", true, false),
        ("Grace", "Uganda", true, false),
        ("Retired entry", "Kenya", false, false),
    ];
    let mut first_child_id: Option<Uuid> = None;
    for (name, location, is_active, is_sponsored) in children {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO children (name, location, is_active, is_sponsored)
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(name)
        .bind(location)
        .bind(is_active)
        .bind(is_sponsored)
        .fetch_one(&pool)
        .await?;
        first_child_id.get_or_insert(id);
    }

    println!("Creating beneficiaries...");
    let beneficiaries = [
        ("Mwangi family", "education", "Nairobi, Kenya", true),
        ("Abena", "medical", "Accra, Ghana", true),
        ("Closed case", "food", "Kampala, Uganda", false),
    ];
    for (name, help_type, location, is_active) in beneficiaries {
        sqlx::query(
            "INSERT INTO beneficiaries (name, help_type, location, is_active)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(name)
        .bind(help_type)
        .bind(location)
        .bind(is_active)
        .execute(&pool)
        .await?;
    }

    println!("Creating sponsor with donation and sponsorship...");
    let sponsor_id: Uuid = sqlx::query_scalar(
        "INSERT INTO sponsors (name, email, phone, address)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind("Jordan Lee")
    .bind("jordan@example.org")
    .bind("+1-555-0100")
    .bind("12 Main St, Springfield")
    .fetch_one(&pool)
    .await?;

    sqlx::query(
        "INSERT INTO donations (amount, method, sponsor_id, description, reference, status)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(50.0)
    .bind("paypal")
    .bind(sponsor_id)
    .bind("Monthly sponsorship gift")
    .bind("DEMO-0001")
    .bind("completed")
    .execute(&pool)
    .await?;

    sqlx::query("INSERT INTO sponsorships (sponsor_id, child_id) VALUES ($1, $2)")
        .bind(sponsor_id)
        .bind(first_child_id.expect("children seeded"))
        .execute(&pool)
        .await?;

    println!("Done. Login with admin@hopechain.org / {}", seed_password);
    Ok(())
}
