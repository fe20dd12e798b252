pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use config::Config;
use db::repository::Repositories;
use middleware::auth::JwtSecret;
use middleware::policy;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repos: Repositories,
    pub config: Arc<Config>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::list([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_origin(Any);

    let jwt_secret = JwtSecret(state.config.jwt_secret.clone());

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Auth provider
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/me", get(routes::auth::me))
        // Beneficiaries
        .route("/beneficiaries/public", get(routes::beneficiaries::list_public))
        .route(
            "/beneficiaries",
            get(routes::beneficiaries::list_beneficiaries)
                .post(routes::beneficiaries::create_beneficiary),
        )
        // Children
        .route("/children/public", get(routes::children::list_public))
        .route("/children/public/{id}", get(routes::children::get_public))
        .route("/children/stats", get(routes::children::stats))
        .route(
            "/children",
            get(routes::children::list_children).post(routes::children::create_child),
        )
        // Donations
        .route(
            "/donations",
            get(routes::donations::list_donations).post(routes::donations::create_donation),
        )
        // Sponsors
        .route(
            "/sponsors",
            get(routes::sponsors::list_sponsors).post(routes::sponsors::create_sponsor),
        )
        // Upload
        .route("/upload", post(routes::upload::upload_file))
        // Payment stubs
        .route("/payments/paypal", get(routes::payments::paypal_redirect))
        .route("/payments/stripe", get(routes::payments::stripe_redirect))
        // Uploaded assets
        .nest_service("/uploads", ServeDir::new(state.config.upload_dir.clone()))
        // Edge filter runs before routing; the JwtSecret extension must be
        // outermost so the filter can resolve sessions.
        .layer(axum::middleware::from_fn(policy::edge_auth_filter))
        .layer(axum::Extension(jwt_secret))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Global body size limit of 25 MB (covers photo uploads)
        .layer(DefaultBodyLimit::max(25 * 1024 * 1024))
        .with_state(state)
}
