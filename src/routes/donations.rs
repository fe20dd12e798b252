use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::ApiError,
    models::{
        auth::Session,
        donation::{CreateDonationRequest, DonationWithSponsor},
    },
    AppState,
};

pub async fn list_donations(
    State(state): State<AppState>,
    _session: Session,
) -> Result<Json<Vec<DonationWithSponsor>>, ApiError> {
    let donations = state.repos.donations.list_with_sponsor().await?;
    Ok(Json(donations))
}

pub async fn create_donation(
    State(state): State<AppState>,
    _session: Session,
    Json(body): Json<CreateDonationRequest>,
) -> Result<(StatusCode, Json<DonationWithSponsor>), ApiError> {
    let donation = state.repos.donations.create(&body).await?;
    Ok((StatusCode::CREATED, Json(donation)))
}
