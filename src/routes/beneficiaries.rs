use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::ApiError,
    models::{
        auth::Session,
        beneficiary::{Beneficiary, CreateBeneficiaryRequest},
    },
    AppState,
};

pub async fn list_public(
    State(state): State<AppState>,
) -> Result<Json<Vec<Beneficiary>>, ApiError> {
    let beneficiaries = state.repos.beneficiaries.list_active().await?;
    Ok(Json(beneficiaries))
}

pub async fn list_beneficiaries(
    State(state): State<AppState>,
    _session: Session,
) -> Result<Json<Vec<Beneficiary>>, ApiError> {
    let beneficiaries = state.repos.beneficiaries.list_all().await?;
    Ok(Json(beneficiaries))
}

pub async fn create_beneficiary(
    State(state): State<AppState>,
    _session: Session,
    Json(body): Json<CreateBeneficiaryRequest>,
) -> Result<(StatusCode, Json<Beneficiary>), ApiError> {
    let beneficiary = state.repos.beneficiaries.create(&body).await?;
    Ok((StatusCode::CREATED, Json(beneficiary)))
}
