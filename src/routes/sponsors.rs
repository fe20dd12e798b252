use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::ApiError,
    models::{
        auth::Session,
        sponsor::{CreateSponsorRequest, SponsorWithRelations},
    },
    AppState,
};

pub async fn list_sponsors(
    State(state): State<AppState>,
    _session: Session,
) -> Result<Json<Vec<SponsorWithRelations>>, ApiError> {
    let sponsors = state.repos.sponsors.list_with_relations().await?;
    Ok(Json(sponsors))
}

pub async fn create_sponsor(
    State(state): State<AppState>,
    _session: Session,
    Json(body): Json<CreateSponsorRequest>,
) -> Result<(StatusCode, Json<SponsorWithRelations>), ApiError> {
    let sponsor = state.repos.sponsors.create(&body).await?;
    Ok((StatusCode::CREATED, Json(sponsor)))
}
