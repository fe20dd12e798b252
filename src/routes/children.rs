use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::ApiError,
    models::{
        auth::Session,
        child::{Child, ChildStats, CreateChildRequest},
    },
    AppState,
};

pub async fn list_public(State(state): State<AppState>) -> Result<Json<Vec<Child>>, ApiError> {
    let children = state.repos.children.list_active().await?;
    Ok(Json(children))
}

/// Public detail view. An id that exists but is inactive is
/// indistinguishable from an id that does not exist.
pub async fn get_public(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Child>, ApiError> {
    match state.repos.children.find_by_id(id).await? {
        Some(child) if child.is_active => Ok(Json(child)),
        _ => Err(ApiError::NotFound),
    }
}

/// Fan-out aggregate: the three counts are independent and order-insensitive,
/// so they run concurrently. Any failure aborts the whole aggregate.
pub async fn stats(State(state): State<AppState>) -> Result<Json<ChildStats>, ApiError> {
    let repo = &state.repos.children;
    let (total, sponsored, countries) = tokio::try_join!(
        repo.count_active(),
        repo.count_sponsored(),
        repo.count_active_locations(),
    )?;

    Ok(Json(ChildStats {
        total_children: total,
        sponsored_children: sponsored,
        available_children: total - sponsored,
        countries,
    }))
}

pub async fn list_children(
    State(state): State<AppState>,
    _session: Session,
) -> Result<Json<Vec<Child>>, ApiError> {
    let children = state.repos.children.list_all().await?;
    Ok(Json(children))
}

pub async fn create_child(
    State(state): State<AppState>,
    _session: Session,
    Json(body): Json<CreateChildRequest>,
) -> Result<(StatusCode, Json<Child>), ApiError> {
    let child = state.repos.children.create(&body).await?;
    Ok((StatusCode::CREATED, Json(child)))
}
