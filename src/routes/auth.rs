use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    models::{
        auth::Session,
        operator::{LoginRequest, LoginResponse, OperatorProfile},
    },
    services::auth::AuthService,
    AppState,
};

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let outcome = AuthService::login(
        state.repos.operators.as_ref(),
        &body.email,
        &body.password,
        &state.config.jwt_secret,
        state.config.jwt_expiry_seconds,
    )
    .await?;

    match outcome {
        Some(response) => Ok(Json(response)),
        None => Err(ApiError::Unauthorized),
    }
}

pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<OperatorProfile>, ApiError> {
    let operator = state
        .repos
        .operators
        .find_by_id(session.operator_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    Ok(Json(OperatorProfile::from(&operator)))
}
