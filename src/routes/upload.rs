use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::{json, Value};

use crate::{error::ApiError, models::auth::Session, services::upload::UploadService, AppState};

pub async fn upload_file(
    State(state): State<AppState>,
    _session: Session,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Internal(e.into()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let original = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Internal(e.into()))?;

        let url = UploadService::store(&state.config.upload_dir, &original, &bytes).await?;
        return Ok(Json(json!({ "url": url })));
    }

    Err(ApiError::Internal(anyhow::anyhow!(
        "No file field in upload"
    )))
}
